//! Terminal payload to transcript mapping

use crate::application::ports::TranscriptionPayload;
use crate::domain::error::OrchestrationError;
use crate::domain::transcription::{Transcript, Utterance};

/// Validate and convert a terminal payload into a transcript.
///
/// Pure transformation, no I/O. A single malformed entry fails the
/// whole mapping: presenting a partial transcript as if complete is
/// worse than failing loudly.
pub fn map_payload(payload: TranscriptionPayload) -> Result<Transcript, OrchestrationError> {
    let mut utterances = Vec::with_capacity(payload.utterances.len());
    let mut previous_start: u64 = 0;

    for (index, raw) in payload.utterances.into_iter().enumerate() {
        if raw.start_ms < 0 || raw.end_ms < 0 {
            return Err(OrchestrationError::Validation(format!(
                "utterance {} has negative offsets ({}..{})",
                index, raw.start_ms, raw.end_ms
            )));
        }
        let start_ms = raw.start_ms as u64;
        let end_ms = raw.end_ms as u64;

        if end_ms < start_ms {
            return Err(OrchestrationError::Validation(format!(
                "utterance {} ends before it starts ({}..{})",
                index, start_ms, end_ms
            )));
        }
        if start_ms < previous_start {
            return Err(OrchestrationError::Validation(format!(
                "utterance {} starts at {}ms, before its predecessor at {}ms",
                index, start_ms, previous_start
            )));
        }
        if raw.text.trim().is_empty() {
            return Err(OrchestrationError::Validation(format!(
                "utterance {} has empty text",
                index
            )));
        }

        previous_start = start_ms;
        utterances.push(Utterance {
            speaker: raw.speaker,
            start_ms,
            end_ms,
            text: raw.text,
        });
    }

    Ok(Transcript::new(utterances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RawUtterance;

    fn raw(speaker: Option<&str>, start_ms: i64, end_ms: i64, text: &str) -> RawUtterance {
        RawUtterance {
            speaker: speaker.map(|s| s.to_string()),
            start_ms,
            end_ms,
            text: text.to_string(),
        }
    }

    #[test]
    fn maps_ordered_utterances_verbatim() {
        let payload = TranscriptionPayload {
            utterances: vec![
                raw(Some("A"), 0, 2000, "hi"),
                raw(Some("B"), 2000, 4000, "hello"),
            ],
        };

        let transcript = map_payload(payload).unwrap();

        assert_eq!(transcript.len(), 2);
        let first = &transcript.utterances()[0];
        assert_eq!(first.speaker.as_deref(), Some("A"));
        assert_eq!(first.start_ms, 0);
        assert_eq!(first.end_ms, 2000);
        assert_eq!(first.text, "hi");
        let second = &transcript.utterances()[1];
        assert_eq!(second.speaker.as_deref(), Some("B"));
        assert_eq!(second.start_ms, 2000);
        assert_eq!(second.end_ms, 4000);
        assert_eq!(second.text, "hello");
    }

    #[test]
    fn missing_speaker_is_allowed() {
        let payload = TranscriptionPayload {
            utterances: vec![raw(None, 0, 1000, "no diarization")],
        };
        let transcript = map_payload(payload).unwrap();
        assert!(transcript.utterances()[0].speaker.is_none());
    }

    #[test]
    fn empty_payload_maps_to_empty_transcript() {
        let transcript = map_payload(TranscriptionPayload::default()).unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn negative_offset_rejected() {
        let payload = TranscriptionPayload {
            utterances: vec![raw(Some("A"), -1, 1000, "bad")],
        };
        assert!(matches!(
            map_payload(payload),
            Err(OrchestrationError::Validation(_))
        ));
    }

    #[test]
    fn end_before_start_rejected() {
        let payload = TranscriptionPayload {
            utterances: vec![raw(Some("A"), 2000, 1000, "bad")],
        };
        assert!(matches!(
            map_payload(payload),
            Err(OrchestrationError::Validation(_))
        ));
    }

    #[test]
    fn decreasing_starts_rejected() {
        let payload = TranscriptionPayload {
            utterances: vec![
                raw(Some("A"), 2000, 3000, "second"),
                raw(Some("B"), 1000, 2000, "first"),
            ],
        };
        assert!(matches!(
            map_payload(payload),
            Err(OrchestrationError::Validation(_))
        ));
    }

    #[test]
    fn empty_text_rejected_not_dropped() {
        let payload = TranscriptionPayload {
            utterances: vec![raw(Some("A"), 0, 1000, "ok"), raw(Some("A"), 1000, 2000, "  ")],
        };
        // The whole mapping fails; the bad entry is not silently dropped
        assert!(matches!(
            map_payload(payload),
            Err(OrchestrationError::Validation(_))
        ));
    }
}
