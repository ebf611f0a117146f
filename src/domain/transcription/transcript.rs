//! Transcript value objects

use serde::Serialize;

/// One transcribed utterance.
///
/// Speaker label is absent when diarization was disabled for the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utterance {
    pub speaker: Option<String>,
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
}

/// Ordered, validated transcription result. Produced once, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    /// Build a transcript from already-validated utterances.
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Concatenated utterance text, newline separated
    pub fn full_text(&self) -> String {
        self.utterances
            .iter()
            .map(|u| u.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Transcript {
    type Item = Utterance;
    type IntoIter = std::vec::IntoIter<Utterance>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(speaker: &str, start_ms: u64, end_ms: u64, text: &str) -> Utterance {
        Utterance {
            speaker: Some(speaker.to_string()),
            start_ms,
            end_ms,
            text: text.to_string(),
        }
    }

    #[test]
    fn transcript_preserves_order() {
        let transcript = Transcript::new(vec![
            utterance("A", 0, 2000, "hi"),
            utterance("B", 2000, 4000, "hello"),
        ]);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.utterances()[0].text, "hi");
        assert_eq!(transcript.utterances()[1].text, "hello");
    }

    #[test]
    fn full_text_joins_lines() {
        let transcript = Transcript::new(vec![
            utterance("A", 0, 1000, "one"),
            utterance("A", 1000, 2000, "two"),
        ]);
        assert_eq!(transcript.full_text(), "one\ntwo");
    }

    #[test]
    fn empty_transcript() {
        let transcript = Transcript::new(vec![]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.full_text(), "");
    }

    #[test]
    fn serializes_to_json() {
        let transcript = Transcript::new(vec![utterance("A", 0, 500, "hey")]);
        let json = serde_json::to_string(&transcript).unwrap();
        assert!(json.contains("\"speaker\":\"A\""));
        assert!(json.contains("\"start_ms\":0"));
        assert!(json.contains("\"text\":\"hey\""));
    }
}
