//! Speech provider adapters

mod rtzr;

pub use rtzr::RtzrClient;
