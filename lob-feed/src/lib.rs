//! # lob-feed
//!
//! Pipelines a CSV order tape through a bounded lock-free SPSC ring into a
//! single consumer thread that owns the [`lob_core::OrderBook`] and runs
//! the matching engine. This is the feed-and-process half of the system;
//! the matching logic itself lives in `lob-core`.

pub mod engine;
pub mod message;
pub mod pipeline;
pub mod tape;

pub use engine::EngineContext;
pub use message::OrderMessage;
pub use pipeline::{new_ring, run_consumer, run_producer, CONSUMER_BACKOFF, RING_CAPACITY};
pub use tape::load_tape;
