//! Bounded lock-free single-producer/single-consumer handoff between tape
//! ingestion and the book: an `rtrb` ring paired with a shared
//! `Arc<AtomicBool>` done-flag, owned locally rather than as process
//! globals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::engine::EngineContext;
use crate::message::OrderMessage;

/// Ring capacity; full is rare at 1024 slots.
pub const RING_CAPACITY: usize = 1024;

/// Consumer back-off when the ring is empty and the producer is not yet done.
pub const CONSUMER_BACKOFF: Duration = Duration::from_micros(10);

pub fn new_ring() -> (Producer<OrderMessage>, Consumer<OrderMessage>) {
    RingBuffer::new(RING_CAPACITY)
}

/// Pushes every message from `messages` into the ring, backing off on
/// `PushError::Full`, then signals `done`. Runs on the producer thread.
pub fn run_producer(mut producer: Producer<OrderMessage>, messages: impl IntoIterator<Item = OrderMessage>, done: Arc<AtomicBool>) {
    for mut message in messages {
        loop {
            match producer.push(message) {
                Ok(()) => break,
                Err(PushError::Full(returned)) => {
                    message = returned;
                    std::thread::sleep(CONSUMER_BACKOFF);
                }
            }
        }
    }
    done.store(true, Ordering::Release);
}

/// Pops and dispatches messages until the producer is done and the ring has
/// drained. Runs on the consumer thread, which is the sole owner of `ctx`.
pub fn run_consumer(mut consumer: Consumer<OrderMessage>, done: Arc<AtomicBool>, ctx: &mut EngineContext) {
    loop {
        match consumer.pop() {
            Ok(message) => {
                #[cfg(debug_assertions)]
                tracing::debug!(?message, "dispatching");
                ctx.dispatch(message);
            }
            Err(_) => {
                if done.load(Ordering::Acquire) && consumer.is_empty() {
                    break;
                }
                std::thread::sleep(CONSUMER_BACKOFF);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lob_core::{NewOrder, RawSide};

    #[test]
    fn producer_consumer_round_trip() {
        let (producer, consumer) = new_ring();
        let done = Arc::new(AtomicBool::new(false));

        let messages = vec![
            OrderMessage::AddOrder(NewOrder::new(1, RawSide::Buy, 100, 5)),
            OrderMessage::AddOrder(NewOrder::new(2, RawSide::Sell, 100, 5)),
            OrderMessage::GetBestBid,
        ];

        let producer_done = Arc::clone(&done);
        let handle = std::thread::spawn(move || run_producer(producer, messages, producer_done));

        let mut ctx = EngineContext::new();
        run_consumer(consumer, done, &mut ctx);
        handle.join().unwrap();

        assert_eq!(ctx.book.trades().len(), 1);
    }

    #[test]
    fn consumer_backs_off_then_drains_once_producer_catches_up() {
        let (mut producer, consumer) = new_ring();
        let done = Arc::new(AtomicBool::new(false));
        let consumer_done = Arc::clone(&done);

        let handle = std::thread::spawn(move || {
            let mut ctx = EngineContext::new();
            run_consumer(consumer, consumer_done, &mut ctx);
            ctx
        });

        std::thread::sleep(Duration::from_micros(50));
        producer.push(OrderMessage::AddOrder(NewOrder::new(1, RawSide::Buy, 50, 3))).unwrap();
        done.store(true, Ordering::Release);

        let ctx = handle.join().unwrap();
        assert_eq!(ctx.book.best_bid(), 50);
    }
}
