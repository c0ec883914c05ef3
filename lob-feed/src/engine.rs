//! Owns the book and the debug checksum accumulators a query dispatch folds
//! into. A single value moved into the consumer thread, replacing the
//! original's process-global book/queue/flag statics.

use lob_core::OrderBook;

use crate::message::OrderMessage;

pub struct EngineContext {
    pub book: OrderBook,
    /// Running fold of best-bid quantity observed by `GetBestBid` queries.
    /// Exists so the optimizer can't elide query dispatch during a
    /// benchmark run; not a feature of the matching engine itself.
    pub debug_volume_bid: u64,
    pub debug_volume_ask: u64,
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
            debug_volume_bid: 0,
            debug_volume_ask: 0,
        }
    }

    pub fn dispatch(&mut self, message: OrderMessage) {
        match message {
            OrderMessage::AddOrder(order) => {
                if let Err(err) = self.book.add_order(order) {
                    tracing::warn!(%err, order_id = order.id, "rejected order");
                }
            }
            OrderMessage::CancelOrder { id } => self.book.cancel_order(id),
            OrderMessage::GetBestBid => {
                let (_, quantity) = self.book.best_bid_with_quantity();
                self.debug_volume_bid = self.debug_volume_bid.wrapping_add(quantity as u64);
            }
            OrderMessage::GetAskVolumeBetweenPrices { low, high } => {
                let volume = self.book.ask_volume_between(low, high);
                self.debug_volume_ask = self.debug_volume_ask.wrapping_add(volume as u64);
            }
        }
    }
}
