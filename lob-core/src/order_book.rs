//! The order book facade: validates incoming orders, owns both sides, runs
//! the matcher, and answers read queries.

use crate::book_side::BookSide;
use crate::types::{NewOrder, Order, OrderBookError, OrderId, Price, Quantity, RawSide, Side, Trade, Trades};

/// A single-instrument limit order book.
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
    trades: Vec<Trade>,
    order_id_tracker: OrderId,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            trades: Vec::new(),
            order_id_tracker: 0,
        }
    }

    /// Validates and inserts `order`, then runs the matcher. Returns the
    /// trades produced by this call (possibly empty). Validation failures
    /// leave the book unchanged; an `Undefined` side is a silent no-op
    /// success, matching the feed's historical wire contract.
    pub fn add_order(&mut self, order: NewOrder) -> Result<Trades, OrderBookError> {
        if order.quantity < 1 {
            return Err(OrderBookError::invalid("quantity must be > 0"));
        }
        if order.id <= self.order_id_tracker {
            return Err(OrderBookError::invalid("order id must be strictly increasing"));
        }
        if order.price < 1 {
            return Err(OrderBookError::invalid("price must be > 0"));
        }
        let side = match order.side {
            RawSide::Undefined => return Ok(Vec::new()),
            RawSide::Buy => Side::Buy,
            RawSide::Sell => Side::Sell,
        };

        self.order_id_tracker = self.order_id_tracker.max(order.id);
        let resting = Order::new(order.id, side, order.price, order.quantity);
        match side {
            Side::Buy => self.bids.insert_order(resting),
            Side::Sell => self.asks.insert_order(resting),
        }

        Ok(self.run_matcher())
    }

    /// Removes a resting order by id in O(1) average time. Unknown ids are
    /// a silent no-op.
    pub fn cancel_order(&mut self, id: OrderId) {
        if !self.bids.cancel(id) {
            self.asks.cancel(id);
        }
    }

    /// Continuous cross loop: trades continue as long as both sides are
    /// non-empty and the best bid is at or above the best ask. The trade
    /// price is always the resting ask's price, regardless of which side
    /// is the incoming aggressor.
    fn run_matcher(&mut self) -> Trades {
        let mut produced = Vec::new();
        loop {
            let Some((bid_price, _)) = self.bids.best() else { break };
            let Some((ask_price, _)) = self.asks.best() else { break };
            if bid_price < ask_price {
                break;
            }

            let (bid_id, _, bid_qty) = self.bids.best_front().expect("bids non-empty per best() above");
            let (ask_id, ask_price, ask_qty) = self.asks.best_front().expect("asks non-empty per best() above");
            let qty = bid_qty.min(ask_qty);

            let trade = Trade::new(bid_id, ask_id, ask_price, qty);
            self.bids.fill_best_front(qty);
            self.asks.fill_best_front(qty);

            self.trades.push(trade);
            produced.push(trade);
        }
        produced
    }

    /// Full trade log for this book's lifetime.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Typed best-bid price, or `None` if the bid side is empty.
    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.best().map(|(p, _)| p)
    }

    /// Typed best-ask price, or `None` if the ask side is empty.
    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.best().map(|(p, _)| p)
    }

    /// Feed-facing best bid price; `0` if the side is empty.
    pub fn best_bid(&self) -> Price {
        self.best_bid_price().unwrap_or(0)
    }

    /// Feed-facing best ask price; `0` if the side is empty.
    pub fn best_ask(&self) -> Price {
        self.best_ask_price().unwrap_or(0)
    }

    /// Best bid price and its aggregated quantity; `(0, 0)` if empty.
    pub fn best_bid_with_quantity(&self) -> (Price, Quantity) {
        self.bids.best().unwrap_or((0, 0))
    }

    /// Best ask price and its aggregated quantity; `(0, 0)` if empty.
    pub fn best_ask_with_quantity(&self) -> (Price, Quantity) {
        self.asks.best().unwrap_or((0, 0))
    }

    /// Sum of ask-side quantity for prices in `[start, end]`, clamped on the
    /// low end to the lowest resting ask. Returns `0` for a degenerate range
    /// (`start > end`) or an empty ask side.
    pub fn ask_volume_between(&self, start: Price, end: Price) -> Quantity {
        self.asks.volume_between(start, end)
    }

    /// Total resting quantity on the bid side.
    pub fn bid_quantity(&self) -> u64 {
        self.bids.total_quantity()
    }

    /// Total resting quantity on the ask side.
    pub fn ask_quantity(&self) -> u64 {
        self.asks.total_quantity()
    }
}
