//! Value types shared across the book: ids, prices, orders and trades.

use chrono::{DateTime, Utc};
use derive_more::Display;

pub type Price = u32;
pub type Quantity = u32;
pub type OrderId = u32;

/// Which side of the book a resting order sits on.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

/// The side as it arrives on the wire. Unrecognized or absent input is a
/// distinct, valid state rather than an error: `add_order` silently no-ops
/// for `Undefined` instead of rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawSide {
    Undefined,
    Buy,
    Sell,
}

impl From<Side> for RawSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => RawSide::Buy,
            Side::Sell => RawSide::Sell,
        }
    }
}

/// A newly arriving order, prior to validation. `side` is tri-state because
/// the feed boundary allows an `Undefined` value through as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub id: OrderId,
    pub side: RawSide,
    pub price: Price,
    pub quantity: Quantity,
}

impl NewOrder {
    pub fn new(id: OrderId, side: RawSide, price: Price, quantity: Quantity) -> Self {
        Self { id, side, price, quantity }
    }
}

/// A resting order. Its position within a `Level`'s FIFO is tracked
/// externally by a `NodeHandle`, not stored on the order itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self { id, side, price, quantity }
    }
}

/// A completed match between a resting and an incoming order.
///
/// Equality ignores `timestamp`: two trades with identical economic terms
/// are the same trade regardless of wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,
}

impl Trade {
    pub(crate) fn new(buy_order_id: OrderId, sell_order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            timestamp: Utc::now(),
        }
    }
}

impl PartialEq for Trade {
    fn eq(&self, other: &Self) -> bool {
        self.buy_order_id == other.buy_order_id
            && self.sell_order_id == other.sell_order_id
            && self.price == other.price
            && self.quantity == other.quantity
    }
}

impl Eq for Trade {}

/// A collection of trades, typically returned from order matching operations.
pub type Trades = Vec<Trade>;

/// Error type for order book operations. Always recoverable: a caller seeing
/// this knows the book was not mutated. Broken internal invariants are
/// `assert!`/`debug_assert!` panics, never a variant here.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    #[display("invalid argument: {}", reason)]
    InvalidArgument { reason: String },
}

impl std::error::Error for OrderBookError {}

impl OrderBookError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OrderBookError::InvalidArgument { reason: reason.into() }
    }
}
