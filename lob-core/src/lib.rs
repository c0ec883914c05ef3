//! # lob-core
//!
//! The core of a single-instrument limit order book matching engine:
//! a dual price-indexed book, a continuous price-time-priority matching
//! loop, O(1) average cancel-by-id, and the read queries a feed or
//! benchmark harness needs (best bid/ask, ask-side volume in a price
//! range).
//!
//! ## Example
//!
//! ```rust
//! use lob_core::{NewOrder, OrderBook, RawSide};
//!
//! let mut book = OrderBook::new();
//!
//! let trades = book.add_order(NewOrder::new(1, RawSide::Buy, 100, 10)).unwrap();
//! assert!(trades.is_empty()); // nothing resting to match yet
//!
//! let trades = book.add_order(NewOrder::new(2, RawSide::Sell, 100, 5)).unwrap();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(book.best_bid_with_quantity(), (100, 5));
//! ```

mod book_side;
mod level;
pub mod order_book;
pub mod types;

pub use order_book::OrderBook;
pub use types::{NewOrder, Order, OrderBookError, OrderId, Price, Quantity, RawSide, Side, Trade, Trades};
