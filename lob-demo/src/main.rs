//! # lob-demo
//!
//! Narrated walkthroughs of the matching engine, built from the same
//! scenarios the test suite checks against exactly: basic matching, partial
//! fills, price-time priority, and a multi-level crossing scenario.

use lob_core::{NewOrder, OrderBook, RawSide, Trade};

fn main() {
    println!("=== Limit Order Book Demo ===\n");

    demo_basic_matching(&mut OrderBook::new());
    demo_partial_fills(&mut OrderBook::new());
    demo_price_time_priority(&mut OrderBook::new());
    demo_complex_scenario(&mut OrderBook::new());
    demo_cancel(&mut OrderBook::new());
}

/// A buy order at a price matches exactly with a sell order at that price.
fn demo_basic_matching(book: &mut OrderBook) {
    println!("-----------------------");
    println!("1. Basic Matching Demo:");
    println!("-----------------------");

    let trades = place(book, 1, RawSide::Buy, 100, 5);
    print_trades(&trades);
    print_book_state(book);

    let trades = place(book, 2, RawSide::Sell, 100, 5);
    print_trades(&trades);
    print_book_state(book);
}

/// A resting order only partially matched leaves its remainder in the book.
fn demo_partial_fills(book: &mut OrderBook) {
    println!("---------------------");
    println!("2. Partial Fill Demo:");
    println!("---------------------");

    place(book, 1, RawSide::Buy, 100, 15);

    let trades = place(book, 2, RawSide::Sell, 100, 10);
    print_trades(&trades);
    print_book_state(book);

    let trades = place(book, 3, RawSide::Sell, 100, 10);
    print_trades(&trades);
    print_book_state(book);
}

/// Orders are matched first by best price, then by FIFO arrival within a level.
fn demo_price_time_priority(book: &mut OrderBook) {
    println!("----------------------------");
    println!("3. Price-Time Priority Demo:");
    println!("----------------------------");

    place(book, 1, RawSide::Buy, 99, 10);
    place(book, 2, RawSide::Buy, 100, 10);
    place(book, 3, RawSide::Buy, 100, 10);

    print_book_state(book);

    let trades = place(book, 4, RawSide::Sell, 99, 25);
    print_trades(&trades);
    print_book_state(book);
}

/// An aggressive order sweeps multiple price levels on the other side.
fn demo_complex_scenario(book: &mut OrderBook) {
    println!("---------------------------");
    println!("4. Complex Market Scenario:");
    println!("---------------------------");

    println!("Building initial order book:");
    place(book, 1, RawSide::Buy, 98, 20);
    place(book, 2, RawSide::Buy, 99, 15);
    place(book, 3, RawSide::Buy, 100, 10);
    place(book, 4, RawSide::Sell, 101, 10);
    place(book, 5, RawSide::Sell, 102, 15);
    place(book, 6, RawSide::Sell, 103, 20);

    print_book_state(book);

    println!("\nLarge aggressive BUY order crosses the spread:");
    let trades = place(book, 7, RawSide::Buy, 102, 30);
    print_trades(&trades);
    print_book_state(book);

    println!("\nLarge aggressive SELL order:");
    let trades = place(book, 8, RawSide::Sell, 98, 40);
    print_trades(&trades);
    print_book_state(book);
}

/// Cancelling a resting order removes it before it can ever match.
fn demo_cancel(book: &mut OrderBook) {
    println!("-----------------");
    println!("5. Cancel Demo:");
    println!("-----------------");

    place(book, 1, RawSide::Buy, 100, 5);
    println!("--Cancelling order 1");
    book.cancel_order(1);
    let trades = place(book, 2, RawSide::Sell, 100, 5);
    print_trades(&trades);
    print_book_state(book);
}

fn print_trades(trades: &[Trade]) {
    if trades.is_empty() {
        println!("--No trades executed");
    } else {
        println!("--Trades executed:");
        for trade in trades {
            println!(
                "----Trade: {} @ {} (buy: {}, sell: {})",
                trade.quantity, trade.price, trade.buy_order_id, trade.sell_order_id
            );
        }
    }
}

fn print_book_state(book: &OrderBook) {
    println!("--Book state:");
    match book.best_bid_price() {
        Some(price) => println!("----Best BID: {} @ {}", book.best_bid_with_quantity().1, price),
        None => println!("----Best BID: None"),
    }
    match book.best_ask_price() {
        Some(price) => println!("----Best ASK: {} @ {}", book.best_ask_with_quantity().1, price),
        None => println!("----Best ASK: None"),
    }
    println!();
}

fn place(book: &mut OrderBook, id: u32, side: RawSide, price: u32, quantity: u32) -> Vec<Trade> {
    println!("--Placing {:?} order: ID={}, Price={}, Qty={}", side, id, price, quantity);
    book.add_order(NewOrder::new(id, side, price, quantity))
        .expect("demo orders are always valid")
}
