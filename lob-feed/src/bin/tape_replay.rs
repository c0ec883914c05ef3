//! Thin runnable entry point: loads a CSV tape, streams it to the book over
//! the SPSC pipeline, and prints a summary. A one-shot runner, not an
//! interactive facade for the book's own API.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;

use lob_feed::{new_ring, run_consumer, run_producer, load_tape, EngineContext};

#[derive(Parser, Debug)]
#[command(about = "Replays a CSV order tape through the matching engine")]
struct Args {
    /// Path to the CSV tape file
    tape: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let messages = load_tape(&args.tape)?;
    tracing::info!(count = messages.len(), "loaded tape");

    let (producer, consumer) = new_ring();
    let done = Arc::new(AtomicBool::new(false));

    let producer_done = Arc::clone(&done);
    let producer_handle = std::thread::spawn(move || run_producer(producer, messages, producer_done));

    let mut ctx = EngineContext::new();
    run_consumer(consumer, done, &mut ctx);
    producer_handle.join().expect("producer thread panicked");

    println!("trades executed: {}", ctx.book.trades().len());
    println!("best bid: {}", ctx.book.best_bid());
    println!("best ask: {}", ctx.book.best_ask());
    println!("debug_volume_bid: {}", ctx.debug_volume_bid);
    println!("debug_volume_ask: {}", ctx.debug_volume_ask);

    Ok(())
}
