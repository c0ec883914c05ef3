//! Loads a CSV tape file (see crate docs for the wire format) into a `Vec`
//! of messages, skipping the header row and warning on unparseable lines
//! instead of failing the whole run.

use std::fs;
use std::io;
use std::path::Path;

use crate::message::{parse_line, OrderMessage};

pub fn load_tape(path: &Path) -> io::Result<Vec<OrderMessage>> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();
    lines.next(); // header row

    let mut messages = Vec::new();
    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(message) => messages.push(message),
            None => tracing::warn!(line_number = offset + 2, %line, "skipping unparseable tape line"),
        }
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lob_core::{NewOrder, RawSide};

    #[test]
    fn loads_and_skips_header_and_blank_lines() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lob_feed_test_tape_{}.csv", std::process::id()));
        fs::write(
            &path,
            "type,id,side,price,quantity\nAddOrder,1,buy,100,5\n\nCancelOrder,1\nGetBestBid\n",
        )
        .unwrap();

        let messages = load_tape(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            messages,
            vec![
                OrderMessage::AddOrder(NewOrder::new(1, RawSide::Buy, 100, 5)),
                OrderMessage::CancelOrder { id: 1 },
                OrderMessage::GetBestBid,
            ]
        );
    }
}
