//! The message variants carried across the SPSC ring and parsed from a tape.

use lob_core::{NewOrder, OrderId, Price, RawSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderMessage {
    AddOrder(NewOrder),
    CancelOrder { id: OrderId },
    GetBestBid,
    GetAskVolumeBetweenPrices { low: Price, high: Price },
}

/// Parses one CSV tape line (header already skipped) into a message.
/// Returns `None` for a blank, unrecognized, or malformed line rather than
/// panicking: the tape is an external input, not an internal invariant.
pub fn parse_line(line: &str) -> Option<OrderMessage> {
    let mut fields = line.split(',').map(str::trim);
    let variant = fields.next()?;
    match variant {
        "AddOrder" => {
            let id: OrderId = fields.next()?.parse().ok()?;
            let side = match fields.next()? {
                "buy" => RawSide::Buy,
                "sell" => RawSide::Sell,
                _ => RawSide::Undefined,
            };
            let price: Price = fields.next()?.parse().ok()?;
            let quantity = fields.next()?.parse().ok()?;
            Some(OrderMessage::AddOrder(NewOrder::new(id, side, price, quantity)))
        }
        "CancelOrder" => {
            let id: OrderId = fields.next()?.parse().ok()?;
            Some(OrderMessage::CancelOrder { id })
        }
        "GetBestBid" => Some(OrderMessage::GetBestBid),
        "GetAskVolumeBetweenPrices" => {
            // The reference tape format pads this row with empty leading
            // fields before the two prices; skip past them.
            let mut next = fields.next()?;
            while next.is_empty() {
                next = fields.next()?;
            }
            let low: Price = next.parse().ok()?;
            let high: Price = fields.next()?.parse().ok()?;
            Some(OrderMessage::GetAskVolumeBetweenPrices { low, high })
        }
        _ => None,
    }
}
