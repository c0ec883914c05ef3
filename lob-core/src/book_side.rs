//! One side (bids or asks) of the book: a price-indexed map of `Level`s plus
//! an id index for O(1) average cancel, and a cached best-of-book tuple so
//! reads don't pay a tree descent every time.

use std::collections::{BTreeMap, HashMap};

use crate::level::{Level, NodeHandle};
use crate::types::{Order, OrderId, Price, Quantity, Side};

struct IndexEntry {
    price: Price,
    handle: NodeHandle,
}

pub(crate) struct BookSide {
    side: Side,
    levels: BTreeMap<Price, Level>,
    index: HashMap<OrderId, IndexEntry>,
    best: Option<(Price, Quantity)>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            index: HashMap::new(),
            best: None,
        }
    }

    /// The key of the best level under this side's ordering: highest price
    /// for bids, lowest price for asks.
    fn best_key(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    fn refresh_best(&mut self) {
        self.best = self
            .best_key()
            .map(|p| (p, self.levels.get(&p).expect("best key must have a level").quantity));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub(crate) fn best(&self) -> Option<(Price, Quantity)> {
        self.best
    }

    pub(crate) fn insert_order(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side, "order routed to the wrong book side");
        let price = order.price;
        let id = order.id;
        let level = self.levels.entry(price).or_insert_with(|| Level::new(price));
        let handle = level.push_back(order);
        self.index.insert(id, IndexEntry { price, handle });
        self.refresh_best();
    }

    /// Removes an order by id. Returns `true` if it was found and removed;
    /// unknown ids are a silent no-op.
    pub(crate) fn cancel(&mut self, id: OrderId) -> bool {
        let Some(entry) = self.index.remove(&id) else {
            return false;
        };
        let level = self
            .levels
            .get_mut(&entry.price)
            .expect("index entry referenced a price with no level");
        level.remove(entry.handle);
        if level.is_empty() {
            self.levels.remove(&entry.price);
        }
        self.refresh_best();
        true
    }

    /// The order resting at the front of the best level, if any. Uses the
    /// cached best price rather than re-deriving it from the map, so this
    /// is O(1) rather than an O(log L) tree descent.
    pub(crate) fn best_front(&self) -> Option<(OrderId, Price, Quantity)> {
        let (price, _) = self.best?;
        let level = self.levels.get(&price).expect("cached best price must have a level");
        let id = level.front_id().expect("non-empty level must have a front order");
        let qty = level.front_quantity().expect("non-empty level must have a front order");
        Some((id, price, qty))
    }

    /// Fills `qty` off the front order of the best level. Purges the order
    /// from the id index (and the level from the map) if it is now
    /// exhausted. Refreshes the cached best tuple.
    pub(crate) fn fill_best_front(&mut self, qty: Quantity) {
        let key = self.best.expect("fill_best_front called on an empty side").0;
        let level = self.levels.get_mut(&key).expect("best key must have a level");
        if let Some(handle) = level.fill_front(qty) {
            let removed = level.remove(handle);
            self.index.remove(&removed.id);
        }
        if level.is_empty() {
            self.levels.remove(&key);
        }
        self.refresh_best();
    }

    /// Sum of resting quantity across every active level on this side.
    /// Computed on demand rather than cached, unlike the per-side best tuple.
    pub(crate) fn total_quantity(&self) -> u64 {
        self.levels.values().map(|l| l.quantity as u64).sum()
    }

    /// Sum of quantity for levels priced in `[start, end]`, clamped on the
    /// low end to this side's best price. Only meaningful (and only used)
    /// on the ask side.
    pub(crate) fn volume_between(&self, start: Price, end: Price) -> Quantity {
        if start > end || self.levels.is_empty() {
            return 0;
        }
        let Some(lowest) = self.best_key() else {
            return 0;
        };
        if lowest > end {
            return 0;
        }
        let clamped_start = start.max(lowest);
        self.levels.range(clamped_start..=end).map(|(_, l)| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(id: OrderId, price: Price, qty: Quantity) -> Order {
        Order::new(id, Side::Buy, price, qty)
    }

    fn sell(id: OrderId, price: Price, qty: Quantity) -> Order {
        Order::new(id, Side::Sell, price, qty)
    }

    #[test]
    fn bids_best_is_highest_price() {
        let mut bids = BookSide::new(Side::Buy);
        bids.insert_order(buy(1, 100, 5));
        bids.insert_order(buy(2, 105, 3));
        bids.insert_order(buy(3, 95, 1));
        assert_eq!(bids.best(), Some((105, 3)));
    }

    #[test]
    fn asks_best_is_lowest_price() {
        let mut asks = BookSide::new(Side::Sell);
        asks.insert_order(sell(1, 100, 5));
        asks.insert_order(sell(2, 95, 3));
        asks.insert_order(sell(3, 105, 1));
        assert_eq!(asks.best(), Some((95, 3)));
    }

    #[test]
    fn cancel_unknown_id_is_noop() {
        let mut bids = BookSide::new(Side::Buy);
        bids.insert_order(buy(1, 100, 5));
        assert!(!bids.cancel(999));
        assert_eq!(bids.best(), Some((100, 5)));
    }

    #[test]
    fn cancel_empties_level_and_resets_best() {
        let mut bids = BookSide::new(Side::Buy);
        bids.insert_order(buy(1, 100, 5));
        assert!(bids.cancel(1));
        assert!(bids.is_empty());
        assert_eq!(bids.best(), None);
    }

    #[test]
    fn volume_between_clamps_low_end_to_best_ask() {
        let mut asks = BookSide::new(Side::Sell);
        asks.insert_order(sell(1, 10, 10));
        asks.insert_order(sell(2, 12, 5));
        asks.insert_order(sell(3, 13, 5));
        assert_eq!(asks.volume_between(0, 11), 10);
        assert_eq!(asks.volume_between(13, 13), 5);
        assert_eq!(asks.volume_between(5, 15), 20);
        assert_eq!(asks.volume_between(20, 10), 0);
    }

    #[test]
    fn volume_between_empty_side_is_zero() {
        let asks = BookSide::new(Side::Sell);
        assert_eq!(asks.volume_between(0, 100), 0);
    }
}
