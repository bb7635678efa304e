use core::cmp::Ordering;

use super::ZIndex;

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index, ensuring stable ordering within a layer.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_order() {
        let back = SortKey::new(ZIndex::new(0), 9);
        let front = SortKey::new(ZIndex::new(1), 0);
        assert!(back < front);
    }

    #[test]
    fn order_breaks_ties() {
        let a = SortKey::new(ZIndex::new(3), 1);
        let b = SortKey::new(ZIndex::new(3), 2);
        assert!(a < b);
    }

    #[test]
    fn above_saturates() {
        assert_eq!(ZIndex::new(i32::MAX).above(1), ZIndex::new(i32::MAX));
        assert_eq!(ZIndex::new(2).above(3), ZIndex::new(5));
    }
}
