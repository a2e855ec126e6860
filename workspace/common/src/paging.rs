/// Position within a held list of bins. Wraps in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinCursor {
    index: usize,
    len: usize,
    turns: u64,
}

impl BinCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, turns: 0 }
    }

    /// `None` when there is nothing to page through.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        self.turns = self.turns.wrapping_add(1);
        Some(self.index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.turns = self.turns.wrapping_add(1);
        Some(self.index)
    }

    /// Fetch key for the bin under the cursor. Differs after every page turn,
    /// even when paging lands on the same bin again.
    pub fn detail_key(&self, bin_id: &str) -> String {
        format!("{}:{}", self.turns, bin_id)
    }
}

/// Bin id carried by a [`BinCursor::detail_key`].
pub fn bin_id_from_key(key: &str) -> &str {
    key.split_once(':').map_or(key, |(_, bin_id)| bin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_has_no_index() {
        let mut cursor = BinCursor::new(0);
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), None);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut cursor = BinCursor::new(3);
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut cursor = BinCursor::new(3);
        assert_eq!(cursor.previous(), Some(2));
        assert_eq!(cursor.previous(), Some(1));
    }

    #[test]
    fn test_index_always_in_range() {
        for len in 1..6 {
            let mut cursor = BinCursor::new(len);
            for step in 0..(len * 3) {
                let idx = if step % 3 == 0 { cursor.previous() } else { cursor.next() };
                assert!(idx.is_some_and(|i| i < len));
            }
        }
    }

    #[test]
    fn test_single_bin_stays_put() {
        let mut cursor = BinCursor::new(1);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.previous(), Some(0));
    }

    #[test]
    fn test_detail_key_changes_on_every_turn() {
        let mut cursor = BinCursor::new(1);
        let first = cursor.detail_key("B1");

        assert_eq!(cursor.next(), Some(0));
        let second = cursor.detail_key("B1");
        assert_ne!(first, second);

        assert_eq!(cursor.previous(), Some(0));
        assert_ne!(second, cursor.detail_key("B1"));
    }

    #[test]
    fn test_bin_id_from_key() {
        let cursor = BinCursor::new(2);
        assert_eq!(bin_id_from_key(&cursor.detail_key("BIN:7")), "BIN:7");
        assert_eq!(bin_id_from_key("B2"), "B2");
    }
}
