use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};

/// One constructed code: its transition sequence plus a free-form note on
/// how it was produced ("by hand", "backtrack", "(5 + 2)", ...).
///
/// Entries are immutable once stored; re-deriving a bit-width replaces the
/// whole entry.
#[derive(Debug, Clone)]
pub(crate) struct CodeEntry {
    pub transitions: Vec<u32>,
    pub provenance: String,
}

/// Arena of code entries addressed by bit-width.
///
/// Entries live in a SlotMap and are reached through a bit-width index,
/// so an overwrite is an insert plus removal of the stale key.
#[derive(Debug)]
pub(crate) struct CodeTable {
    entries: SlotMap<DefaultKey, CodeEntry>,
    by_width: HashMap<u32, DefaultKey>,
    capacity: u32,
}

impl CodeTable {
    /// Creates an empty table accepting bit-widths `1..=capacity`.
    pub(crate) fn new(capacity: u32) -> Self {
        Self {
            entries: SlotMap::new(),
            by_width: HashMap::default(),
            capacity,
        }
    }

    /// The largest bit-width this table can hold.
    pub(crate) fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Looks up the entry for `bit_width`.
    ///
    /// Returns None for width 0, widths beyond capacity, and widths no
    /// code has been stored for.
    pub(crate) fn get(&self, bit_width: u32) -> Option<&CodeEntry> {
        if bit_width == 0 || bit_width > self.capacity {
            return None;
        }
        let key = self.by_width.get(&bit_width)?;
        self.entries.get(*key)
    }

    /// Stores a code for `bit_width`, replacing any previous entry.
    pub(crate) fn put(&mut self, bit_width: u32, transitions: Vec<u32>, provenance: String) {
        debug_assert!(
            bit_width >= 1 && bit_width <= self.capacity,
            "bit-width must be validated before storing"
        );
        debug_assert_eq!(
            transitions.len(),
            1usize << bit_width,
            "a width-n code has 2^n transitions"
        );

        let key = self.entries.insert(CodeEntry {
            transitions,
            provenance,
        });
        if let Some(stale) = self.by_width.insert(bit_width, key) {
            self.entries.remove(stale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let mut table = CodeTable::new(4);
        table.put(1, vec![0, 0], "by hand".to_string());

        let entry = table.get(1).expect("entry should exist");
        assert_eq!(entry.transitions, vec![0, 0]);
        assert_eq!(entry.provenance, "by hand");
    }

    #[test]
    fn test_get_unpopulated_is_none() {
        let table = CodeTable::new(4);
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let mut table = CodeTable::new(2);
        table.put(1, vec![0, 0], "by hand".to_string());

        assert!(table.get(0).is_none());
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let mut table = CodeTable::new(4);
        table.put(1, vec![0, 0], "by hand".to_string());
        table.put(1, vec![0, 0], "backtrack".to_string());

        assert_eq!(table.get(1).unwrap().provenance, "backtrack");
    }
}
