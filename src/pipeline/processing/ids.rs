use std::collections::HashMap;

use crate::constants::ID_PREFIX;

/// Issues short, zero-padded, sequential member identifiers.
///
/// Records with a source identity always resolve to the same identifier;
/// id-less sub-elements get a fresh identifier on every call.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    width: usize,
    next: u64,
    assigned: HashMap<i64, String>,
}

impl IdAllocator {
    /// Create an allocator sized for `record_count` records so that ids stay
    /// lexicographically sortable over the expected range
    pub fn for_record_count(record_count: usize) -> Self {
        Self {
            width: Self::width_for(record_count),
            next: 1,
            assigned: HashMap::new(),
        }
    }

    /// Padding width: the record count's digit count plus two, at least one
    pub fn width_for(record_count: usize) -> usize {
        (record_count.to_string().len() + 2).max(1)
    }

    pub fn allocate(&mut self, source_id: Option<i64>) -> String {
        match source_id {
            Some(source_id) => {
                if let Some(existing) = self.assigned.get(&source_id) {
                    return existing.clone();
                }
                let id = self.next_id();
                self.assigned.insert(source_id, id.clone());
                id
            }
            None => self.next_id(),
        }
    }

    /// Identifier already assigned to a source record, if any
    pub fn lookup(&self, source_id: i64) -> Option<&str> {
        self.assigned.get(&source_id).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }

    fn next_id(&mut self) -> String {
        let id = format!("{}{:0width$}", ID_PREFIX, self.next, width = self.width);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_record_count() {
        assert_eq!(IdAllocator::width_for(0), 3);
        assert_eq!(IdAllocator::width_for(1), 3);
        assert_eq!(IdAllocator::width_for(9), 3);
        assert_eq!(IdAllocator::width_for(10), 4);
        assert_eq!(IdAllocator::width_for(1500), 6);
    }

    #[test]
    fn test_sequential_zero_padded() {
        let mut ids = IdAllocator::for_record_count(2);
        assert_eq!(ids.allocate(Some(100)), "ID001");
        assert_eq!(ids.allocate(Some(200)), "ID002");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_same_source_resolves_to_same_id() {
        let mut ids = IdAllocator::for_record_count(5);
        let first = ids.allocate(Some(42));
        let other = ids.allocate(Some(7));
        let again = ids.allocate(Some(42));

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(ids.lookup(42), Some(first.as_str()));
    }

    #[test]
    fn test_anonymous_allocations_are_never_cached() {
        let mut ids = IdAllocator::for_record_count(5);
        let a = ids.allocate(None);
        let b = ids.allocate(None);
        assert_ne!(a, b);
        assert_eq!(ids.allocate(Some(1)), "ID003");
    }

    #[test]
    fn test_counter_overflows_width_without_truncation() {
        let mut ids = IdAllocator::for_record_count(1);
        for _ in 0..999 {
            ids.allocate(None);
        }
        assert_eq!(ids.allocate(None), "ID1000");
    }
}
