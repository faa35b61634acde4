//! Stale-load guard for views that reload on every revision bump

use leptos::prelude::*;

/// Counter of loads started by one view.
///
/// Each load takes a ticket from [`begin`](Self::begin); only the holder of
/// the latest ticket may publish its result. Once the owning view is
/// unmounted no ticket is current any more, so late responses are dropped.
#[derive(Clone, Copy)]
pub struct LoadGeneration(StoredValue<u64>);

impl LoadGeneration {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    pub fn begin(&self) -> u64 {
        self.0
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.try_get_value() == Some(ticket)
    }
}

impl Default for LoadGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_supersedes_older() {
        let owner = Owner::new();
        owner.with(|| {
            let generation = LoadGeneration::new();
            let first = generation.begin();
            let second = generation.begin();
            assert!(!generation.is_current(first));
            assert!(generation.is_current(second));
        });
    }

    #[test]
    fn test_no_ticket_is_current_after_unmount() {
        let owner = Owner::new();
        let (generation, ticket) = owner.with(|| {
            let generation = LoadGeneration::new();
            let ticket = generation.begin();
            (generation, ticket)
        });
        assert!(generation.is_current(ticket));

        drop(owner);
        assert!(!generation.is_current(ticket));
        assert_eq!(generation.begin(), 0);
    }
}
