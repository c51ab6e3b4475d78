/// Stale-load guard for page-level data fetches.
///
/// Pages re-trigger their loads on navigation and input changes without
/// cancelling requests already in flight. The guard tags each load with an
/// epoch; a completion whose epoch has been superseded is discarded so a
/// slow response cannot overwrite fresher state. This is the only ordering
/// discipline in the client; it provides no cross-operation consistency.
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct LoadGuard {
    epoch: AtomicU64,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier one.
    pub fn begin(&self) -> LoadToken<'_> {
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        LoadToken { guard: self, epoch }
    }

    /// Supersede all outstanding loads without starting a new one, e.g.
    /// when the component requesting them is torn down.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

#[derive(Debug)]
pub struct LoadToken<'a> {
    guard: &'a LoadGuard,
    epoch: u64,
}

impl LoadToken<'_> {
    pub fn is_current(&self) -> bool {
        self.guard.epoch.load(Ordering::Acquire) == self.epoch
    }

    /// Keep `value` only if this load is still the active one.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            log::debug!("Discarding stale load result (epoch {})", self.epoch);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_load_is_discarded() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        assert!(first.is_current());
        assert_eq!(first.accept(1), Some(1));

        let second = guard.begin();
        assert!(!first.is_current());
        assert_eq!(first.accept(1), None);
        assert_eq!(second.accept(2), Some(2));
    }

    #[test]
    fn invalidate_supersedes_without_new_load() {
        let guard = LoadGuard::new();
        let token = guard.begin();
        guard.invalidate();
        assert_eq!(token.accept("late"), None);
    }
}
