/*!
Explicit seed state.

A descriptor's seed hook turns a 64-bit seed into a [`SeedState`], which is
then passed into every hash call. Algorithms that precompute a key schedule
store it as the expanded state; the rest only read [`SeedState::seed`].

Implementations that still cache derived state per thread must have their
seed hook called on every thread before that thread's first hash call. The
registry does not enforce this ordering.
*/

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Seed value plus optional algorithm-specific expansion
#[derive(Clone, Default)]
pub struct SeedState {
    seed: u64,
    expanded: Option<Arc<dyn Any + Send + Sync>>,
}

impl SeedState {
    /// Wrap a bare seed value
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, expanded: None }
    }

    /// Seed value with a derived schedule attached
    pub fn with_state<T: Any + Send + Sync>(seed: u64, state: T) -> Self {
        Self {
            seed,
            expanded: Some(Arc::new(state)),
        }
    }

    /// The seed value this state was derived from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The derived schedule, if one of type `T` is attached
    pub fn state<T: Any>(&self) -> Option<&T> {
        self.expanded.as_deref().and_then(|s| s.downcast_ref::<T>())
    }

    /// True if a derived schedule is attached
    pub fn is_expanded(&self) -> bool {
        self.expanded.is_some()
    }
}

impl From<u64> for SeedState {
    fn from(seed: u64) -> Self {
        Self::from_seed(seed)
    }
}

impl fmt::Debug for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedState")
            .field("seed", &format_args!("{:#018x}", self.seed))
            .field("expanded", &self.expanded.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Schedule([u64; 2]);

    #[test]
    fn test_bare_seed() {
        let state = SeedState::from(42);
        assert_eq!(state.seed(), 42);
        assert!(!state.is_expanded());
        assert!(state.state::<Schedule>().is_none());
    }

    #[test]
    fn test_expanded_state_downcast() {
        let state = SeedState::with_state(7, Schedule([1, 2]));
        assert_eq!(state.state::<Schedule>(), Some(&Schedule([1, 2])));
        assert!(state.state::<u32>().is_none());

        let cloned = state.clone();
        assert_eq!(cloned.state::<Schedule>(), Some(&Schedule([1, 2])));
    }
}
