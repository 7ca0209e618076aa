//! State: Single-slot state cells owned by the root.

/// A value owned by a component, with change tracking.
///
/// Setting a value equal to the current one is a no-op: the version does not
/// move and the caller is told nothing changed, so no re-evaluation follows.
#[derive(Debug, Clone, Default)]
pub struct State<T> {
    value: T,
    version: u64,
}

impl<T: PartialEq> State<T> {
    /// Create a cell holding `value` at version 0.
    pub const fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    /// The current value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value. Returns `true` if it actually changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        true
    }

    /// Number of real changes since creation.
    pub const fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_empty() {
        let state: State<String> = State::default();
        assert_eq!(state.get(), "");
        assert_eq!(state.version(), 0);
    }

    #[test]
    fn test_set_bumps_version() {
        let mut state = State::new(String::new());
        assert!(state.set(String::from("D")));
        assert!(state.set(String::from("Do")));
        assert_eq!(state.version(), 2);
    }

    #[test]
    fn test_set_same_value_is_noop() {
        let mut state = State::new(String::from("Doe"));
        assert!(!state.set(String::from("Doe")));
        assert_eq!(state.version(), 0);
    }
}
