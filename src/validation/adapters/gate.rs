//! Validation gate adapters.

use std::env;

use crate::validation::ports::ValidationGate;

/// Environment variable read by [`EnvironmentGate::default`].
pub const DEFAULT_GATE_VARIABLE: &str = "PROP_VALIDATOR";

/// Gate with a fixed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticGate {
    open: bool,
}

impl StaticGate {
    /// Creates a gate in the given state.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Creates a gate that always validates.
    #[must_use]
    pub const fn open() -> Self {
        Self::new(true)
    }

    /// Creates a gate that never validates.
    #[must_use]
    pub const fn closed() -> Self {
        Self::new(false)
    }
}

impl ValidationGate for StaticGate {
    fn is_open(&self) -> bool {
        self.open
    }
}

/// Gate controlled by an environment variable.
///
/// Open while the variable is set to a non-empty value. The variable is read
/// again on every call, so toggling it takes effect immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentGate {
    variable: String,
}

impl EnvironmentGate {
    /// Creates a gate reading `variable`.
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Returns the variable this gate reads.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for EnvironmentGate {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_VARIABLE)
    }
}

impl ValidationGate for EnvironmentGate {
    fn is_open(&self) -> bool {
        env::var_os(&self.variable).is_some_and(|value| !value.is_empty())
    }
}
