//! Validation gate port.

/// Session-scoped switch deciding whether validation runs at all.
///
/// The rule functions never consult a gate themselves; services read it
/// once per validation call before invoking a rule.
pub trait ValidationGate {
    /// Returns `true` when validation is enabled.
    fn is_open(&self) -> bool;
}

impl<G: ValidationGate + ?Sized> ValidationGate for &G {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

impl<G: ValidationGate + ?Sized> ValidationGate for std::sync::Arc<G> {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}
