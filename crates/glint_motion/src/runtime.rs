//! Process-wide registration guard
//!
//! The reveal engine registers the motion runtime before creating its first
//! binding. Registration is a one-time side effect; callers invoke
//! `ensure_registered` freely and only the first call does anything.

use std::sync::atomic::{AtomicBool, Ordering};

static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register the motion runtime. Idempotent; only the first call has effect.
pub fn ensure_registered() {
    if REGISTERED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
    {
        tracing::debug!("motion runtime registered");
    }
}

/// Whether registration has happened
pub fn is_registered() -> bool {
    REGISTERED.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_registration_is_idempotent() {
        ensure_registered();
        assert!(is_registered());
        // Second call must be a no-op, not a panic or a second effect
        ensure_registered();
        assert!(is_registered());
    }
}
