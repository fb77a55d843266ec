//! Plain state models provided to components as context signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeping these as ordinary structs with explicit operations lets the
//! navigation contract be unit-tested without a browser; components wrap
//! them in `RwSignal`s.

pub mod nav;
pub mod notifications;
