//! Built-in providers adapters forward through.

/// Provider for explicitly registered implementations.
///
/// Forwards every operation to the wrapped type's `{Trait}Impl`
/// registration.
#[derive(Debug, Clone, Copy)]
pub struct Registered;

/// Provider for types that satisfy the capability on their own.
///
/// Forwards straight to the type's own trait implementation; no separate
/// implementation object exists.
#[derive(Debug, Clone, Copy)]
pub struct Native;
