//! Id minting capability.
//!
//! The store never invents ids itself; it asks an [`IdGenerator`]. The
//! production generator is random UUIDs, tests inject [`SequentialIds`]
//! to get stable, readable identifiers.

use uuid::Uuid;

/// Mints opaque identifier strings for new entities.
///
/// Implementations must make collisions negligible across the lifetime
/// of one store instance. No ordering relationship between successive
/// ids is assumed anywhere.
pub trait IdGenerator {
    /// Returns a fresh identifier, never equal to a previously returned one.
    fn fresh(&mut self) -> String;
}

/// Random UUID v4 identifiers. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn fresh(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-0`, `prefix-1`, … identifiers for tests and
/// demos.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator producing `{prefix}-0`, `{prefix}-1`, …
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn fresh(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
