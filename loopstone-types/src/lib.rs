//! # loopstone-types
//!
//! Shared type definitions for the Loopstone loop-composition editor.
//! This crate holds the pure data model and pure logic: the bars × layers
//! placement grid, the scale-constrained pitch model, the sample palette,
//! the drill-down editor state, and the input/intent contracts.
//!
//! It performs no I/O and has no failure modes; every rejected operation is
//! a silent no-op or a clamp.

pub mod action;
pub mod export;
pub mod state;

pub use action::*;
pub use export::*;

// Re-export all state types at crate root for convenience
pub use state::*;

/// Opaque handle to a sample template owned by the palette. The editor never
/// inspects audio content, only the handle and its tick length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TemplateId(u32);

impl TemplateId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
