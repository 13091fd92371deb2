//! Core types and definitions for the TRUESTRIKE hit-detection core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, events, snapshot views, and constants. It has no dependency
//! on the entity system or any host runtime.

pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
