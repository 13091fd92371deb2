//! Hit-tracking engine for TRUESTRIKE.
//!
//! Owns all per-attacker attack sessions, advances grace windows once per
//! host tick, and decides whether each reported collision is a new hit or
//! a suppressed duplicate. Completely headless (no host-process
//! dependency), enabling deterministic testing.

pub mod adapter;
pub mod engine;
pub mod hit_tracker;
pub mod session;

pub use adapter::{pump, CollisionCandidate, CollisionSource};
pub use engine::{CombatEngine, EngineConfig, SessionError};
pub use truestrike_core as core;
