//! Collision adapter boundary.
//!
//! The geometric collision query lives outside this crate; it plugs in
//! through `CollisionSource` and hands the engine opaque candidate
//! tuples. Nothing here computes or validates geometry, and entity
//! handles are never dereferenced — a handle whose entity has been
//! despawned simply stops matching future candidates.

use hecs::World;

use truestrike_core::enums::TargetKind;
use truestrike_core::state::CombatSnapshot;

use crate::engine::CombatEngine;

/// One geometric overlap detected since the last tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionCandidate {
    pub attacker: hecs::Entity,
    pub target: hecs::Entity,
    pub kind: TargetKind,
    /// Per-weapon grace window; `None` uses the engine default.
    pub grace_secs: Option<f64>,
}

/// Producer of per-tick collision candidates.
///
/// Implemented by whatever adapts the host's physics/animation collision
/// query. Reads the world, never mutates engine state directly.
pub trait CollisionSource {
    fn collect(&mut self, world: &World, out: &mut Vec<CollisionCandidate>);
}

/// Run one tick of the hit-detection pipeline: gather this tick's
/// candidates from `source`, queue them, and advance the engine.
///
/// `CombatEngine::tick` applies grace-window expiry for the elapsed time
/// before admitting the queued candidates, which keeps the
/// advance-before-admit ordering correct for adapter users.
pub fn pump(
    engine: &mut CombatEngine,
    source: &mut dyn CollisionSource,
    world: &World,
    dt_secs: f64,
) -> CombatSnapshot {
    let mut candidates = Vec::new();
    source.collect(world, &mut candidates);
    engine.queue_collisions(candidates);
    engine.tick(dt_secs)
}
