//! Attack session data model — binds one attacker to one hit tracker.
//!
//! Stored in `CombatEngine`'s session map, NOT as ECS entities.

use hecs::Entity;

use truestrike_core::state::SessionView;

use crate::hit_tracker::HitTracker;

/// One continuous attack action by one attacker.
///
/// Created when the attack motion begins, destroyed when it ends, the
/// attacker is invalidated, or the game session is torn down. Owned
/// exclusively by the engine; nothing else holds a reference past a tick
/// boundary.
#[derive(Debug, Clone)]
pub struct AttackSession {
    /// Opaque handle of the attacking entity.
    pub attacker: Entity,
    /// Hit dedup state and counters for this attack.
    pub tracker: HitTracker,
    /// Tick at which the session began.
    pub started_tick: u64,
}

impl AttackSession {
    pub fn new(attacker: Entity, started_tick: u64) -> Self {
        Self {
            attacker,
            tracker: HitTracker::new(),
            started_tick,
        }
    }

    /// Build the read-only view published in snapshots.
    pub fn view(&self) -> SessionView {
        SessionView {
            attacker_id: self.attacker.to_bits().get(),
            started_tick: self.started_tick,
            active_targets: self.tracker.active_targets(),
            hit_count: self.tracker.hit_count(),
            npc_hit_count: self.tracker.npc_hit_count(),
            damaged_count: self.tracker.damaged_count(),
        }
    }
}
