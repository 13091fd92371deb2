//! Combat state snapshot — the read-only view exposed to scripting and
//! telemetry consumers after each tick.

use serde::{Deserialize, Serialize};

use crate::events::HitEvent;
use crate::types::SimTime;

/// Complete hit-tracking state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    /// Active attack sessions, sorted by attacker handle for
    /// deterministic serialization.
    pub sessions: Vec<SessionView>,
    /// Events emitted during this tick.
    pub events: Vec<HitEvent>,
}

/// Read-only view of one attacker's active session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    /// Opaque attacker handle bits.
    pub attacker_id: u64,
    /// Tick at which the session began.
    pub started_tick: u64,
    /// Targets currently inside their grace window.
    pub active_targets: usize,
    /// Total hits registered over the session's lifetime.
    pub hit_count: u32,
    /// Hits registered against NPC targets.
    pub npc_hit_count: u32,
    /// Hits that went on to apply damage.
    pub damaged_count: u32,
}
