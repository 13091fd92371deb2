//! Per-attacker record of targets already hit during the current attack.
//!
//! Each record pairs a target handle with the seconds remaining in its
//! grace window. While a record is live the target cannot be re-admitted
//! as a new hit; once the window lapses the record is removed and the
//! target becomes hittable again (a spinning weapon re-striking the same
//! target on a later swing is a legitimate second hit).

use std::collections::HashMap;

use hecs::Entity;
use tracing::warn;

use truestrike_core::enums::TargetKind;

/// Hit bookkeeping for one attacker's active attack.
///
/// The counters are historical: they record everything that happened over
/// the tracker's lifetime and are never recomputed from the live records,
/// so grace-window expiry and `clear` never erase past scoring.
#[derive(Debug, Clone, Default)]
pub struct HitTracker {
    /// Targets inside their grace window, keyed by opaque entity handle.
    /// Values are the seconds remaining and stay strictly positive; an
    /// entry that would reach zero is removed instead.
    records: HashMap<Entity, f64>,
    hit_count: u32,
    npc_hit_count: u32,
    damaged_count: u32,
}

impl HitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `target` currently has a live grace-window record.
    pub fn has_hit(&self, target: Entity) -> bool {
        self.records.contains_key(&target)
    }

    /// Record a new hit against `target` with a grace window of
    /// `grace_secs`.
    ///
    /// Callers must check `has_hit` first; a duplicate call for a target
    /// with a live record is a no-op rather than a double count. A
    /// non-positive grace duration still scores the hit but leaves no
    /// record, so the target is immediately re-hittable.
    pub fn register_hit(&mut self, target: Entity, grace_secs: f64, kind: TargetKind) {
        if self.records.contains_key(&target) {
            return;
        }

        let grace_secs = if grace_secs < 0.0 {
            warn!(grace_secs, "negative grace duration clamped to zero");
            0.0
        } else {
            grace_secs
        };

        if grace_secs > 0.0 {
            self.records.insert(target, grace_secs);
        }
        self.hit_count += 1;
        if kind == TargetKind::Npc {
            self.npc_hit_count += 1;
        }
    }

    /// Called by the damage-resolution path after an admitted hit
    /// actually applied damage. A hit may be registered but blocked or
    /// absorbed, so this is deliberately a separate event.
    pub fn note_damage(&mut self) {
        self.damaged_count += 1;
    }

    /// Subtract `dt_secs` from every live record, removing any whose
    /// remaining time drops to zero or below. Called exactly once per
    /// tick; a zero delta is a valid no-op.
    pub fn advance(&mut self, dt_secs: f64) {
        let dt_secs = if dt_secs < 0.0 {
            warn!(dt_secs, "negative tick delta clamped to zero");
            0.0
        } else {
            dt_secs
        };
        if dt_secs == 0.0 {
            return;
        }

        self.records.retain(|_target, remaining| {
            *remaining -= dt_secs;
            *remaining > 0.0
        });
    }

    /// Drop all live records without touching the historical counters.
    /// Used when an attack's hit window resets mid-swing.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Whether any grace-window records remain. A tracker with zero live
    /// records may still belong to an in-progress attack.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of targets currently inside their grace window.
    pub fn active_targets(&self) -> usize {
        self.records.len()
    }

    /// Total hits registered over the tracker's lifetime.
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Hits registered against NPC targets.
    pub fn npc_hit_count(&self) -> u32 {
        self.npc_hit_count
    }

    /// Hits that went on to apply damage.
    pub fn damaged_count(&self) -> u32 {
        self.damaged_count
    }
}
