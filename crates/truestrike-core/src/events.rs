//! Events emitted by the hit-detection engine for scripting and telemetry.

use serde::{Deserialize, Serialize};

use crate::enums::{ResetReason, TargetKind};

/// Per-tick events drained into each `CombatSnapshot`.
///
/// Attacker and target identities are exported as raw `u64` handle bits;
/// consumers treat them as opaque keys, never as dereferenceable
/// pointers into the entity system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HitEvent {
    /// An attack session began for an attacker.
    SessionStarted { attacker_id: u64 },
    /// An attack session ended (attack finished or attacker invalidated).
    SessionEnded { attacker_id: u64 },
    /// A collision was admitted as a new hit.
    HitRegistered {
        attacker_id: u64,
        target_id: u64,
        kind: TargetKind,
    },
    /// A collision was suppressed by an active grace window.
    HitSuppressed { attacker_id: u64, target_id: u64 },
    /// The damage path confirmed an admitted hit actually dealt damage.
    DamageApplied { attacker_id: u64 },
    /// All sessions were torn down at once.
    SessionsReset { reason: ResetReason },
}
