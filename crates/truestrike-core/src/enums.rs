//! Enumeration types used throughout the hit-detection core.

use serde::{Deserialize, Serialize};

/// Outcome of reporting a collision candidate against an attacker's
/// active session.
///
/// `NoSession` is a first-class result, not an error: collision events
/// can legitimately arrive for attackers whose attack ended in the same
/// tick, and callers must simply drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Admission {
    /// A new hit; the collision may proceed to damage resolution.
    Admitted,
    /// The target is still inside its grace window; ignore.
    Suppressed,
    /// The attacker has no active attack session; drop the event.
    NoSession,
}

/// Classification of a collision target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// A non-player character. Hits against NPCs are scored separately.
    Npc,
    /// Any other collidable (props, destructibles, projectiles).
    #[default]
    Object,
}

/// Why every active session was torn down at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    /// A saved game is being loaded; all prior handles may be stale.
    GameLoad,
    /// The game session was reset (new game, main menu).
    GameReset,
}
