//! Tuning parameters for the hit-detection core.

/// Nominal host frame rate (Hz). The host may deliver variable deltas;
/// this is only the reference rate used by tests and defaults.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Hit admission ---

/// Default no-re-hit window in seconds, applied when a collision
/// candidate does not carry a per-weapon grace duration.
///
/// Long enough that a single swing cannot double-register against the
/// same target, short enough that a spinning follow-through can land a
/// second legitimate hit.
pub const DEFAULT_HIT_GRACE_SECS: f64 = 0.3;
