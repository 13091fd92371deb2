//! Hit-detection engine — the attack session controller.
//!
//! `CombatEngine` owns one `AttackSession` per attacking entity, advances
//! every session's grace windows once per host tick, admits or suppresses
//! reported collisions, and produces `CombatSnapshot`s for scripting and
//! telemetry consumers.

use std::collections::{HashMap, VecDeque};

use hecs::Entity;
use thiserror::Error;
use tracing::{debug, warn};

use truestrike_core::constants::DEFAULT_HIT_GRACE_SECS;
use truestrike_core::enums::{Admission, ResetReason, TargetKind};
use truestrike_core::events::HitEvent;
use truestrike_core::state::CombatSnapshot;
use truestrike_core::types::SimTime;

use crate::adapter::CollisionCandidate;
use crate::session::AttackSession;

/// Caller protocol violations surfaced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session must be ended before a new one begins for the same
    /// attacker.
    #[error("attacker already has an active attack session")]
    AlreadyActive,
}

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Grace window applied to candidates that carry no per-weapon
    /// duration.
    pub default_grace_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_grace_secs: DEFAULT_HIT_GRACE_SECS,
        }
    }
}

/// The hit-detection engine. Owns all attack sessions and sim state.
pub struct CombatEngine {
    sessions: HashMap<Entity, AttackSession>,
    time: SimTime,
    config: EngineConfig,
    candidate_queue: VecDeque<CollisionCandidate>,
    events: Vec<HitEvent>,
}

impl CombatEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            time: SimTime::default(),
            config,
            candidate_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Begin an attack session for `attacker`.
    ///
    /// Fails if a session is already active; the caller must end or
    /// clear the prior attack first.
    pub fn begin_session(&mut self, attacker: Entity) -> Result<(), SessionError> {
        if self.sessions.contains_key(&attacker) {
            return Err(SessionError::AlreadyActive);
        }
        debug!(attacker = attacker.to_bits().get(), "attack session started");
        self.sessions
            .insert(attacker, AttackSession::new(attacker, self.time.tick));
        self.events.push(HitEvent::SessionStarted {
            attacker_id: attacker.to_bits().get(),
        });
        Ok(())
    }

    /// End `attacker`'s session, releasing all its records. No-op if no
    /// session is active.
    pub fn end_session(&mut self, attacker: Entity) {
        if self.sessions.remove(&attacker).is_some() {
            debug!(attacker = attacker.to_bits().get(), "attack session ended");
            self.events.push(HitEvent::SessionEnded {
                attacker_id: attacker.to_bits().get(),
            });
        }
    }

    /// Decide admission for one collision candidate.
    ///
    /// The check and the insert are one operation on the attacker's
    /// tracker, so a re-entrant report within the same tick cannot
    /// double-admit. `grace_secs = None` falls back to the configured
    /// default window.
    pub fn report_collision(
        &mut self,
        attacker: Entity,
        target: Entity,
        grace_secs: Option<f64>,
        kind: TargetKind,
    ) -> Admission {
        let Some(session) = self.sessions.get_mut(&attacker) else {
            return Admission::NoSession;
        };

        if session.tracker.has_hit(target) {
            self.events.push(HitEvent::HitSuppressed {
                attacker_id: attacker.to_bits().get(),
                target_id: target.to_bits().get(),
            });
            return Admission::Suppressed;
        }

        let grace = grace_secs.unwrap_or(self.config.default_grace_secs);
        session.tracker.register_hit(target, grace, kind);
        self.events.push(HitEvent::HitRegistered {
            attacker_id: attacker.to_bits().get(),
            target_id: target.to_bits().get(),
            kind,
        });
        Admission::Admitted
    }

    /// Damage-path callback: record that an admitted hit applied damage.
    /// Returns false (and drops the event) if the attacker's session has
    /// already ended.
    pub fn note_damage(&mut self, attacker: Entity) -> bool {
        let Some(session) = self.sessions.get_mut(&attacker) else {
            return false;
        };
        session.tracker.note_damage();
        self.events.push(HitEvent::DamageApplied {
            attacker_id: attacker.to_bits().get(),
        });
        true
    }

    /// Queue a collision candidate for admission at the next tick
    /// boundary.
    pub fn queue_collision(&mut self, candidate: CollisionCandidate) {
        self.candidate_queue.push_back(candidate);
    }

    /// Queue multiple candidates.
    pub fn queue_collisions(&mut self, candidates: impl IntoIterator<Item = CollisionCandidate>) {
        self.candidate_queue.extend(candidates);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// Grace windows are advanced by `dt_secs` on every live session
    /// before queued candidates are admitted, so expiry from the elapsed
    /// time is applied before new admission decisions. Reversing that
    /// order leaves targets "already hit" one tick too long.
    pub fn tick(&mut self, dt_secs: f64) -> CombatSnapshot {
        let dt_secs = if dt_secs < 0.0 {
            warn!(dt_secs, "negative tick delta clamped to zero");
            0.0
        } else {
            dt_secs
        };
        self.time.advance(dt_secs);
        self.advance_trackers(dt_secs);
        self.process_candidates();
        self.build_snapshot()
    }

    /// Tear down all sessions before a saved game loads. Attacker
    /// handles from the prior game state are not guaranteed valid
    /// afterwards, and stale grace timers must not leak across saves.
    pub fn on_game_load(&mut self) {
        self.reset_sessions(ResetReason::GameLoad);
    }

    /// Tear down all sessions on game reset (new game, main menu).
    pub fn on_game_reset(&mut self) {
        self.reset_sessions(ResetReason::GameReset);
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether `attacker` has an active attack session.
    pub fn is_attacking(&self, attacker: Entity) -> bool {
        self.sessions.contains_key(&attacker)
    }

    /// Number of active attack sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Total hits for `attacker`'s current session, if one is active.
    pub fn hit_count(&self, attacker: Entity) -> Option<u32> {
        self.sessions.get(&attacker).map(|s| s.tracker.hit_count())
    }

    /// NPC hits for `attacker`'s current session, if one is active.
    pub fn npc_hit_count(&self, attacker: Entity) -> Option<u32> {
        self.sessions
            .get(&attacker)
            .map(|s| s.tracker.npc_hit_count())
    }

    /// Damaging hits for `attacker`'s current session, if one is active.
    pub fn damaged_count(&self, attacker: Entity) -> Option<u32> {
        self.sessions
            .get(&attacker)
            .map(|s| s.tracker.damaged_count())
    }

    /// Drop `attacker`'s grace-window records without ending the
    /// session. Used when a new swing begins inside the same attack
    /// action; historical counters are preserved.
    pub fn clear_hits(&mut self, attacker: Entity) {
        if let Some(session) = self.sessions.get_mut(&attacker) {
            session.tracker.clear();
        }
    }

    /// Advance every live tracker's grace windows.
    fn advance_trackers(&mut self, dt_secs: f64) {
        for session in self.sessions.values_mut() {
            session.tracker.advance(dt_secs);
        }
    }

    /// Admit or suppress all queued candidates in arrival order.
    fn process_candidates(&mut self) {
        while let Some(candidate) = self.candidate_queue.pop_front() {
            self.report_collision(
                candidate.attacker,
                candidate.target,
                candidate.grace_secs,
                candidate.kind,
            );
        }
    }

    /// Destroy every session and emit a single reset event.
    fn reset_sessions(&mut self, reason: ResetReason) {
        debug!(?reason, sessions = self.sessions.len(), "all sessions reset");
        self.sessions.clear();
        self.candidate_queue.clear();
        self.events.push(HitEvent::SessionsReset { reason });
    }

    /// Build the per-tick snapshot, draining the event buffer.
    fn build_snapshot(&mut self) -> CombatSnapshot {
        let mut sessions: Vec<_> = self.sessions.values().map(AttackSession::view).collect();
        sessions.sort_by_key(|view| view.attacker_id);
        CombatSnapshot {
            time: self.time,
            sessions,
            events: std::mem::take(&mut self.events),
        }
    }
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
