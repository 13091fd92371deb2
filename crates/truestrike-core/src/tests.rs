#[cfg(test)]
mod tests {
    use crate::enums::*;
    use crate::events::HitEvent;
    use crate::state::{CombatSnapshot, SessionView};
    use crate::types::SimTime;

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_admission_serde() {
        let variants = vec![
            Admission::Admitted,
            Admission::Suppressed,
            Admission::NoSession,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Admission = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_target_kind_serde() {
        let variants = vec![TargetKind::Npc, TargetKind::Object];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_reset_reason_serde() {
        let variants = vec![ResetReason::GameLoad, ResetReason::GameReset];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ResetReason = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_hit_event_serde_tagged() {
        let events = vec![
            HitEvent::SessionStarted { attacker_id: 7 },
            HitEvent::SessionEnded { attacker_id: 7 },
            HitEvent::HitRegistered {
                attacker_id: 7,
                target_id: 42,
                kind: TargetKind::Npc,
            },
            HitEvent::HitSuppressed {
                attacker_id: 7,
                target_id: 42,
            },
            HitEvent::DamageApplied { attacker_id: 7 },
            HitEvent::SessionsReset {
                reason: ResetReason::GameLoad,
            },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            assert!(json.contains("\"type\""), "events must be tag-serialized");
            let back: HitEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = CombatSnapshot {
            time: SimTime {
                tick: 3,
                elapsed_secs: 0.05,
            },
            sessions: vec![SessionView {
                attacker_id: 1,
                started_tick: 1,
                active_targets: 2,
                hit_count: 3,
                npc_hit_count: 1,
                damaged_count: 2,
            }],
            events: vec![HitEvent::DamageApplied { attacker_id: 1 }],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: CombatSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sessions, snap.sessions);
        assert_eq!(back.events, snap.events);
        assert_eq!(back.time.tick, 3);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(1.0 / 60.0);
        time.advance(1.0 / 30.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.05).abs() < 1e-12);
    }
}
