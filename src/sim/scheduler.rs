//! One-shot deferred actions fired on a later tick
//!
//! Delays are counted in ticks, so firing order is deterministic. Each action
//! remembers the session that scheduled it; once that session is gone the
//! action is dropped without effect.

use serde::{Deserialize, Serialize};

/// Work that can be deferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Put a new ball into play
    Serve,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scheduled {
    action: Deferred,
    /// Tick on (or after) which the action fires
    due_tick: u64,
    session: u32,
}

/// Pending deferred actions, fired in scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run `delay_secs` from `now_tick`
    ///
    /// Always fires on a later tick, even for a zero delay.
    pub fn delay(
        &mut self,
        action: Deferred,
        delay_secs: f32,
        now_tick: u64,
        tick_rate_hz: u32,
        session: u32,
    ) {
        let ticks = (delay_secs.max(0.0) * tick_rate_hz as f32).ceil() as u64;
        self.pending.push(Scheduled {
            action,
            due_tick: now_tick + ticks.max(1),
            session,
        });
    }

    /// Remove and return the actions due at `tick` that belong to `session`
    ///
    /// Due actions from other sessions are discarded.
    pub fn take_due(&mut self, tick: u64, session: u32) -> Vec<Deferred> {
        let mut due = Vec::new();
        self.pending.retain(|s| {
            if s.due_tick > tick {
                return true;
            }
            if s.session == session {
                due.push(s.action);
            } else {
                log::debug!("dropping stale {:?} from session {}", s.action, s.session);
            }
            false
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_fires_next_tick() {
        let mut s = Scheduler::new();
        s.delay(Deferred::Serve, 0.0, 10, 60, 1);
        assert!(s.take_due(10, 1).is_empty());
        assert_eq!(s.take_due(11, 1), vec![Deferred::Serve]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_delay_in_seconds() {
        let mut s = Scheduler::new();
        s.delay(Deferred::Serve, 0.5, 0, 60, 1);
        assert!(s.take_due(29, 1).is_empty());
        assert_eq!(s.take_due(30, 1).len(), 1);
    }

    #[test]
    fn test_stale_session_is_dropped() {
        let mut s = Scheduler::new();
        s.delay(Deferred::Serve, 0.0, 0, 60, 1);
        assert!(s.take_due(5, 2).is_empty());
        assert!(s.is_empty());
    }
}
