//! In-process registry of bypass approval incidents.
//!
//! Each `(guild_id, user_id)` pair moves `Pending -> Resolving -> Approved | Denied`.
//! The registry only lives as long as the process; pairs it has never seen are
//! treated as pending so buttons sent before a restart still work once. Pending pairs
//! are therefore not stored, and only the most recent `RESOLVED_LIMIT` outcomes are
//! kept; an evicted pair reads as pending again.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::server::model::bypass::BypassDecision;

/// Number of approved or denied incidents remembered.
pub const RESOLVED_LIMIT: usize = 1024;

type IncidentKey = (u64, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentState {
    Pending,
    /// A response is being processed; concurrent clicks are treated as resolved.
    Resolving,
    Approved,
    Denied,
}

#[derive(Default)]
struct Incidents {
    states: HashMap<IncidentKey, IncidentState>,
    /// Terminal pairs, oldest first.
    resolved: VecDeque<IncidentKey>,
}

impl Incidents {
    fn set_pending(&mut self, key: IncidentKey) {
        if self.states.remove(&key).is_some() {
            self.resolved.retain(|k| *k != key);
        }
    }

    fn set_resolved(&mut self, key: IncidentKey, state: IncidentState) {
        self.resolved.retain(|k| *k != key);
        self.resolved.push_back(key);
        self.states.insert(key, state);

        while self.resolved.len() > RESOLVED_LIMIT {
            if let Some(oldest) = self.resolved.pop_front() {
                self.states.remove(&oldest);
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct IncidentRegistry {
    incidents: Arc<Mutex<Incidents>>,
}

impl IncidentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh pending incident, replacing any earlier outcome for the pair.
    pub fn open(&self, guild_id: u64, user_id: u64) {
        self.with_incidents(|incidents| incidents.set_pending((guild_id, user_id)));
    }

    pub fn state(&self, guild_id: u64, user_id: u64) -> IncidentState {
        self.with_incidents(|incidents| {
            incidents
                .states
                .get(&(guild_id, user_id))
                .copied()
                .unwrap_or(IncidentState::Pending)
        })
    }

    /// Moves a pending incident to `Resolving`.
    ///
    /// # Returns
    /// - `true` - The caller owns the resolution and must `complete` or `release` it
    /// - `false` - Already resolving or terminal
    pub fn claim(&self, guild_id: u64, user_id: u64) -> bool {
        self.with_incidents(|incidents| {
            let key = (guild_id, user_id);
            if incidents.states.contains_key(&key) {
                return false;
            }

            incidents.states.insert(key, IncidentState::Resolving);
            true
        })
    }

    pub fn complete(&self, guild_id: u64, user_id: u64, decision: BypassDecision) {
        let state = match decision {
            BypassDecision::Allow => IncidentState::Approved,
            BypassDecision::Deny => IncidentState::Denied,
        };

        self.with_incidents(|incidents| incidents.set_resolved((guild_id, user_id), state));
    }

    /// Returns a claimed incident to `Pending` after a resolution that changed nothing.
    pub fn release(&self, guild_id: u64, user_id: u64) {
        self.open(guild_id, user_id);
    }

    fn with_incidents<T>(&self, operation: impl FnOnce(&mut Incidents) -> T) -> T {
        // A poisoned lock still holds a usable map; stale order entries only evict early.
        let mut incidents = match self.incidents.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        operation(&mut incidents)
    }
}
