//! bounded undo/redo history
//!
//! a linear list of immutable snapshots plus a cursor. pushing after an undo throws the undone
//! snapshots away, there is no branching
use {
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::{collections::VecDeque, sync::Arc},
    tracing::trace,
};

/// how many snapshots are kept unless told otherwise
pub const DEFAULT_MAX_LEN: usize = 50;

/// what happens to the cursor when a push overflows the history
///
/// with a fixed capacity both policies leave the cursor on the newest snapshot, because an
/// overflow can only happen when the cursor was already on the last entry. they differ once the
/// capacity has been lowered below the current length
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[serde(rename_all = "kebab-case")]
pub enum EvictionPolicy {
    /// evict as many old snapshots as needed to get back under the cap, cursor on the newest
    #[default]
    TrackNewest,
    /// evict exactly one snapshot per push and leave the cursor index where it was
    Legacy,
}

/// a bounded, linear undo/redo history
#[derive(Debug, Clone)]
pub struct History<T> {
    /// oldest first
    snapshots: VecDeque<Arc<T>>,
    /// index of the current snapshot
    cursor: usize,
    /// the most snapshots to keep (at least 1)
    max_len: usize,
    /// what to do on overflow
    policy: EvictionPolicy,
}

impl<T> History<T> {
    /// start a history at `initial`
    pub fn new(initial: T) -> Self {
        Self::with_max_len(initial, DEFAULT_MAX_LEN)
    }

    /// start a history at `initial` keeping at most `max_len` snapshots
    pub fn with_max_len(initial: T, max_len: usize) -> Self {
        Self {
            snapshots: VecDeque::from([Arc::new(initial)]),
            cursor: 0,
            max_len: max_len.max(1),
            policy: EvictionPolicy::default(),
        }
    }

    /// set the eviction policy
    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// change the capacity, takes effect on the next push
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.max(1);
    }

    /// record a new snapshot, dropping anything that was undone
    pub fn push(&mut self, state: impl Into<Arc<T>>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(state.into());

        if self.snapshots.len() <= self.max_len {
            self.cursor = self.snapshots.len() - 1;
            return;
        }

        match self.policy {
            EvictionPolicy::TrackNewest => {
                let excess = self.snapshots.len() - self.max_len;
                self.snapshots.drain(..excess);
                self.cursor = self.snapshots.len() - 1;
            }
            EvictionPolicy::Legacy => {
                self.snapshots.pop_front();
                self.cursor = self.cursor.min(self.snapshots.len() - 1);
            }
        }

        trace!(len = self.snapshots.len(), cursor = self.cursor, "history evicted");
    }

    /// step back, returns false if already at the oldest snapshot
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// step forward, returns false if already at the newest snapshot
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// the current snapshot
    pub fn current(&self) -> &Arc<T> {
        &self.snapshots[self.cursor]
    }

    /// whether [`Self::undo`] would move
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// whether [`Self::redo`] would move
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// how many snapshots are kept right now
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// always false, a history holds at least its initial snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// the index of the current snapshot
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// the capacity
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// the eviction policy
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// every kept snapshot, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &Arc<T>> {
        self.snapshots.iter()
    }
}
