// SentiView - app/flash.rs
//
// Auto-dismissing flash notifications. Time is passed in explicitly so
// expiry is deterministic under test.

use crate::util::constants::MAX_FLASHES;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub id: u64,
    pub level: FlashLevel,
    pub message: String,
    pub created: Instant,
}

/// Visible notifications, oldest first.
#[derive(Debug)]
pub struct FlashQueue {
    lifetime: Duration,
    items: VecDeque<Flash>,
    next_id: u64,
}

impl FlashQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            items: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Show a notification. The oldest one is dropped once `MAX_FLASHES`
    /// are visible.
    pub fn push(&mut self, level: FlashLevel, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.items.len() == MAX_FLASHES {
            self.items.pop_front();
        }
        self.items.push_back(Flash {
            id,
            level,
            message: message.into(),
            created: now,
        });
        id
    }

    /// Remove every notification older than the configured lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|f| now.saturating_duration_since(f.created) < lifetime);
    }

    /// Dismiss one notification early.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|f| f.id != id);
    }

    /// Time until the next notification expires, for repaint scheduling.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.items
            .iter()
            .map(|f| (f.created + self.lifetime).saturating_duration_since(now))
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flash> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
