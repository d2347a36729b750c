//! Wall-clock deadlines for the run and its nested steps.

use std::time::{Duration, Instant};

/// A point in time after which running work is cancelled.
///
/// Deadlines nest: a child deadline never outlives its parent, so expiry of the
/// run bound also cancels the install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
            budget,
        }
    }

    /// Derives a deadline bounded by both `budget` from now and this deadline.
    pub fn nested(&self, budget: Duration) -> Self {
        let own = Instant::now() + budget;
        if own <= self.expires_at {
            Self {
                expires_at: own,
                budget,
            }
        } else {
            *self
        }
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// The length this deadline was created with.
    pub fn budget(&self) -> Duration {
        self.budget
    }
}
