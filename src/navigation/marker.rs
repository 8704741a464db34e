//! Location markers and their expiry

use std::time::{Duration, Instant};

use crate::coordinate::{GeoPoint, Point};

/// How long a jump marker stays visible
pub const DEFAULT_MARKER_LIFETIME: Duration = Duration::from_secs(5);

/// Identity of a drawn marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Transient marker left by a jump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationMarker {
    pub id: MarkerId,
    /// Where the marker is drawn
    pub scene_point: Point,
    /// What the user asked for
    pub geo_point: GeoPoint,
    /// Whether the point fell inside the resolving raster
    pub in_bounds: bool,
    /// When the marker disappears on its own; `None` never expires
    pub expires_at: Option<Instant>,
}

/// Handle for one scheduled expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryToken {
    generation: u64,
    deadline: Option<Instant>,
}

impl ExpiryToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `None` when the delay reaches past what `Instant` can represent
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Single-slot cancellable timer
///
/// Scheduling replaces whatever was pending, so a stale expiry can never
/// fire after a newer one was scheduled.
#[derive(Debug, Default)]
pub struct ExpiryTimer {
    generation: u64,
    pending: Option<ExpiryToken>,
}

impl ExpiryTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an expiry `delay` after `now`, cancelling any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> ExpiryToken {
        self.generation += 1;
        let token = ExpiryToken { generation: self.generation, deadline: now.checked_add(delay) };
        self.pending = Some(token);
        token
    }

    /// Cancel the pending expiry, returning it
    pub fn cancel(&mut self) -> Option<ExpiryToken> {
        self.pending.take()
    }

    /// Fire the pending expiry if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<ExpiryToken> {
        match self.pending {
            Some(ExpiryToken { deadline: Some(deadline), .. }) if deadline <= now => self.pending.take(),
            _ => None,
        }
    }
}
