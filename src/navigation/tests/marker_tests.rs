//! Tests for the marker expiry timer

use std::time::{Duration, Instant};

use crate::navigation::ExpiryTimer;

#[test]
fn test_poll_fires_once_after_deadline() {
    let start = Instant::now();
    let mut timer = ExpiryTimer::new();
    let token = timer.schedule(start, Duration::from_secs(5));

    assert!(timer.poll(start + Duration::from_secs(4)).is_none());
    assert_eq!(timer.poll(start + Duration::from_secs(5)), Some(token));
    assert!(timer.poll(start + Duration::from_secs(6)).is_none());
}

#[test]
fn test_reschedule_supersedes_pending_expiry() {
    let start = Instant::now();
    let mut timer = ExpiryTimer::new();
    let old = timer.schedule(start, Duration::from_secs(5));
    let new = timer.schedule(start + Duration::from_secs(3), Duration::from_secs(5));

    assert_ne!(old, new);
    assert!(new.generation() > old.generation());
    // The old deadline passes without firing anything
    assert!(timer.poll(start + Duration::from_secs(6)).is_none());
    assert_eq!(timer.poll(start + Duration::from_secs(8)), Some(new));
}

#[test]
fn test_cancel() {
    let start = Instant::now();
    let mut timer = ExpiryTimer::new();
    let token = timer.schedule(start, Duration::from_millis(10));

    assert_eq!(timer.cancel(), Some(token));
    assert!(timer.cancel().is_none());
    assert!(timer.poll(start + Duration::from_secs(1)).is_none());
}

#[test]
fn test_unrepresentable_deadline_never_fires() {
    let start = Instant::now();
    let mut timer = ExpiryTimer::new();
    let token = timer.schedule(start, Duration::MAX);

    assert_eq!(token.deadline(), None);
    assert!(timer.poll(start + Duration::from_secs(86_400 * 365)).is_none());
    assert_eq!(timer.cancel(), Some(token));
}
