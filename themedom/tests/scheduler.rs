use std::time::Duration;

use themedom::{EventKind, ListenerOptions, ListenerTarget, Listeners, NodeId, OwnerId, Scheduler};

// ============================================================================
// Timers
// ============================================================================

#[test]
fn test_timers_fire_in_deadline_order() {
    let owner = OwnerId::new();
    let mut scheduler: Scheduler<&str> = Scheduler::new();
    scheduler.set_timeout(owner, Duration::from_millis(120), "late");
    scheduler.set_timeout(owner, Duration::from_millis(50), "early");
    scheduler.set_timeout(owner, Duration::from_millis(50), "early-second");

    let until = Duration::from_millis(100);
    assert_eq!(scheduler.pop_due(until), Some((owner, "early")));
    assert_eq!(scheduler.pop_due(until), Some((owner, "early-second")));
    assert_eq!(scheduler.pop_due(until), None);
    assert_eq!(scheduler.now(), Duration::from_millis(50));

    scheduler.advance_to(until);
    assert_eq!(scheduler.now(), until);
    assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(120)));
}

#[test]
fn test_clear_timeout() {
    let owner = OwnerId::new();
    let mut scheduler = Scheduler::new();
    let id = scheduler.set_timeout(owner, Duration::from_millis(120), ());

    assert!(scheduler.is_pending(id));
    assert!(scheduler.clear_timeout(id));
    assert!(!scheduler.clear_timeout(id));
    assert_eq!(scheduler.pop_due(Duration::from_secs(1)), None);
}

#[test]
fn test_frames_requested_during_frame_run_next_frame() {
    let owner = OwnerId::new();
    let mut scheduler = Scheduler::new();
    scheduler.request_frame(owner, 1);

    let frame = scheduler.take_frames();
    assert_eq!(frame, vec![(owner, 1)]);
    scheduler.request_frame(owner, 2);
    assert!(scheduler.has_frames());
    assert_eq!(scheduler.take_frames(), vec![(owner, 2)]);
    assert!(!scheduler.has_frames());
}

#[test]
fn test_cancel_owner_drops_timers_and_frames() {
    let keep = OwnerId::new();
    let dropped = OwnerId::new();
    let mut scheduler = Scheduler::new();
    scheduler.set_timeout(dropped, Duration::from_millis(10), "a");
    scheduler.request_frame(dropped, "b");
    scheduler.set_timeout(keep, Duration::from_millis(10), "c");

    assert_eq!(scheduler.cancel_owner(dropped), 2);
    assert_eq!(scheduler.pending_timers(), 1);
    assert!(!scheduler.has_frames());
}

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_listeners_match_by_target_and_kind() {
    let owner = OwnerId::new();
    let other = OwnerId::new();
    let node = NodeId::ROOT;
    let mut listeners = Listeners::new();

    let scroll = listeners.add(
        owner,
        ListenerTarget::Node(node),
        EventKind::Scroll,
        ListenerOptions::passive(),
    );
    listeners.add(
        other,
        ListenerTarget::Node(node),
        EventKind::Scroll,
        ListenerOptions::new(),
    );
    listeners.add(
        owner,
        ListenerTarget::Window,
        EventKind::Resize,
        ListenerOptions::new(),
    );

    let matching = listeners.matching(ListenerTarget::Node(node), EventKind::Scroll);
    assert_eq!(matching.len(), 2);
    assert_eq!(matching[0].id, scroll);
    assert!(matching[0].options.passive);

    assert!(listeners.remove(scroll));
    assert!(!listeners.contains(scroll));
    assert_eq!(listeners.remove_owner(owner), 1);
    assert_eq!(listeners.count_for(other), 1);
    assert_eq!(listeners.len(), 1);
}
