//! List container tests
//!
//! Identity discipline, batch operations, and notification ordering for
//! `FileLinkList`.

use filelink::{EventQueue, FileLink, FileLinkList, LinkError, LinkEvent};

/// Helper to create a file link with an explicit identity
fn item(id: &str) -> FileLink {
    FileLink::new(format!("/tmp/{id}.txt")).with_id(id)
}

#[test]
fn test_duplicate_identity_fails_and_count_is_unchanged() {
    let mut list = FileLinkList::new();
    list.add_item(item("a"), false).expect("first add");

    let err = list.add_item(item("a"), false);
    assert_eq!(err, Err(LinkError::DuplicateItemId("a".to_string())));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_absent_item_is_silent() {
    let mut events = EventQueue::new();
    let mut list = FileLinkList::new();

    assert!(list.remove_item("never-added", &mut events).is_none());
    assert!(events.is_empty());

    list.add_item(item("a"), false).expect("add");
    list.remove_item("a", &mut events).expect("first removal");
    assert!(list.remove_item("a", &mut events).is_none());

    // Only the actual removal produced a notification.
    assert_eq!(
        events.drain(),
        vec![LinkEvent::ItemRemoved {
            identity: "a".to_string()
        }]
    );
}

#[test]
fn test_toggle_all_is_idempotent_but_observable() {
    let mut events = EventQueue::new();
    let mut list = FileLinkList::new().with_toggles();
    list.add_item(item("a"), false).expect("add");
    list.add_item(item("b"), false).expect("add");

    list.toggle_all(true, &mut events);
    list.toggle_all(true, &mut events);

    // Two notifications per item, state still true, no double-negation.
    assert_eq!(events.len(), 4);
    assert_eq!(list.is_toggled("a"), Some(true));
    assert_eq!(list.is_toggled("b"), Some(true));

    for event in events.drain() {
        match event {
            LinkEvent::ToggleChanged { is_toggled, .. } => assert!(is_toggled),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}

#[test]
fn test_toggle_all_reports_in_insertion_order() {
    let mut events = EventQueue::new();
    let mut list = FileLinkList::new().with_toggles();
    for id in ["z", "m", "a"] {
        list.add_item(item(id), false).expect("add");
    }

    list.toggle_all(true, &mut events);
    let order: Vec<String> = events
        .drain()
        .into_iter()
        .map(|event| match event {
            LinkEvent::ToggleChanged { identity, .. } => identity,
            other => panic!("unexpected event: {:?}", other),
        })
        .collect();
    assert_eq!(order, vec!["z", "m", "a"]);
}

#[test]
fn test_clear_emits_no_per_item_notifications() {
    let mut events = EventQueue::new();
    let mut list = FileLinkList::new().with_toggles().with_remove();
    list.add_item(item("a"), true).expect("add");
    list.add_item(item("b"), true).expect("add");

    let detached = list.clear();
    assert_eq!(detached.len(), 2);
    assert!(list.is_empty());
    assert!(events.is_empty());

    // remove_selected, by contrast, notifies per item.
    list.add_item(item("c"), true).expect("add");
    list.remove_selected(&mut events);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_end_to_end_toggle_and_remove_selected() {
    let mut events = EventQueue::new();
    let mut list = FileLinkList::new().with_toggles().with_remove();

    list.add_item(item("a"), true).expect("add a");
    list.add_item(item("b"), false).expect("add b");

    let toggled: Vec<&str> = list
        .toggled_items()
        .iter()
        .filter_map(|i| i.identity())
        .collect();
    assert_eq!(toggled, vec!["a"]);

    list.toggle_all(true, &mut events);
    let toggled: Vec<&str> = list
        .toggled_items()
        .iter()
        .filter_map(|i| i.identity())
        .collect();
    assert_eq!(toggled, vec!["a", "b"]);
    assert_eq!(events.len(), 2);
    events.drain();

    let removed = list.remove_selected(&mut events);
    assert!(list.is_empty());
    assert_eq!(removed.len(), 2);
    assert_eq!(
        events.drain(),
        vec![
            LinkEvent::ItemRemoved {
                identity: "a".to_string()
            },
            LinkEvent::ItemRemoved {
                identity: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_queries_have_no_side_effects() {
    let mut list = FileLinkList::new().with_toggles();
    list.add_item(item("a"), true).expect("add");

    let _ = list.toggled_items();
    let _ = list.items().count();
    let _ = list.get("a");
    assert_eq!(list.len(), 1);
    assert_eq!(list.is_toggled("a"), Some(true));
}
