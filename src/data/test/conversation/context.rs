use super::*;

/// Tests reading context for a user who has never sent a message.
///
/// Expected: empty sequence, not an error
#[tokio::test]
async fn returns_empty_for_unknown_user() {
    let store = ConversationStore::new();

    let context = store.context(UserId::new(42)).await;
    assert!(context.is_empty());
}

/// Tests that reads are idempotent.
///
/// Calling context twice without an intervening record must return identical
/// sequences.
///
/// Expected: both reads equal
#[tokio::test]
async fn repeated_reads_are_identical() {
    let store = ConversationStore::new();
    let user = UserId::new(1);

    store.record(user, Turn::user("hello")).await;
    store.record(user, Turn::assistant("hi")).await;

    let first = store.context(user).await;
    let second = store.context(user).await;
    assert_eq!(first, second);
}

/// Tests that a returned context is a snapshot.
///
/// Records appended after the read must not show up in the previously
/// returned sequence.
///
/// Expected: earlier snapshot unchanged by later records
#[tokio::test]
async fn snapshot_is_unaffected_by_later_records() {
    let store = ConversationStore::new();
    let user = UserId::new(1);

    store.record(user, Turn::user("first")).await;
    let snapshot = store.context(user).await;

    store.record(user, Turn::user("second")).await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].content, "first");
}
