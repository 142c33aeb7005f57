use super::*;

/// Tests that the buffer never grows beyond the cap.
///
/// Records more turns than the cap allows and verifies the stored sequence
/// is exactly the most recent cap-sized suffix of the full call history,
/// with the oldest turns dropped first.
///
/// Expected: length equals CONTEXT_CAP, contents are the last ten turns in order
#[tokio::test]
async fn caps_buffer_at_ten_turns() {
    let store = ConversationStore::new();
    let user = UserId::new(1);

    for i in 0..15 {
        store.record(user, Turn::user(format!("message {i}"))).await;
    }

    let context = store.context(user).await;
    assert_eq!(context.len(), CONTEXT_CAP);
    assert_eq!(context[0].content, "message 5");
    assert_eq!(context[9].content, "message 14");
}

/// Tests that recording below the cap preserves the full history in order.
///
/// Expected: all recorded turns present, insertion order preserved
#[tokio::test]
async fn preserves_insertion_order_below_cap() {
    let store = ConversationStore::new();
    let user = UserId::new(1);

    store.record(user, Turn::user("hello")).await;
    store.record(user, Turn::assistant("hi there")).await;
    store.record(user, Turn::user("how are you")).await;

    let context = store.context(user).await;
    assert_eq!(context.len(), 3);
    assert_eq!(context[0], Turn::user("hello"));
    assert_eq!(context[1], Turn::assistant("hi there"));
    assert_eq!(context[2], Turn::user("how are you"));
}

/// Tests that buffers are isolated per user.
///
/// Recording turns for one user must not leak into another user's context.
///
/// Expected: each user sees only their own turns
#[tokio::test]
async fn isolates_buffers_per_user() {
    let store = ConversationStore::new();
    let alice = UserId::new(1);
    let bob = UserId::new(2);

    store.record(alice, Turn::user("from alice")).await;
    store.record(bob, Turn::user("from bob")).await;

    let alice_context = store.context(alice).await;
    let bob_context = store.context(bob).await;
    assert_eq!(alice_context.len(), 1);
    assert_eq!(alice_context[0].content, "from alice");
    assert_eq!(bob_context.len(), 1);
    assert_eq!(bob_context[0].content, "from bob");
}

/// Tests the interleaving that occurs when two requests from the same user
/// are in flight at once.
///
/// Both user turns land before either assistant reply, mirroring two
/// completions awaited concurrently. The buffer accepts the appends in call
/// order and stays within the cap.
///
/// Expected: four turns, user inputs first, then both assistant replies
#[tokio::test]
async fn accepts_interleaved_appends_in_call_order() {
    let store = ConversationStore::new();
    let user = UserId::new(1);

    store.record(user, Turn::user("hello")).await;
    store.record(user, Turn::user("how are you")).await;
    store.record(user, Turn::assistant("hi!")).await;
    store.record(user, Turn::assistant("doing well")).await;

    let context = store.context(user).await;
    assert!(context.len() <= CONTEXT_CAP);
    assert_eq!(context.len(), 4);
    assert_eq!(context[2], Turn::assistant("hi!"));
    assert_eq!(context[3], Turn::assistant("doing well"));
}
