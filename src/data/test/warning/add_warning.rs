use super::*;

/// Tests the add-then-list round trip.
///
/// A warning added for a (guild, user) pair must appear as the last element
/// of the list returned for that pair.
///
/// Expected: Ok with the record as the final list element
#[tokio::test]
async fn round_trips_as_last_element() {
    let (ledger, _dir) = ledger_in_temp_dir();
    let guild = GuildId::new(10);
    let user = UserId::new(20);

    ledger
        .add_warning(guild, user, WarningRecord::new("Mod", "spamming"))
        .await
        .unwrap();
    let record = WarningRecord::new("Mod", "still spamming");
    ledger.add_warning(guild, user, record.clone()).await.unwrap();

    let warnings = ledger.list_warnings(guild, user).await;
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings.last(), Some(&record));
}

/// Tests that guild and user entries are created on first warning.
///
/// Expected: Ok(1) with the nested entries present afterwards
#[tokio::test]
async fn creates_nested_entries_when_absent() {
    let (ledger, _dir) = ledger_in_temp_dir();
    let guild = GuildId::new(10);
    let user = UserId::new(20);

    let count = ledger
        .add_warning(guild, user, WarningRecord::new("Mod", "first offense"))
        .await
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(ledger.list_warnings(guild, user).await.len(), 1);
}

/// Tests that warnings for one pair do not bleed into another.
///
/// Expected: each pair sees only its own records
#[tokio::test]
async fn keeps_pairs_separate() {
    let (ledger, _dir) = ledger_in_temp_dir();
    let guild = GuildId::new(10);

    ledger
        .add_warning(guild, UserId::new(1), WarningRecord::new("Mod", "a"))
        .await
        .unwrap();
    ledger
        .add_warning(guild, UserId::new(2), WarningRecord::new("Mod", "b"))
        .await
        .unwrap();

    assert_eq!(ledger.list_warnings(guild, UserId::new(1)).await.len(), 1);
    assert_eq!(ledger.list_warnings(guild, UserId::new(2)).await.len(), 1);
    assert!(ledger
        .list_warnings(GuildId::new(99), UserId::new(1))
        .await
        .is_empty());
}

/// Tests that the file is the authoritative copy.
///
/// A second ledger instance over the same path must observe warnings written
/// by the first.
///
/// Expected: records visible through a fresh instance
#[tokio::test]
async fn persists_across_ledger_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warnings.json");
    let guild = GuildId::new(10);
    let user = UserId::new(20);

    let first = WarningLedger::new(&path);
    first
        .add_warning(guild, user, WarningRecord::new("Mod", "persisted"))
        .await
        .unwrap();

    let second = WarningLedger::new(&path);
    let warnings = second.list_warnings(guild, user).await;
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].reason, "persisted");
}
