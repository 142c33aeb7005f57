use super::*;

/// Tests listing when the warning file does not exist yet.
///
/// Expected: empty sequence, not an error
#[tokio::test]
async fn missing_file_returns_empty() {
    let (ledger, _dir) = ledger_in_temp_dir();

    let warnings = ledger.list_warnings(GuildId::new(1), UserId::new(2)).await;
    assert!(warnings.is_empty());
}

/// Tests listing when the warning file holds invalid JSON.
///
/// Expected: empty sequence, not an error
#[tokio::test]
async fn corrupt_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warnings.json");
    tokio::fs::write(&path, b"not json {").await.unwrap();

    let ledger = WarningLedger::new(&path);
    let warnings = ledger.list_warnings(GuildId::new(1), UserId::new(2)).await;
    assert!(warnings.is_empty());
}

/// Tests listing for a user with no warnings in a guild that has some.
///
/// Expected: empty sequence for the unknown user
#[tokio::test]
async fn unknown_user_returns_empty() {
    let (ledger, _dir) = ledger_in_temp_dir();
    let guild = GuildId::new(1);

    ledger
        .add_warning(guild, UserId::new(2), WarningRecord::new("Mod", "noise"))
        .await
        .unwrap();

    let warnings = ledger.list_warnings(guild, UserId::new(3)).await;
    assert!(warnings.is_empty());
}
