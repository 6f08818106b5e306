use app_init::constants::{IGNORE_FILE, STAGED_IGNORE_FILE};
use app_init::ignore::{reconcile, rename_no_clobber, IgnoreFileState, RenameOutcome};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_staged_file_is_renamed() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path();
    let state = IgnoreFileState::detect(app).await;
    assert!(!state.pre_existing);

    fs::write(app.join(STAGED_IGNORE_FILE), "node_modules/\n").unwrap();
    reconcile(app, state).await.unwrap();

    assert_eq!(fs::read_to_string(app.join(IGNORE_FILE)).unwrap(), "node_modules/\n");
    assert!(!app.join(STAGED_IGNORE_FILE).exists());
}

#[tokio::test]
async fn test_staged_file_is_appended_to_existing() {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path();
    fs::write(app.join(IGNORE_FILE), "*.log\n").unwrap();
    let state = IgnoreFileState::detect(app).await;
    assert!(state.pre_existing);

    fs::write(app.join(STAGED_IGNORE_FILE), "node_modules/\n").unwrap();
    reconcile(app, state).await.unwrap();

    assert_eq!(
        fs::read_to_string(app.join(IGNORE_FILE)).unwrap(),
        "*.log\nnode_modules/\n"
    );
    assert!(!app.join(STAGED_IGNORE_FILE).exists());
}

#[tokio::test]
async fn test_rename_does_not_clobber_existing_destination() {
    let temp_dir = TempDir::new().unwrap();
    let from = temp_dir.path().join("from");
    let to = temp_dir.path().join("to");
    fs::write(&from, "new").unwrap();
    fs::write(&to, "old").unwrap();

    let outcome = rename_no_clobber(&from, &to, IgnoreFileState { pre_existing: false })
        .await
        .unwrap();

    assert_eq!(outcome, RenameOutcome::AlreadyExists);
    assert_eq!(fs::read_to_string(&to).unwrap(), "old");
    assert!(from.exists());
}

#[tokio::test]
async fn test_rename_of_missing_source_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = rename_no_clobber(
        &temp_dir.path().join("missing"),
        &temp_dir.path().join("to"),
        IgnoreFileState { pre_existing: false },
    )
    .await;

    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
}

#[tokio::test]
async fn test_missing_staged_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let state = IgnoreFileState::detect(temp_dir.path()).await;

    reconcile(temp_dir.path(), state).await.unwrap();

    assert!(!temp_dir.path().join(IGNORE_FILE).exists());
}
