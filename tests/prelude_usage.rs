use batch_rename::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn prelude_covers_a_full_rename_session() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("Scan 01.png"), "x").unwrap();

    let mut cfg = Config::new(td.path().join("history.json"));
    cfg.log_level = LogLevel::Quiet;

    let mut session = session_from_config(&cfg);
    session.load_files([td.path().join("Scan 01.png")]);
    let previews = session.generate_preview(r"\s+", "_", true, false).unwrap();
    assert_eq!(previews[0].new_name, "Scan_01.png");

    let outcome: RenameOutcome = session.execute_rename();
    assert_eq!(outcome.success_count, 1);
    assert!(td.path().join("Scan_01.png").exists());

    let entries: BRResult<Vec<HistoryEntry>> = session.history();
    assert_eq!(entries.unwrap().len(), 1);
}

#[test]
fn prelude_error_alias_is_rename_error() {
    let err: Error = build_strategy("(", "", true, false).unwrap_err();
    assert_eq!(err.kind(), "pattern_compilation");
    let _ = default_config_path();
}
