//! Preview generation and the load -> preview -> execute session flow.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;

use batch_rename::{
    ExactMatch, FileRecord, History, HistoryEntry, HistoryRepository, HistoryService,
    JsonHistoryStore, PersistenceSource, RegexMatch, RenameEngine, RenameError, RenameSession,
    StdFileSystem, generate_preview,
};
use tempfile::tempdir;

/// History repository kept in memory; can be told to fail on save.
#[derive(Default)]
struct MemoryRepo {
    saved: RefCell<Vec<HistoryEntry>>,
    fail_saves: Cell<bool>,
}

impl HistoryRepository for MemoryRepo {
    fn load(&self) -> Result<History, RenameError> {
        let mut h = History::new();
        h.set_entries(self.saved.borrow().clone());
        Ok(h)
    }

    fn save(&self, history: &History) -> Result<(), RenameError> {
        if self.fail_saves.get() {
            return Err(RenameError::Persistence {
                path: PathBuf::from("memory"),
                source: PersistenceSource::Io(std::io::Error::other("disk full")),
            });
        }
        *self.saved.borrow_mut() = history.entries().to_vec();
        Ok(())
    }
}

fn memory_session() -> RenameSession<StdFileSystem, MemoryRepo> {
    RenameSession::new(
        RenameEngine::new(StdFileSystem),
        HistoryService::new(MemoryRepo::default()),
    )
}

#[test]
fn preview_leaves_input_untouched() {
    let batch = vec![FileRecord::new("/d/test.txt"), FileRecord::new("/d/other.txt")];
    let before = batch.clone();

    let out = generate_preview(&batch, &ExactMatch::new("test", "TEST"));

    assert_eq!(batch, before);
    assert_eq!(out[0].new_name(), "TEST.txt");
    assert!(out[0].has_changed());
    assert_eq!(out[1].new_name(), "other.txt");
    assert!(!out[1].has_changed());
}

#[test]
fn repeated_previews_do_not_compound() {
    let batch = vec![FileRecord::new("/d/a.txt")];
    let s = ExactMatch::new("a", "aa");

    let first = generate_preview(&batch, &s);
    let second = generate_preview(&first, &s);

    assert_eq!(first[0].new_name(), "aa.txt");
    assert_eq!(second[0].new_name(), "aa.txt");
}

#[test]
fn preview_of_empty_batch_is_empty() {
    let s = RegexMatch::new(".*", "x").unwrap();
    assert!(generate_preview(&[], &s).is_empty());
}

#[test]
fn session_with_no_files_returns_empty_preview() {
    let mut session = memory_session();
    let previews = session.generate_preview("[", "", true, false).unwrap();
    assert!(previews.is_empty());
}

#[test]
fn invalid_regex_leaves_session_state_alone() {
    let mut session = memory_session();
    session.load_files(["/d/a.txt"]);
    session.generate_preview("a", "b", false, false).unwrap();
    assert_eq!(session.files()[0].new_name(), "b.txt");

    let err = session.generate_preview("(", "", true, false).unwrap_err();
    assert!(matches!(err, RenameError::PatternCompilation { .. }));
    assert_eq!(session.files()[0].new_name(), "b.txt");
}

#[test]
fn execute_without_preview_does_nothing() {
    let td = tempdir().unwrap();
    let file = td.path().join("keep.txt");
    fs::write(&file, "x").unwrap();

    let mut session = memory_session();
    session.load_files([&file]);
    let out = session.execute_rename();

    assert_eq!(out.success_count + out.failure_count, 0);
    assert!(out.new_paths.is_empty());
    assert!(file.exists());
}

#[test]
fn execute_renames_records_history_and_rebuilds_batch() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("IMG_001.jpg"), "1").unwrap();
    fs::write(dir.join("notes.txt"), "n").unwrap();

    let mut session = memory_session();
    session.load_files([dir.join("IMG_001.jpg"), dir.join("notes.txt")]);
    let previews = session.generate_preview("img_", "holiday_", false, true).unwrap();
    assert_eq!(previews[0].new_name, "holiday_001.jpg");
    assert!(previews[0].has_changed);
    assert!(!previews[1].has_changed);

    let out = session.execute_rename();
    assert_eq!(out.success_count, 1);
    assert_eq!(out.failure_count, 0);
    assert!(dir.join("holiday_001.jpg").exists());

    // Baseline now points at the renamed file.
    assert_eq!(session.files()[0].original_path(), dir.join("holiday_001.jpg"));
    assert_eq!(session.files()[0].original_name(), "holiday_001.jpg");
    assert!(session.files().iter().all(|f| !f.has_changed()));

    let history = session.history().unwrap();
    assert_eq!(history, vec![HistoryEntry::new("img_", "holiday_", false, true)]);

    // Executing again re-runs the unchanged batch and reports its paths.
    let again = session.execute_rename();
    assert_eq!(again.success_count, 0);
    assert_eq!(again.failure_count, 0);
    assert_eq!(again.new_paths, vec![dir.join("holiday_001.jpg"), dir.join("notes.txt")]);
    assert!(dir.join("holiday_001.jpg").exists());
    assert_eq!(session.history().unwrap().len(), 1);
}

#[test]
fn nothing_renamed_means_nothing_recorded() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "a").unwrap();

    let mut session = memory_session();
    session.load_files([td.path().join("a.txt")]);
    session.generate_preview("zzz", "y", false, false).unwrap();
    let out = session.execute_rename();

    assert_eq!(out.success_count, 0);
    assert!(session.history().unwrap().is_empty());
}

#[test]
fn history_save_failure_does_not_change_outcome() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "a").unwrap();

    let repo = MemoryRepo::default();
    repo.fail_saves.set(true);
    let mut session = RenameSession::new(RenameEngine::new(StdFileSystem), HistoryService::new(repo));
    session.load_files([td.path().join("a.txt")]);
    session.generate_preview("a", "b", false, false).unwrap();

    let out = session.execute_rename();
    assert_eq!(out.success_count, 1);
    assert_eq!(out.failure_count, 0);
    assert!(td.path().join("b.txt").exists());
}

#[test]
fn session_history_management_persists_to_json() {
    let td = tempdir().unwrap();
    let path = td.path().join("state").join("history.json");
    let mut session = RenameSession::new(
        RenameEngine::new(StdFileSystem),
        HistoryService::new(JsonHistoryStore::new(&path)),
    );

    session.add_to_history(HistoryEntry::new("a", "b", false, false)).unwrap();
    session.add_to_history(HistoryEntry::new("c", "d", true, false)).unwrap();
    assert!(path.exists());
    assert_eq!(session.history().unwrap().len(), 2);

    session.clear_history().unwrap();
    assert!(session.history().unwrap().is_empty());
}
