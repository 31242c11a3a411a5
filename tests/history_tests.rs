use batch_rename::{History, HistoryEntry, MAX_HISTORY_SIZE};

fn entry(pattern: &str) -> HistoryEntry {
    HistoryEntry::new(pattern, "replacement", false, false)
}

#[test]
fn new_history_is_empty() {
    let h = History::new();
    assert!(h.is_empty());
    assert_eq!(h.len(), 0);
    assert_eq!(h.capacity(), MAX_HISTORY_SIZE);
}

#[test]
fn add_puts_most_recent_first() {
    let mut h = History::new();
    let entries = [
        HistoryEntry::new("test1", "TEST1", false, false),
        HistoryEntry::new("test2", "TEST2", true, false),
        HistoryEntry::new("test3", "TEST3", false, true),
    ];
    for e in &entries {
        h.add(e.clone());
    }
    let got = h.entries();
    assert_eq!(got.len(), 3);
    for i in 0..3 {
        assert_eq!(got[i], entries[2 - i]);
    }
}

#[test]
fn duplicate_moves_to_front_without_growing() {
    let mut h = History::new();
    let e = HistoryEntry::new("test", "TEST", false, false);
    h.add(e.clone());
    h.add(e.clone());
    assert_eq!(h.len(), 1);
    assert_eq!(h.entries()[0], e);
}

#[test]
fn readding_older_entry_moves_it_to_front_and_keeps_others_in_order() {
    let mut h = History::new();
    for p in ["a", "b", "c", "d"] {
        h.add(entry(p));
    }
    // d c b a -> b d c a
    h.add(entry("b"));
    let order: Vec<&str> = h.entries().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(order, ["b", "d", "c", "a"]);
}

#[test]
fn equality_covers_all_four_fields() {
    let mut h = History::new();
    h.add(HistoryEntry::new("x", "y", false, false));
    h.add(HistoryEntry::new("x", "y", true, false));
    h.add(HistoryEntry::new("x", "y", false, true));
    h.add(HistoryEntry::new("x", "z", false, false));
    assert_eq!(h.len(), 4);
}

#[test]
fn capacity_keeps_most_recent_hundred() {
    let mut h = History::new();
    for i in 0..150 {
        h.add(entry(&format!("pattern{i}")));
    }
    assert_eq!(h.len(), 100);
    let got = h.entries();
    assert_eq!(got[0].pattern, "pattern149");
    assert_eq!(got[99].pattern, "pattern50");
    for (idx, e) in got.iter().enumerate() {
        assert_eq!(e.pattern, format!("pattern{}", 149 - idx));
    }
}

#[test]
fn duplicate_at_capacity_does_not_evict() {
    let mut h = History::with_capacity(3);
    for p in ["a", "b", "c"] {
        h.add(entry(p));
    }
    h.add(entry("a"));
    let order: Vec<&str> = h.entries().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(order, ["a", "c", "b"]);
}

#[test]
fn clear_empties_the_list() {
    let mut h = History::new();
    h.add(entry("a"));
    h.add(entry("b"));
    h.clear();
    assert!(h.is_empty());
}

#[test]
fn set_entries_replaces_directly_and_respects_capacity() {
    let mut h = History::with_capacity(2);
    h.add(entry("old"));
    h.set_entries(vec![entry("x"), entry("y"), entry("z")]);
    let order: Vec<&str> = h.entries().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(order, ["x", "y"]);
}

#[test]
fn entry_builds_its_strategy() {
    let e = HistoryEntry::new(r"(\d+)", "#$1", true, false);
    let s = e.strategy().unwrap();
    assert_eq!(s.apply("track7.mp3"), "track#7.mp3");

    let bad = HistoryEntry::new("[", "", true, false);
    assert!(bad.strategy().is_err());
}
