use batch_rename::fs_ops::{next_free_name, split_name};
use batch_rename::StdFileSystem;
use std::fs;
use tempfile::tempdir;

#[test]
fn first_suffix_when_only_base_exists() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("report.pdf"), "x").unwrap();

    let got = next_free_name(&StdFileSystem, dir, "report.pdf", 1000).unwrap();
    assert_eq!(got, dir.join("report1.pdf"));
}

#[test]
fn skips_occupied_suffixes() {
    let td = tempdir().unwrap();
    let dir = td.path();
    for name in ["a.txt", "a1.txt", "a2.txt", "a3.txt"] {
        fs::write(dir.join(name), "x").unwrap();
    }

    let got = next_free_name(&StdFileSystem, dir, "a.txt", 1000).unwrap();
    assert_eq!(got, dir.join("a4.txt"));
}

#[test]
fn no_extension_appends_number() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("README"), "x").unwrap();

    let got = next_free_name(&StdFileSystem, dir, "README", 1000).unwrap();
    assert_eq!(got, dir.join("README1"));
}

#[test]
fn multi_dot_names_number_before_last_extension() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("backup.tar.gz"), "x").unwrap();

    let got = next_free_name(&StdFileSystem, dir, "backup.tar.gz", 1000).unwrap();
    assert_eq!(got, dir.join("backup.tar1.gz"));
}

#[test]
fn bound_reached_returns_none() {
    let td = tempdir().unwrap();
    let dir = td.path();
    for name in ["x.log", "x1.log", "x2.log"] {
        fs::write(dir.join(name), "x").unwrap();
    }

    assert!(next_free_name(&StdFileSystem, dir, "x.log", 2).is_none());
    assert_eq!(
        next_free_name(&StdFileSystem, dir, "x.log", 3).unwrap(),
        dir.join("x3.log")
    );
}

#[cfg(unix)]
#[test]
fn dangling_symlink_counts_as_occupied() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("n.txt"), "x").unwrap();
    std::os::unix::fs::symlink(dir.join("missing"), dir.join("n1.txt")).unwrap();

    let got = next_free_name(&StdFileSystem, dir, "n.txt", 10).unwrap();
    assert_eq!(got, dir.join("n2.txt"));
}

#[test]
fn split_name_cases() {
    assert_eq!(split_name("photo.JPG"), ("photo", ".JPG"));
    assert_eq!(split_name(".hidden"), (".hidden", ""));
    assert_eq!(split_name(".config.bak"), (".config", ".bak"));
}
