//! Property-based tests for archive contents.
//!
//! Generated module trees are packaged and the archive is compared against
//! the files on disk.

#![allow(clippy::unwrap_used)]

use modpack_core::PackConfig;
use modpack_core::Packager;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

/// Relative file paths up to three levels deep. Only files end in `.txt`, so
/// a generated file never collides with a generated directory.
fn module_tree() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        "([a-z]{1,6}/){0,2}[a-z]{1,6}\\.txt",
        "[a-zA-Z0-9 ]{0,64}",
        0..12,
    )
}

fn write_tree<'a>(work_dir: &Path, files: impl Iterator<Item = (&'a String, &'a String)>) {
    for (rel, content) in files {
        let path = work_dir.join("module").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn build_and_read(work_dir: &Path) -> BTreeMap<String, String> {
    let result = Packager::new(PackConfig::in_dir(work_dir)).build().unwrap();
    let mut zip = zip::ZipArchive::new(File::open(&result.archive_path).unwrap()).unwrap();
    assert_eq!(zip.len(), result.entry_count);

    let mut contents = BTreeMap::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).unwrap();
        let mut data = String::new();
        entry.read_to_string(&mut data).unwrap();
        contents.insert(entry.name().to_string(), data);
    }
    contents
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every regular file appears exactly once, under its relative path.
    #[test]
    fn prop_archive_matches_tree(files in module_tree()) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("module")).unwrap();
        write_tree(temp.path(), files.iter());

        let contents = build_and_read(temp.path());
        prop_assert_eq!(contents, files);
    }

    /// Creation order on disk does not change what ends up in the archive.
    #[test]
    fn prop_creation_order_irrelevant(files in module_tree()) {
        let forward = TempDir::new().unwrap();
        let backward = TempDir::new().unwrap();
        fs::create_dir(forward.path().join("module")).unwrap();
        fs::create_dir(backward.path().join("module")).unwrap();
        write_tree(forward.path(), files.iter());
        write_tree(backward.path(), files.iter().rev());

        prop_assert_eq!(build_and_read(forward.path()), build_and_read(backward.path()));
    }
}
