#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to hold package list files in a temporary directory
pub struct TempLists {
    pub dir: TempDir,
}

impl TempLists {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a list file and return its absolute path
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(name);
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write raw bytes, for lists that are not valid UTF-8
    pub fn create_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let file_path = self.dir.path().join(name);
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Default for TempLists {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed list in the shape `pkg_info`-style tools print
pub fn sample_list() -> &'static str {
    "Installed packages:\n\
     \x20 zlib          1.2.11\n\
     \x20 Archive.Tar   2.38\n\
     \x20 libxml2       2.9.14-1\n\
     \x20 DBI           1.643\n\
     \x20 bzip2         1.0.8\n"
}

/// A list that breaks off in the middle
pub fn sample_list_with_bad_line() -> &'static str {
    "Header\n\
     \x20 zeta 3.0\n\
     \x20 Alpha 1.1\n\
     bad line no version\n\
     \x20 beta 2.0\n"
}

/// Create a temp dir holding `list.txt` with `content`
pub fn create_list(content: &str) -> (TempLists, PathBuf) {
    let lists = TempLists::new();
    let path = lists.create_file("list.txt", content);
    (lists, path)
}
