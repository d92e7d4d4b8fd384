//! Recent-files listing under the user's documents directory.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use walkdir::WalkDir;

/// Outcome of the recent-documents walk. The three cases get distinct
/// user-facing messages.
#[derive(Debug, Clone)]
pub enum RecentFiles {
    /// The documents directory does not exist.
    MissingDir,
    /// The directory exists but holds no readable files.
    Empty,
    /// Newest-first entries, already truncated to the requested limit.
    Entries(Vec<RecentEntry>),
}

#[derive(Debug, Clone)]
pub struct RecentEntry {
    pub name: String,
    pub modified: DateTime<Local>,
}

/// Walk `dir` recursively and return the `limit` most recently modified
/// files. Unreadable entries are skipped, not reported.
pub(super) fn recent_in(dir: &Path, limit: usize) -> RecentFiles {
    if !dir.exists() {
        return RecentFiles::MissingDir;
    }

    let mut files: Vec<(String, SystemTime)> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let modified = entry.metadata().ok()?.modified().ok()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            Some((name, modified))
        })
        .collect();

    files.sort_by(|a, b| b.1.cmp(&a.1));
    files.truncate(limit);

    if files.is_empty() {
        return RecentFiles::Empty;
    }

    RecentFiles::Entries(
        files
            .into_iter()
            .map(|(name, modified)| RecentEntry {
                name,
                modified: DateTime::<Local>::from(modified),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("does-not-exist");
        assert!(matches!(recent_in(&gone, 3), RecentFiles::MissingDir));
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(recent_in(dir.path(), 3), RecentFiles::Empty));
    }

    #[test]
    fn test_newest_first_and_truncated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = SystemTime::now() - Duration::from_secs(3600);

        // Four files with strictly increasing mtimes, one nested.
        fs::create_dir(dir.path().join("sub")).expect("mkdir");
        let paths = [
            dir.path().join("oldest.txt"),
            dir.path().join("sub").join("middle.txt"),
            dir.path().join("newer.txt"),
            dir.path().join("newest.txt"),
        ];
        for (i, path) in paths.iter().enumerate() {
            let file = fs::File::create(path).expect("create");
            let mtime = base + Duration::from_secs(60 * i as u64);
            file.set_modified(mtime).expect("set mtime");
        }

        let RecentFiles::Entries(entries) = recent_in(dir.path(), 3) else {
            unreachable!("expected entries");
        };
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["newest.txt", "newer.txt", "middle.txt"]);
    }
}
