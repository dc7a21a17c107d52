//! Timing file discovery
//!
//! Finds every `.xml` file (extension compared ignoring case) below the
//! configured timing directories.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Directory scanned when no timing directories are configured
pub const DEFAULT_TIMINGS_DIR: &str = "target/jetm";

/// Timing directories to scan, falling back to [`DEFAULT_TIMINGS_DIR`]
pub fn timing_directories(configured: &[PathBuf]) -> Vec<PathBuf> {
    if configured.is_empty() {
        vec![PathBuf::from(DEFAULT_TIMINGS_DIR)]
    } else {
        configured.to_vec()
    }
}

/// True when `path` names an XML file
pub fn is_timing_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".xml"))
        .unwrap_or(false)
}

/// Find all timing files under `dirs`
///
/// Directories are visited in the given order and files within each one are
/// sorted by path. Directories that do not exist are skipped.
pub fn find_timing_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in dirs {
        if !dir.exists() {
            debug!("Timing directory does not exist: {}", dir.display());
            continue;
        }

        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_timing_file(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        debug!("Found {} timing files in {}", files.len(), dir.display());
        found.extend(files);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_timing_file_accepts_only_xml() {
        assert!(is_timing_file(Path::new("me.xml")));
        assert!(is_timing_file(Path::new("target/jetm/ME.XML")));
        assert!(!is_timing_file(Path::new("you.txt")));
        assert!(!is_timing_file(Path::new("xml")));
    }

    #[test]
    fn test_default_directory_used_when_none_configured() {
        assert_eq!(
            timing_directories(&[]),
            vec![PathBuf::from(DEFAULT_TIMINGS_DIR)]
        );
        let configured = vec![PathBuf::from("a"), PathBuf::from("b")];
        assert_eq!(timing_directories(&configured), configured);
    }

    #[test]
    fn test_find_timing_files_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.xml"), "<aggregates/>").unwrap();
        fs::write(dir.path().join("a.XML"), "<aggregates/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("nested").join("c.xml"), "<aggregates/>").unwrap();

        let files = find_timing_files(&[dir.path().to_path_buf()]);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "a.XML");
        assert_eq!(names[1], "b.xml");
        assert!(names[2].ends_with("c.xml"));
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(find_timing_files(&[missing]).is_empty());
    }

    #[test]
    fn test_directories_visited_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("z.xml"), "<aggregates/>").unwrap();
        fs::write(second.path().join("a.xml"), "<aggregates/>").unwrap();

        let files = find_timing_files(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("z.xml"));
        assert!(files[1].ends_with("a.xml"));
    }
}
