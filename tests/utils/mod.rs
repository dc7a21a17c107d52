// Shared fixtures for the integration tests

#![allow(dead_code)] // not every test file uses every helper

use std::fs;
use std::path::{Path, PathBuf};

/// First run: one slow thread
pub const RUN_ONE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<aggregates>
  <aggregate name="Thread.A" min="100" max="100" total="100" measurements="1"/>
</aggregates>
"#;

/// Second run: more of the same thread plus two new points
pub const RUN_TWO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<aggregates>
  <aggregate name="Thread.A" min="200" max="2000" total="2200" measurements="2"/>
  <aggregate name="Thread.B" min="50" max="50" total="50" measurements="1"/>
  <aggregate name="alpha" min="1.125" max="1.125" total="1.125" measurements="1"/>
</aggregates>
"#;

/// Write a timing file below `dir`, creating parents as needed
pub fn write_timing_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A directory holding both sample runs and one empty file
pub fn sample_timings() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_timing_file(dir.path(), "run-1.xml", RUN_ONE);
    write_timing_file(dir.path(), "run-2.xml", RUN_TWO);
    write_timing_file(dir.path(), "run-3.xml", "<aggregates/>");
    dir
}
