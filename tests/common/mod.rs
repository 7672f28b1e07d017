use std::{
    fs,
    path::{Path, PathBuf},
};

/// Writes `lines` to `dir/name`, one per line, and returns the path.
pub fn write_input(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}
