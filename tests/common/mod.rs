use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a small scratch archive into `dir` and returns its path.
pub fn write_game_archive(dir: &TempDir) -> PathBuf {
    let file_path = dir.path().join("testsmall.zip");
    std::fs::File::create(&file_path)
        .unwrap()
        .write_all(b"PK\x03\x04 dummy zip bytes")
        .unwrap();
    file_path
}
