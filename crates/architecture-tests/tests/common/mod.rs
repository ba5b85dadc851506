//! Source tree helpers shared by the architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by walking up to the `Cargo.toml` with `[workspace]`.
pub fn workspace_root() -> PathBuf {
    let start = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut dir = start;
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => panic!("no workspace Cargo.toml above {}", start.display()),
        }
    }
}

/// All `.rs` files under `crates/`, skipping build output and this crate.
#[allow(dead_code)]
pub fn rust_files() -> Vec<PathBuf> {
    let crates_dir = workspace_root().join("crates");
    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Path relative to the workspace root, for messages.
#[allow(dead_code)]
pub fn relative(path: &Path) -> String {
    let root = workspace_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
