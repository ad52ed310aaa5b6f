//! Launch the series-tui standalone binary.

use std::path::Path;

/// Launch the series-tui binary with the same catalog and asset root.
pub fn run(catalog: Option<&Path>, assets: &Path, show: Option<&str>) -> Result<(), String> {
    let mut command = std::process::Command::new("series-tui");
    command.arg("--assets").arg(assets);
    if let Some(path) = catalog {
        command.arg("--catalog").arg(path);
    }
    if let Some(title) = show {
        command.arg("--show").arg(title);
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("series-tui exited with {s}")),
        Err(_) => Err(
            "series-tui binary not found. Install with: cargo install --path crates/sc-tui".into(),
        ),
    }
}
