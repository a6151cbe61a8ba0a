//! Waiver export discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Filename prefix of a waiver export.
const EXPORT_PREFIX: &str = "results-waivers-";

/// Filename extension of a waiver export.
const EXPORT_EXTENSION: &str = ".csv";

/// Find exactly one waiver export in `dir`.
///
/// Zero or multiple matches are operator errors: a run must be
/// unambiguous about which point-in-time export it reconciles.
pub fn find_waiver_export(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read directory {}", dir.display()))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(EXPORT_PREFIX) && name.ends_with(EXPORT_EXTENSION) {
            matches.push(entry.path());
        }
    }
    matches.sort();

    match matches.len() {
        0 => bail!(
            "no waiver export matching '{}*{}' found in {}; place the exported waiver CSV there",
            EXPORT_PREFIX,
            EXPORT_EXTENSION,
            dir.display()
        ),
        1 => Ok(matches.remove(0)),
        _ => {
            let listing = matches
                .iter()
                .map(|path| format!("  - {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "found {} waiver exports matching '{}*{}' in {}:\n{}\nkeep exactly one export in the directory",
                matches.len(),
                EXPORT_PREFIX,
                EXPORT_EXTENSION,
                dir.display(),
                listing
            )
        }
    }
}
