use super::error::EngineError;
use crate::core::models::pair::StructurePair;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const PREDICTIONS_DIR: &str = "predictions";

/// Result of scanning a `predictions/` tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discovery {
    pub pairs: Vec<StructurePair>,
    /// PAE files that had no matching structure file and were skipped.
    pub missing_structures: Vec<PathBuf>,
}

/// Finds every `pae_<group>_model_*.npz` / `<group>_model_*.cif` pair under
/// `<out_dir>/predictions/<group>/`.
///
/// Groups and PAE files are visited in name order. A PAE file without its structure file is
/// logged and recorded in [`Discovery::missing_structures`].
pub fn discover_pairs(out_dir: &Path) -> Result<Discovery, EngineError> {
    let predictions_dir = out_dir.join(PREDICTIONS_DIR);
    if !predictions_dir.is_dir() {
        return Err(EngineError::MissingDirectory(predictions_dir));
    }

    let mut discovery = Discovery::default();
    for (group, group_dir) in list_groups(&predictions_dir)? {
        info!("Processing folder: {}", group);
        scan_group(&group, &group_dir, &mut discovery)?;
    }

    Ok(discovery)
}

fn list_groups(predictions_dir: &Path) -> Result<Vec<(String, PathBuf)>, EngineError> {
    let mut groups = Vec::new();
    for entry in read_dir_sorted(predictions_dir)? {
        if !entry.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping folder with a non UTF-8 name: {:?}", entry);
            continue;
        };
        groups.push((name.to_string(), entry.clone()));
    }
    Ok(groups)
}

fn scan_group(
    group: &str,
    group_dir: &Path,
    discovery: &mut Discovery,
) -> Result<(), EngineError> {
    let prefix = format!("pae_{}_", group);
    let pattern = Pattern::new(&format!("{}model_*.npz", Pattern::escape(&prefix)))
        .map_err(|e| EngineError::Internal(format!("invalid PAE pattern for '{}': {}", group, e)))?;

    for path in read_dir_sorted(group_dir)? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !pattern.matches(file_name) || !path.is_file() {
            continue;
        }

        let model_part = file_name
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(".npz"))
            .ok_or_else(|| {
                EngineError::Internal(format!("PAE file '{}' matched without prefix", file_name))
            })?;

        let cif_file = group_dir.join(format!("{}_{}.cif", group, model_part));
        if cif_file.exists() {
            info!(
                "  Found pair: {} + {}",
                file_name,
                cif_file.file_name().unwrap_or_default().to_string_lossy()
            );
            discovery
                .pairs
                .push(StructurePair::new(path.clone(), cif_file, group));
        } else {
            warn!("  CIF file not found for {}", file_name);
            discovery.missing_structures.push(path.clone());
        }
    }

    debug!(
        "Group '{}' done, {} pair(s) collected so far.",
        group,
        discovery.pairs.len()
    );
    Ok(())
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let to_error = |source| EngineError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(dir)
        .map_err(to_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)?;
    paths.sort();
    Ok(paths)
}
