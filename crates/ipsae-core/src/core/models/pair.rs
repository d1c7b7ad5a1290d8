use std::path::{Path, PathBuf};

/// One predicted model: its PAE matrix file and the matching structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePair {
    pub pae_file: PathBuf,
    pub cif_file: PathBuf,
    pub group_name: String,
}

impl StructurePair {
    pub fn new(
        pae_file: impl Into<PathBuf>,
        cif_file: impl Into<PathBuf>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            pae_file: pae_file.into(),
            cif_file: cif_file.into(),
            group_name: group_name.into(),
        }
    }

    pub fn pae_file_name(&self) -> String {
        file_name_lossy(&self.pae_file)
    }

    pub fn cif_file_name(&self) -> String {
        file_name_lossy(&self.cif_file)
    }

    /// Structure file name without its extension (`foo_model_0` for `foo_model_0.cif`).
    pub fn cif_stem(&self) -> String {
        self.cif_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory holding the structure file; empty for bare file names.
    pub fn cif_dir(&self) -> &Path {
        self.cif_file.parent().unwrap_or_else(|| Path::new(""))
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_helpers_strip_directories() {
        let pair = StructurePair::new(
            "out/predictions/foo/pae_foo_model_0.npz",
            "out/predictions/foo/foo_model_0.cif",
            "foo",
        );

        assert_eq!(pair.pae_file_name(), "pae_foo_model_0.npz");
        assert_eq!(pair.cif_file_name(), "foo_model_0.cif");
        assert_eq!(pair.cif_stem(), "foo_model_0");
        assert_eq!(pair.cif_dir(), Path::new("out/predictions/foo"));
    }

    #[test]
    fn cif_dir_of_bare_file_name_is_empty() {
        let pair = StructurePair::new("pae_x_model_1.npz", "x_model_1.cif", "x");
        assert_eq!(pair.cif_dir(), Path::new(""));
    }
}
