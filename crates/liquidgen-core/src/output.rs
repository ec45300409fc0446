//! Output directory preparation and file writing
//!
//! Output directories hold generated artifacts only: every regular file
//! directly inside is deleted before writing. Subdirectories and their
//! contents are left untouched.

use crate::emit::EmittedUnit;
use crate::error::{GenerateError, GenerateResult};
use crate::pipeline::GeneratedSchema;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteSummary {
    pub enum_files: Vec<PathBuf>,
    pub struct_files: Vec<PathBuf>,
}

impl WriteSummary {
    pub fn total(&self) -> usize {
        self.enum_files.len() + self.struct_files.len()
    }
}

/// Create `dir`, or delete every file directly inside it if it exists.
pub fn prepare_dir(dir: &Path) -> GenerateResult<()> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "creating output directory");
        return fs::create_dir_all(dir).map_err(|e| GenerateError::io(dir, e));
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(dir).map_err(|e| GenerateError::io(dir, e))? {
        let entry = entry.map_err(|e| GenerateError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| GenerateError::io(&path, e))?;

        if file_type.is_dir() {
            tracing::debug!(path = %path.display(), "leaving subdirectory in place");
            continue;
        }

        fs::remove_file(&path).map_err(|e| GenerateError::io(&path, e))?;
        removed += 1;
    }

    if removed > 0 {
        tracing::warn!(dir = %dir.display(), removed, "cleared previous output");
    }

    Ok(())
}

/// Prepare `dir` and write one `<type_name><extension>` file per unit.
pub fn write_units(
    dir: &Path,
    units: &[EmittedUnit],
    extension: &str,
) -> GenerateResult<Vec<PathBuf>> {
    prepare_dir(dir)?;

    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = dir.join(format!("{}{}", unit.type_name, extension));
        fs::write(&path, &unit.code).map_err(|e| GenerateError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote header");
        written.push(path);
    }

    Ok(written)
}

/// Write enums, then structs, each into its own freshly prepared directory.
pub fn write_generated(
    generated: &GeneratedSchema,
    enum_dir: &Path,
    struct_dir: &Path,
) -> GenerateResult<WriteSummary> {
    let enum_files = write_units(enum_dir, &generated.enums, generated.extension)?;
    let struct_files = write_units(struct_dir, &generated.structs, generated.extension)?;

    Ok(WriteSummary {
        enum_files,
        struct_files,
    })
}
