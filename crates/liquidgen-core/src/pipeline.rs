//! Two-phase generation: emit every entry, then validate, then write.
//!
//! [`generate`] is pure: it returns every emitted unit once all
//! cross-references check out. [`run`] adds the I/O on both ends.

use crate::backend::{Backend, backend_for};
use crate::config::GeneratorConfig;
use crate::emit::{EmittedUnit, emit_enum, emit_struct};
use crate::error::{GenerateError, GenerateResult};
use crate::output::{WriteSummary, write_generated};
use crate::schema::Schema;
use std::collections::HashSet;

/// Every emitted unit of one run, validated and ready to write.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchema {
    pub enums: Vec<EmittedUnit>,
    pub structs: Vec<EmittedUnit>,

    /// File extension of the backend that produced the units.
    pub extension: &'static str,
}

impl GeneratedSchema {
    /// Total number of units
    pub fn len(&self) -> usize {
        self.enums.len() + self.structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Emit every entry of `schema`, then validate the result.
///
/// Enum errors surface immediately. Reference errors are only detected after
/// all entries have been emitted. Nothing is written either way.
pub fn generate(schema: &Schema, backend: &dyn Backend) -> GenerateResult<GeneratedSchema> {
    let mut universe: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();

    let mut enums = Vec::with_capacity(schema.enums.len());
    for entry in &schema.enums {
        enums.push(emit_enum(backend, entry)?);
        if !universe.insert(&entry.name) {
            duplicates.push(&entry.name);
        }
    }

    let mut structs = Vec::with_capacity(schema.structs.len());
    for entry in &schema.structs {
        structs.push(emit_struct(backend, entry));
        if !universe.insert(&entry.name) {
            duplicates.push(&entry.name);
        }
    }

    validate(schema, &structs, &universe, &duplicates)?;

    tracing::debug!(
        enums = enums.len(),
        structs = structs.len(),
        backend = backend.name(),
        "schema validated"
    );

    Ok(GeneratedSchema {
        enums,
        structs,
        extension: backend.file_extension(),
    })
}

/// Cross-check emitted structs against the type universe.
///
/// Undefined references are reported first, in struct order and then field
/// order, followed by duplicate declarations and zero-length arrays.
fn validate(
    schema: &Schema,
    structs: &[EmittedUnit],
    universe: &HashSet<&str>,
    duplicates: &[&str],
) -> GenerateResult<()> {
    for unit in structs {
        for required in &unit.required_types {
            if !universe.contains(required.as_str()) {
                return Err(GenerateError::UndefinedType {
                    type_name: required.clone(),
                    required_by: unit.name.clone(),
                });
            }
        }
    }

    if let Some(name) = duplicates.first() {
        return Err(GenerateError::DuplicateType((*name).to_string()));
    }

    for entry in &schema.structs {
        if let Some(field) = entry.fields.iter().find(|f| f.length == Some(0)) {
            return Err(GenerateError::InvalidLength {
                struct_name: entry.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

/// Load, generate and validate without writing anything.
pub fn check(config: &GeneratorConfig) -> GenerateResult<GeneratedSchema> {
    config.validate()?;
    let backend = backend_for(&config.backend)?;
    let schema = Schema::from_file(&config.schema)?;

    generate(&schema, backend.as_ref())
}

/// Run the whole pipeline: load, emit, validate, then write.
///
/// Output directories are only prepared after validation succeeded.
pub fn run(config: &GeneratorConfig) -> GenerateResult<WriteSummary> {
    let generated = check(config)?;

    let summary = write_generated(
        &generated,
        &config.enum_output_dir(),
        &config.struct_output_dir(),
    )?;

    tracing::info!(
        schema = %config.schema.display(),
        enums = summary.enum_files.len(),
        structs = summary.struct_files.len(),
        "generation complete"
    );

    Ok(summary)
}
