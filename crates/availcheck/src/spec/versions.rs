//! Versioned specifications: which columns and cross-column rules apply.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AvailError, Result};
use crate::report::{Entry, ErrorLog, Severity};
use crate::validation::{
    RowValidator, RowValidatorCaptionIncluded, RowValidatorDateOrder, RowValidatorExceptionFlag,
};

use super::columns::{ColumnDefinition, ColumnId};

pub const UNSUPPORTED_COLUMN_ERROR: &str = "Invalid column header.";
pub const UNSUPPORTED_COLUMN_EXPECTED: &str =
    "Please refer to the governing spec for the precise column names, as these are not flexible.";
pub const DUPLICATE_COLUMN_ERROR: &str = "Duplicate column header.";
pub const MISSING_COLUMN_ERROR: &str = "Required column missing from sheet.";
pub const MISSING_COLUMN_EXPECTED: &str =
    "Every required column of the governing spec, present exactly once.";

/// The supported specification revisions.
///
/// Version detection happens upstream; the core receives the already-decided
/// version and sources every rule from it exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecVersion {
    /// Avails 1.5.
    V1_5,
    /// Avails 1.6, movie-type content.
    V1_6,
    /// Avails 1.6, TV-type content.
    V1_6Tv,
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecVersion::V1_5 => "Avails 1.5",
            SpecVersion::V1_6 => "Avails 1.6",
            SpecVersion::V1_6Tv => "Avails 1.6 TV",
        };
        f.write_str(name)
    }
}

/// What a valid sheet looks like for one specification revision: an immutable
/// column table plus the ordered cross-column rules.
///
/// Selecting a spec is a single-assignment decision made once per sheet
/// before any row is processed; there is no fallback or cross-version mixing.
pub struct Spec {
    version: SpecVersion,
    columns: IndexMap<ColumnId, ColumnDefinition>,
    row_validators: Vec<Box<dyn RowValidator>>,
}

impl Spec {
    /// Build the specification for one supported revision.
    pub fn for_version(version: SpecVersion) -> Result<Self> {
        let mut columns = Vec::new();
        columns.push(ColumnDefinition::new(ColumnId::AvailId, true)?);
        columns.push(ColumnDefinition::new(ColumnId::Territory, true)?);
        if version == SpecVersion::V1_6Tv {
            columns.push(ColumnDefinition::new(ColumnId::WorkType, true)?);
        }
        columns.push(ColumnDefinition::new(ColumnId::Title, true)?);
        columns.push(ColumnDefinition::new(ColumnId::StartDate, true)?);
        columns.push(ColumnDefinition::new(ColumnId::EndDate, true)?);
        columns.push(ColumnDefinition::new(ColumnId::LicenseType, true)?);
        columns.push(ColumnDefinition::new(ColumnId::FormatProfile, true)?);
        columns.push(ColumnDefinition::new(ColumnId::PriceType, true)?);
        columns.push(ColumnDefinition::new(ColumnId::PriceValue, true)?);
        columns.push(ColumnDefinition::new(ColumnId::Srp, false)?);
        if version != SpecVersion::V1_5 {
            columns.push(ColumnDefinition::new(ColumnId::CaptionIncluded, false)?);
        }
        if version == SpecVersion::V1_6Tv {
            columns.push(ColumnDefinition::new(ColumnId::CaptionExemption, false)?);
        }
        columns.push(ColumnDefinition::new(ColumnId::ExceptionFlag, false)?);

        let mut row_validators: Vec<Box<dyn RowValidator>> = vec![Box::new(RowValidatorDateOrder)];
        if version != SpecVersion::V1_5 {
            row_validators.push(Box::new(RowValidatorCaptionIncluded::new(version)));
        }
        row_validators.push(Box::new(RowValidatorExceptionFlag));

        Self::custom(version, columns, row_validators)
    }

    /// Build a specification from an explicit column table and rule list,
    /// for sheets graded against something other than a stock revision.
    pub fn custom(
        version: SpecVersion,
        columns: Vec<ColumnDefinition>,
        row_validators: Vec<Box<dyn RowValidator>>,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(AvailError::EmptySpec { version });
        }
        let columns = columns
            .into_iter()
            .map(|definition| (definition.id(), definition))
            .collect();
        Ok(Self { version, columns, row_validators })
    }

    pub fn version(&self) -> SpecVersion {
        self.version
    }

    /// The definition for a column, when this spec expects it.
    pub fn column(&self, id: ColumnId) -> Option<&ColumnDefinition> {
        self.columns.get(&id)
    }

    /// Every expected column, in table order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.values()
    }

    /// The cross-column rules, in evaluation order.
    pub fn row_validators(&self) -> &[Box<dyn RowValidator>] {
        &self.row_validators
    }

    /// Resolve a header row against this spec's column table.
    ///
    /// Unsupported and duplicate headers are reported as critical findings,
    /// as is every required column absent from the header. Returns the
    /// resolved layout: column index to column, for every resolvable header.
    pub fn check_headers(&self, header: &[String], log: &mut ErrorLog<'_>) -> IndexMap<u32, ColumnId> {
        let mut layout: IndexMap<u32, ColumnId> = IndexMap::new();
        for (index, raw) in header.iter().enumerate() {
            let index = index as u32;
            match ColumnId::from_header(raw) {
                Some(id) if self.columns.contains_key(&id) => {
                    if layout.values().any(|&seen| seen == id) {
                        log.append_error(Entry::cell(
                            Severity::Critical,
                            1,
                            index,
                            DUPLICATE_COLUMN_ERROR,
                            raw.clone(),
                            UNSUPPORTED_COLUMN_EXPECTED,
                        ));
                    } else {
                        layout.insert(index, id);
                    }
                }
                _ => {
                    log.append_error(Entry::cell(
                        Severity::Critical,
                        1,
                        index,
                        UNSUPPORTED_COLUMN_ERROR,
                        raw.clone(),
                        UNSUPPORTED_COLUMN_EXPECTED,
                    ));
                }
            }
        }
        for definition in self.columns.values() {
            if definition.required() && !layout.values().any(|&id| id == definition.id()) {
                log.append_error(Entry::row(
                    Severity::Critical,
                    1,
                    MISSING_COLUMN_ERROR,
                    definition.id().name(),
                    MISSING_COLUMN_EXPECTED,
                ));
            }
        }
        layout
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("version", &self.version)
            .field("columns", &self.columns.keys().collect::<Vec<_>>())
            .field("row_validators", &self.row_validators.len())
            .finish()
    }
}
