//! The supported column catalog and per-column validation rules.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::{ErrorLog, Severity};
use crate::validation::{date_format_rule, patterns, CellRule, SPECIFIC_VALUES_ONLY_ERROR};

pub const EXPECTED_TERRITORY: &str = "A two-letter territory code such as 'US' or 'GB'.";
pub const EXPECTED_DATE: &str = "A date in YYYY-MM-DD form, or 'Open' for the window end.";
pub const EXPECTED_WORK_TYPE: &str = "'Movie', 'Episode', 'Season' or 'Collection'.";
pub const EXPECTED_LICENSE_TYPE: &str = "'EST', 'VOD', 'SVOD', 'POEST' or 'DTR'.";
pub const EXPECTED_FORMAT_PROFILE: &str = "'SD', 'HD' or '3D'.";
pub const EXPECTED_PRICE_TYPE: &str = "'Tier', 'Category', 'WSP' or 'SRP'.";
pub const EXPECTED_PRICE_VALUE: &str = "A decimal number such as '9.99'.";
pub const EXPECTED_CAPTION_EXEMPTION: &str = "An exemption reason code between 1 and 6.";
pub const EXPECTED_EXCEPTION_FLAG: &str = "'Yes', 'No', or left empty.";

pub const ILLEGAL_CHARACTERS_ERROR: &str = "Illegal character in metadata value.";
pub const ILLEGAL_CHARACTERS_EXPECTED: &str = "No markup or control characters (< > | ^ ~ \\).";

/// The closed set of columns a specification can expect.
///
/// Header resolution maps the raw header strings of an input sheet onto this
/// catalog; headers that resolve to no variant are unsupported columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    AvailId,
    Territory,
    WorkType,
    Title,
    StartDate,
    EndDate,
    LicenseType,
    FormatProfile,
    PriceType,
    PriceValue,
    Srp,
    CaptionIncluded,
    CaptionExemption,
    ExceptionFlag,
}

impl ColumnId {
    /// The canonical header name, as it appears in a conforming sheet.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnId::AvailId => "AvailID",
            ColumnId::Territory => "Territory",
            ColumnId::WorkType => "WorkType",
            ColumnId::Title => "TitleInternalAlias",
            ColumnId::StartDate => "Start",
            ColumnId::EndDate => "End",
            ColumnId::LicenseType => "LicenseType",
            ColumnId::FormatProfile => "FormatProfile",
            ColumnId::PriceType => "PriceType",
            ColumnId::PriceValue => "PriceValue",
            ColumnId::Srp => "SRP",
            ColumnId::CaptionIncluded => "CaptionIncluded",
            ColumnId::CaptionExemption => "CaptionExemption",
            ColumnId::ExceptionFlag => "ExceptionFlag",
        }
    }

    /// Resolve a raw header string, case-insensitively.
    pub fn from_header(header: &str) -> Option<Self> {
        const ALL: [ColumnId; 14] = [
            ColumnId::AvailId,
            ColumnId::Territory,
            ColumnId::WorkType,
            ColumnId::Title,
            ColumnId::StartDate,
            ColumnId::EndDate,
            ColumnId::LicenseType,
            ColumnId::FormatProfile,
            ColumnId::PriceType,
            ColumnId::PriceValue,
            ColumnId::Srp,
            ColumnId::CaptionIncluded,
            ColumnId::CaptionExemption,
            ColumnId::ExceptionFlag,
        ];
        let trimmed = header.trim();
        ALL.into_iter().find(|id| id.name().eq_ignore_ascii_case(trimmed))
    }
}

/// Binds one column to its ordered validation rules and a required flag.
///
/// The rule list is built once at construction; definitions hold no per-cell
/// state and are reused across every row of a sheet and across sheets.
#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    id: ColumnId,
    required: bool,
    rules: Vec<CellRule>,
}

impl ColumnDefinition {
    /// Create the definition for a column, building its rule list from the
    /// column's configuration and the required flag.
    pub fn new(id: ColumnId, required: bool) -> Result<Self> {
        Ok(Self { id, required, rules: build_rules(id, required)? })
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn rules(&self) -> &[CellRule] {
        &self.rules
    }

    /// Run every rule against one cell, in declared order.
    ///
    /// Rules are never short-circuited: co-occurring defects on one cell each
    /// produce their own finding.
    pub fn validate_cell(&self, value: &str, row: u32, column: u32, log: &mut ErrorLog<'_>) {
        for rule in &self.rules {
            rule.evaluate(value, row, column, log);
        }
    }
}

/// The per-column rule tables.
///
/// Format and character rules apply to any present value; required columns
/// additionally enforce non-emptiness, while optional columns accept the
/// empty alternative inside their format patterns.
fn build_rules(id: ColumnId, required: bool) -> Result<Vec<CellRule>> {
    let mut rules = match id {
        ColumnId::AvailId | ColumnId::Title => vec![CellRule::special_symbols(
            patterns::ILLEGAL_METADATA_CHARACTERS,
            ILLEGAL_CHARACTERS_ERROR,
            ILLEGAL_CHARACTERS_EXPECTED,
        )?],
        ColumnId::Territory => vec![CellRule::regex_format(
            &[patterns::COUNTRY_CODE_REGEX, patterns::EMPTY_STRING_REGEX],
            true,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_TERRITORY,
        )?],
        ColumnId::WorkType => vec![CellRule::regex_format(
            &[patterns::WORK_TYPE_VALUES_REGEX, patterns::EMPTY_STRING_REGEX],
            true,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_WORK_TYPE,
        )?],
        ColumnId::StartDate => vec![date_format_rule(
            "Invalid start date format.",
            EXPECTED_DATE,
        )?],
        ColumnId::EndDate => vec![CellRule::regex_format(
            &[
                patterns::DATE_FORMAT_REGEX,
                patterns::OPEN_ENDED_DATE_REGEX,
                patterns::EMPTY_STRING_REGEX,
            ],
            true,
            Severity::Error,
            "Invalid end date format.",
            EXPECTED_DATE,
        )?],
        ColumnId::LicenseType => vec![CellRule::regex_format(
            &[patterns::LICENSE_TYPE_VALUES_REGEX, patterns::EMPTY_STRING_REGEX],
            true,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_LICENSE_TYPE,
        )?],
        // Format profiles and prices beyond the stock values occur in the
        // wild; flag them as notes rather than hard errors.
        ColumnId::FormatProfile => vec![CellRule::regex_format(
            &[patterns::FORMAT_PROFILE_VALUES_REGEX, patterns::EMPTY_STRING_REGEX],
            false,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_FORMAT_PROFILE,
        )?],
        ColumnId::PriceType => vec![CellRule::regex_format(
            &[patterns::PRICE_TYPE_VALUES_REGEX, patterns::EMPTY_STRING_REGEX],
            true,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_PRICE_TYPE,
        )?],
        ColumnId::PriceValue | ColumnId::Srp => vec![CellRule::regex_format(
            &[patterns::FLOAT_FORMAT_REGEX, patterns::EMPTY_STRING_REGEX],
            false,
            Severity::Error,
            "Invalid price format.",
            EXPECTED_PRICE_VALUE,
        )?],
        // Caption validity depends on the territory; the cross-column rule
        // owns it.
        ColumnId::CaptionIncluded => Vec::new(),
        ColumnId::CaptionExemption => vec![CellRule::regex_format(
            &[
                patterns::CAPTION_EXEMPTION_VALUES_REGEX,
                patterns::EMPTY_STRING_REGEX,
            ],
            true,
            Severity::Error,
            SPECIFIC_VALUES_ONLY_ERROR,
            EXPECTED_CAPTION_EXEMPTION,
        )?],
        ColumnId::ExceptionFlag => vec![CellRule::regex_format(
            &[patterns::YES_OR_NO_ONLY_REGEX, patterns::EMPTY_STRING_REGEX],
            false,
            Severity::Error,
            "Unexpected exception flag value.",
            EXPECTED_EXCEPTION_FLAG,
        )?],
    };
    if required {
        rules.push(CellRule::not_empty());
    }
    Ok(rules)
}
