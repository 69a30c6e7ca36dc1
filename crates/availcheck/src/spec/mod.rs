//! Versioned column tables and cross-column rule sets.

mod columns;
mod versions;

pub use columns::{
    ColumnDefinition, ColumnId, EXPECTED_CAPTION_EXEMPTION, EXPECTED_DATE, EXPECTED_EXCEPTION_FLAG,
    EXPECTED_FORMAT_PROFILE, EXPECTED_LICENSE_TYPE, EXPECTED_PRICE_TYPE, EXPECTED_PRICE_VALUE,
    EXPECTED_TERRITORY, EXPECTED_WORK_TYPE, ILLEGAL_CHARACTERS_ERROR, ILLEGAL_CHARACTERS_EXPECTED,
};
pub use versions::{
    Spec, SpecVersion, DUPLICATE_COLUMN_ERROR, MISSING_COLUMN_ERROR, MISSING_COLUMN_EXPECTED,
    UNSUPPORTED_COLUMN_ERROR, UNSUPPORTED_COLUMN_EXPECTED,
};
