//! Validation rules: single-cell checks and cross-column row rules.

mod cell;
pub mod patterns;
mod row;

pub use cell::{
    CellRule, date_format_rule, NOT_EMPTY_ERROR, NOT_EMPTY_EXPECTED, SPECIFIC_VALUES_ONLY_ERROR,
};
pub use row::{
    RowValidator, RowValidatorCaptionIncluded, RowValidatorDateOrder, RowValidatorExceptionFlag,
    RowValues, CAPTION_INCLUDED_ERROR, CAPTION_INCLUDED_EXPECTED, DATE_ORDER_ERROR,
    DATE_ORDER_EXPECTED, EXCEPTION_FLAG_EXPECTED, EXCEPTION_FLAG_NOT_SET_ERROR, OPEN_WINDOW_NOTE,
    OPEN_WINDOW_EXPECTED,
};
