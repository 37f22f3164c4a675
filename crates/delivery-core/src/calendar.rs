//! Order-date parsing and week numbering.

use chrono::{Datelike, NaiveDate};

/// Date format of the `Order_Date` column.
pub const ORDER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse an `Order_Date` value (`DD-MM-YYYY`).
pub fn parse_order_date(value: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ORDER_DATE_FORMAT)
}

/// Week of the year with weeks starting on Sunday.
///
/// Days before the year's first Sunday belong to week 0, so the first
/// (possibly partial) week is 0-indexed and the result ranges over 0–53.
/// This is the same numbering as strftime's `%U` directive.
pub fn sunday_week_of_year(date: NaiveDate) -> u32 {
    let days_from_sunday = date.weekday().num_days_from_sunday();
    (date.ordinal0() + 7 - days_from_sunday) / 7
}
