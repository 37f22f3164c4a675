//! Normalization of raw order rows into the clean, typed record set.
//!
//! The steps run in a fixed order, each depending on the previous one:
//! sentinel substitution, row filtering on the four required categorical
//! columns, text trimming, numeric coercion, strict date parsing,
//! composite-field extraction, and the derived week-of-year column.

use delivery_core::calendar;
use delivery_core::error::{PipelineError, Result};
use delivery_core::models::{OrderRecord, RawOrderRow};
use tracing::{debug, info};

/// Literal token the upstream export writes for a missing value.
/// The trailing space is significant.
pub const MISSING_SENTINEL: &str = "NaN ";

// ── Output types ──────────────────────────────────────────────────────────────

/// Counters describing what normalization did to the raw input.
///
/// Recoverable failures are absorbed silently at the row/field level; these
/// counts are the only observable trace of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Raw rows inspected.
    pub rows_read: usize,
    /// Rows dropped because a required categorical column was missing.
    pub rows_dropped: usize,
    /// Retained rows in which at least one numeric field coerced to null.
    pub rows_with_coerced_fields: usize,
}

/// The clean record set plus its normalization counters.
#[derive(Debug, Clone)]
pub struct CleanSet {
    pub records: Vec<OrderRecord>,
    pub stats: NormalizeStats,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Normalize `rows` into the clean record set.
///
/// Pure and deterministic. Recoverable defects (missing categoricals,
/// unparseable age/rating/multiple-deliveries values) are absorbed per the
/// counters in [`NormalizeStats`]; an unparseable order date or time-taken
/// token aborts the whole run with an error and no partial clean set is
/// produced.
pub fn normalize(rows: &[RawOrderRow]) -> Result<CleanSet> {
    let mut records = Vec::with_capacity(rows.len());
    let mut stats = NormalizeStats::default();

    for (row_index, row) in rows.iter().enumerate() {
        stats.rows_read += 1;

        // Steps 1–2: sentinel substitution and row filtering. Only these
        // four columns decide retention; defects anywhere else never drop
        // a row.
        if is_missing(&row.city)
            || is_missing(&row.festival)
            || is_missing(&row.road_traffic_density)
            || is_missing(&row.weather_condition)
        {
            stats.rows_dropped += 1;
            continue;
        }

        // Step 5: strict date parse. Contractually well-formed, so failure
        // is fatal for the whole run.
        let order_date = calendar::parse_order_date(&row.order_date).map_err(|_| {
            PipelineError::InvalidOrderDate {
                row: row_index,
                value: row.order_date.clone(),
            }
        })?;

        // Step 6: composite-field extraction.
        let weather_condition =
            last_token(&row.weather_condition).ok_or(PipelineError::EmptyField {
                row: row_index,
                column: "Weatherconditions",
            })?;
        let time_taken_minutes = last_token(&row.time_taken)
            .and_then(|token| token.parse::<u32>().ok())
            .ok_or_else(|| PipelineError::MalformedTimeTaken {
                row: row_index,
                value: row.time_taken.clone(),
            })?;

        // Step 4: numeric coercion, null on failure.
        let delivery_person_age = coerce_int(&row.delivery_person_age);
        let delivery_person_rating = coerce_float(&row.delivery_person_rating);
        let multiple_deliveries = coerce_int(&row.multiple_deliveries);
        if delivery_person_age.is_none()
            || delivery_person_rating.is_none()
            || multiple_deliveries.is_none()
        {
            stats.rows_with_coerced_fields += 1;
        }

        // Steps 3 and 7: trimming and the derived week column.
        records.push(OrderRecord {
            id: row.id.trim().to_string(),
            delivery_person_id: row.delivery_person_id.trim().to_string(),
            delivery_person_age,
            delivery_person_rating,
            restaurant_latitude: row.restaurant_latitude,
            restaurant_longitude: row.restaurant_longitude,
            delivery_location_latitude: row.delivery_location_latitude,
            delivery_location_longitude: row.delivery_location_longitude,
            order_date,
            week_of_year: calendar::sunday_week_of_year(order_date),
            weather_condition,
            road_traffic_density: row.road_traffic_density.trim().to_string(),
            vehicle_condition: row.vehicle_condition,
            type_of_order: row.type_of_order.trim().to_string(),
            type_of_vehicle: row.type_of_vehicle.trim().to_string(),
            multiple_deliveries,
            festival: row.festival.trim().to_string(),
            city: row.city.trim().to_string(),
            time_taken_minutes,
        });
    }

    info!(
        "Normalized {} rows: {} dropped, {} kept",
        stats.rows_read,
        stats.rows_dropped,
        records.len()
    );
    if stats.rows_with_coerced_fields > 0 {
        debug!(
            "{} retained rows had numeric fields coerced to null",
            stats.rows_with_coerced_fields
        );
    }

    Ok(CleanSet { records, stats })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a required categorical value is missing after sentinel
/// substitution. An entirely empty field carries the same NA meaning as
/// the sentinel in the upstream export.
fn is_missing(raw: &str) -> bool {
    raw == MISSING_SENTINEL || raw.is_empty()
}

/// Last whitespace-separated token of a composite field, owned.
fn last_token(raw: &str) -> Option<String> {
    raw.split_whitespace().last().map(str::to_string)
}

/// Coerce a loosely-typed integer column. The sentinel, plain garbage, and
/// a textual `NaN` all become `None`; a float NaN never leaks through.
fn coerce_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i32>() {
        return Some(v);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i32)
}

/// Coerce a loosely-typed float column; same null semantics as
/// [`coerce_int`].
fn coerce_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw_row() -> RawOrderRow {
        RawOrderRow {
            id: " 0x4607 ".to_string(),
            delivery_person_id: " INDORES13DEL02 ".to_string(),
            delivery_person_age: "37".to_string(),
            delivery_person_rating: "4.9".to_string(),
            restaurant_latitude: 22.745049,
            restaurant_longitude: 75.892471,
            delivery_location_latitude: 22.765049,
            delivery_location_longitude: 75.912471,
            order_date: "19-03-2022".to_string(),
            weather_condition: "conditions Sunny".to_string(),
            road_traffic_density: "High ".to_string(),
            vehicle_condition: 2,
            type_of_order: "Snack ".to_string(),
            type_of_vehicle: "motorcycle ".to_string(),
            multiple_deliveries: "0".to_string(),
            festival: "No ".to_string(),
            city: "Urban ".to_string(),
            time_taken: "(min) 24".to_string(),
        }
    }

    // ── Row filtering ─────────────────────────────────────────────────────────

    #[test]
    fn test_sentinel_in_required_column_drops_row() {
        let mut bad = raw_row();
        bad.city = "NaN ".to_string();

        let clean = normalize(&[bad, raw_row()]).unwrap();
        assert_eq!(clean.records.len(), 1);
        assert_eq!(clean.stats.rows_read, 2);
        assert_eq!(clean.stats.rows_dropped, 1);
    }

    #[test]
    fn test_sentinel_requires_trailing_space() {
        // "NaN" without the trailing space is an ordinary (odd) city name,
        // not the missing marker.
        let mut row = raw_row();
        row.city = "NaN".to_string();

        let clean = normalize(&[row]).unwrap();
        assert_eq!(clean.records.len(), 1);
        assert_eq!(clean.records[0].city, "NaN");
    }

    #[test]
    fn test_each_required_column_is_checked() {
        for column in ["city", "festival", "traffic", "weather"] {
            let mut row = raw_row();
            match column {
                "city" => row.city = "NaN ".to_string(),
                "festival" => row.festival = "NaN ".to_string(),
                "traffic" => row.road_traffic_density = "NaN ".to_string(),
                _ => row.weather_condition = "NaN ".to_string(),
            }
            let clean = normalize(&[row]).unwrap();
            assert!(clean.records.is_empty(), "column {column} should drop the row");
        }
    }

    #[test]
    fn test_empty_required_column_drops_row() {
        let mut row = raw_row();
        row.festival = String::new();

        let clean = normalize(&[row]).unwrap();
        assert!(clean.records.is_empty());
        assert_eq!(clean.stats.rows_dropped, 1);
    }

    #[test]
    fn test_malformed_optional_columns_do_not_drop_row() {
        // Only the four required categoricals decide retention.
        let mut row = raw_row();
        row.delivery_person_age = "NaN ".to_string();
        row.delivery_person_rating = "garbage".to_string();
        row.multiple_deliveries = "NaN ".to_string();

        let clean = normalize(&[row]).unwrap();
        assert_eq!(clean.records.len(), 1);
        let record = &clean.records[0];
        assert_eq!(record.delivery_person_age, None);
        assert_eq!(record.delivery_person_rating, None);
        assert_eq!(record.multiple_deliveries, None);
        assert_eq!(clean.stats.rows_with_coerced_fields, 1);
    }

    // ── Trimming ──────────────────────────────────────────────────────────────

    #[test]
    fn test_text_columns_are_trimmed() {
        let clean = normalize(&[raw_row()]).unwrap();
        let record = &clean.records[0];
        assert_eq!(record.id, "0x4607");
        assert_eq!(record.delivery_person_id, "INDORES13DEL02");
        assert_eq!(record.road_traffic_density, "High");
        assert_eq!(record.type_of_order, "Snack");
        assert_eq!(record.type_of_vehicle, "motorcycle");
        assert_eq!(record.festival, "No");
        assert_eq!(record.city, "Urban");
    }

    #[test]
    fn test_trimming_preserves_internal_whitespace() {
        let mut row = raw_row();
        row.city = " Metropolitian Area ".to_string();

        let clean = normalize(&[row]).unwrap();
        assert_eq!(clean.records[0].city, "Metropolitian Area");
    }

    #[test]
    fn test_trimming_is_idempotent() {
        for value in ["  Urban  ", "Urban", " Semi Urban "] {
            assert_eq!(value.trim().trim(), value.trim());
        }
    }

    // ── Numeric coercion ──────────────────────────────────────────────────────

    #[test]
    fn test_coerce_int_accepts_plain_and_decimal_forms() {
        assert_eq!(coerce_int("37"), Some(37));
        assert_eq!(coerce_int(" 25 "), Some(25));
        assert_eq!(coerce_int("25.0"), Some(25));
    }

    #[test]
    fn test_coerce_int_rejects_sentinel_and_garbage() {
        assert_eq!(coerce_int("NaN "), None);
        assert_eq!(coerce_int("NaN"), None);
        assert_eq!(coerce_int("abc"), None);
        assert_eq!(coerce_int(""), None);
    }

    #[test]
    fn test_coerce_float_never_yields_nan() {
        // A textual NaN parses as a float NaN in Rust; it must become None,
        // not poison downstream means.
        assert_eq!(coerce_float("NaN"), None);
        assert_eq!(coerce_float("NaN "), None);
        assert_eq!(coerce_float("inf"), None);
        assert_eq!(coerce_float("4.9"), Some(4.9));
    }

    // ── Date parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_unparseable_date_aborts_run() {
        let mut bad = raw_row();
        bad.order_date = "19/03/2022".to_string();

        let err = normalize(&[raw_row(), bad]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidOrderDate { row: 1, .. }
        ));
    }

    #[test]
    fn test_date_and_week_are_consistent() {
        let clean = normalize(&[raw_row()]).unwrap();
        let record = &clean.records[0];
        assert_eq!(
            record.order_date,
            NaiveDate::from_ymd_opt(2022, 3, 19).unwrap()
        );
        assert_eq!(
            record.week_of_year,
            calendar::sunday_week_of_year(record.order_date)
        );
    }

    // ── Composite-field extraction ────────────────────────────────────────────

    #[test]
    fn test_weather_keeps_last_token_only() {
        let clean = normalize(&[raw_row()]).unwrap();
        assert_eq!(clean.records[0].weather_condition, "Sunny");
    }

    #[test]
    fn test_time_taken_strips_unit_prefix() {
        let clean = normalize(&[raw_row()]).unwrap();
        assert_eq!(clean.records[0].time_taken_minutes, 24);
    }

    #[test]
    fn test_bare_numeric_time_taken_also_parses() {
        let mut row = raw_row();
        row.time_taken = "31".to_string();

        let clean = normalize(&[row]).unwrap();
        assert_eq!(clean.records[0].time_taken_minutes, 31);
    }

    #[test]
    fn test_non_numeric_time_token_aborts_run() {
        let mut bad = raw_row();
        bad.time_taken = "(min) fast".to_string();

        assert!(matches!(
            normalize(&[bad]).unwrap_err(),
            PipelineError::MalformedTimeTaken { row: 0, .. }
        ));
    }

    #[test]
    fn test_negative_time_token_aborts_run() {
        let mut bad = raw_row();
        bad.time_taken = "(min) -5".to_string();

        assert!(matches!(
            normalize(&[bad]).unwrap_err(),
            PipelineError::MalformedTimeTaken { .. }
        ));
    }

    // ── End-to-end scenario ───────────────────────────────────────────────────

    #[test]
    fn test_mixed_batch_scenario() {
        let mut dropped = raw_row();
        dropped.city = "NaN ".to_string();

        let mut kept = raw_row();
        kept.city = "Delhi".to_string();
        kept.festival = "Yes".to_string();
        kept.road_traffic_density = "Jam".to_string();
        kept.weather_condition = "conditions Fog".to_string();
        kept.time_taken = "(min) 30".to_string();
        kept.order_date = "11-02-2022".to_string();

        let clean = normalize(&[dropped, kept]).unwrap();
        assert_eq!(clean.records.len(), 1);

        let record = &clean.records[0];
        assert_eq!(record.city, "Delhi");
        assert_eq!(record.weather_condition, "Fog");
        assert_eq!(record.time_taken_minutes, 30);
        // 2022-02-11 falls in the seventh Sunday-started span of the year.
        assert_eq!(record.week_of_year, 6);
    }

    #[test]
    fn test_empty_input_yields_empty_clean_set() {
        let clean = normalize(&[]).unwrap();
        assert!(clean.records.is_empty());
        assert_eq!(clean.stats, NormalizeStats::default());
    }
}
