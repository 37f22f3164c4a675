//! Deliverers-view artifacts: speed rankings, rating breakdowns, and the
//! fleet overview scalars.

use std::collections::HashSet;

use delivery_core::models::OrderRecord;
use delivery_core::stats;
use serde::Serialize;

use super::group_in_order;

/// How many deliverers each city contributes to a speed ranking.
const RANKING_SIZE_PER_CITY: usize = 10;

// ── Artifact types ────────────────────────────────────────────────────────────

/// Which end of the speed distribution a ranking selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Largest mean delivery times first.
    Slowest,
    /// Smallest mean delivery times first.
    Fastest,
}

/// One row of a per-city deliverer speed ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelivererMeanTime {
    pub city: String,
    pub delivery_person_id: String,
    pub mean_time_minutes: f64,
}

/// Which categorical column a rating breakdown groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBreakdown {
    TrafficDensity,
    WeatherCondition,
}

/// Mean and spread of ratings within one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRating {
    pub group: String,
    pub mean_rating: f64,
    pub rating_std_dev: f64,
}

/// Mean rating of a single deliverer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelivererRating {
    pub delivery_person_id: String,
    pub mean_rating: f64,
}

/// Headline scalars for the deliverers page. Each extreme is `None` when
/// no record carries a usable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetOverview {
    pub youngest_age: Option<i32>,
    pub oldest_age: Option<i32>,
    pub best_vehicle_condition: Option<i32>,
    pub worst_vehicle_condition: Option<i32>,
    pub distinct_deliverers: usize,
}

// ── Aggregations ──────────────────────────────────────────────────────────────

/// Mean delivery time per (city, deliverer), then within each city the
/// ten slowest or ten fastest deliverers by `direction`.
///
/// Cities are ordered ascending; within a city rows are ordered by mean
/// time (descending for [`RankDirection::Slowest`], ascending for
/// [`RankDirection::Fastest`]) with ties left in grouping order by the
/// stable sort. Cities with fewer than ten deliverers contribute all of
/// them.
pub fn top_deliverers_by_time(
    records: &[OrderRecord],
    direction: RankDirection,
) -> Vec<DelivererMeanTime> {
    let mut per_city: Vec<(String, Vec<DelivererMeanTime>)> = Vec::new();
    for ((city, deliverer), group) in group_in_order(records, |r| {
        (r.city.clone(), r.delivery_person_id.clone())
    }) {
        let times: Vec<f64> = group.iter().map(|r| r.time_taken_minutes as f64).collect();
        let mean_time = match stats::mean(&times) {
            Some(m) => stats::round2(m),
            None => continue,
        };
        let row = DelivererMeanTime {
            city: city.clone(),
            delivery_person_id: deliverer,
            mean_time_minutes: mean_time,
        };
        match per_city.iter_mut().find(|(c, _)| *c == city) {
            Some((_, rows)) => rows.push(row),
            None => per_city.push((city, vec![row])),
        }
    }

    per_city.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut ranking = Vec::new();
    for (_, mut rows) in per_city {
        match direction {
            RankDirection::Slowest => {
                rows.sort_by(|a, b| b.mean_time_minutes.total_cmp(&a.mean_time_minutes))
            }
            RankDirection::Fastest => {
                rows.sort_by(|a, b| a.mean_time_minutes.total_cmp(&b.mean_time_minutes))
            }
        }
        rows.truncate(RANKING_SIZE_PER_CITY);
        ranking.extend(rows);
    }
    ranking
}

/// Mean and population standard deviation of ratings, grouped by the
/// chosen categorical column, 2dp each. Groups with no usable ratings are
/// omitted.
pub fn ratings_by(records: &[OrderRecord], breakdown: RatingBreakdown) -> Vec<GroupRating> {
    let key_fn = |r: &OrderRecord| match breakdown {
        RatingBreakdown::TrafficDensity => r.road_traffic_density.clone(),
        RatingBreakdown::WeatherCondition => r.weather_condition.clone(),
    };

    group_in_order(records, key_fn)
        .into_iter()
        .filter_map(|(group, members)| {
            let ratings: Vec<f64> = members
                .iter()
                .filter_map(|r| r.delivery_person_rating)
                .collect();
            let mean = stats::mean(&ratings)?;
            let std_dev = stats::population_std_dev(&ratings)?;
            Some(GroupRating {
                group,
                mean_rating: stats::round2(mean),
                rating_std_dev: stats::round2(std_dev),
            })
        })
        .collect()
}

/// Mean rating per deliverer, 2dp, first-seen order. Deliverers whose
/// rows carry no usable rating are omitted.
pub fn mean_rating_by_deliverer(records: &[OrderRecord]) -> Vec<DelivererRating> {
    group_in_order(records, |r| r.delivery_person_id.clone())
        .into_iter()
        .filter_map(|(deliverer, members)| {
            let ratings: Vec<f64> = members
                .iter()
                .filter_map(|r| r.delivery_person_rating)
                .collect();
            stats::mean(&ratings).map(|mean| DelivererRating {
                delivery_person_id: deliverer,
                mean_rating: stats::round2(mean),
            })
        })
        .collect()
}

/// Headline scalars: age extremes, vehicle-condition extremes, and the
/// distinct deliverer count.
pub fn fleet_overview(records: &[OrderRecord]) -> FleetOverview {
    let ages = records.iter().filter_map(|r| r.delivery_person_age);
    let conditions = records.iter().map(|r| r.vehicle_condition);
    let deliverers: HashSet<&str> = records
        .iter()
        .map(|r| r.delivery_person_id.as_str())
        .collect();

    FleetOverview {
        youngest_age: ages.clone().min(),
        oldest_age: ages.max(),
        best_vehicle_condition: conditions.clone().max(),
        worst_vehicle_condition: conditions.min(),
        distinct_deliverers: deliverers.len(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
