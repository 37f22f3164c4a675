//! Restaurants-view artifacts: delivery distances, festival impact, and
//! per-city / per-restaurant time statistics.

use delivery_core::geo;
use delivery_core::models::OrderRecord;
use delivery_core::stats;
use serde::Serialize;

use super::group_in_order;

// ── Artifact types ────────────────────────────────────────────────────────────

/// Which statistic a festival time query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStatistic {
    Mean,
    StdDev,
}

/// Mean and spread of delivery time within one city (error-bar chart:
/// value = mean, error = std).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTimeStats {
    pub city: String,
    pub mean_time_minutes: f64,
    pub time_std_dev: f64,
}

/// Mean delivery distance of one city (share/pie chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMeanDistance {
    pub city: String,
    pub mean_distance_km: f64,
}

/// One (city, traffic-density) node of the delivery-time hierarchy.
/// Values are unrounded; the chart scales its own color axis from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTrafficTimeStats {
    pub city: String,
    pub road_traffic_density: String,
    pub mean_time_minutes: f64,
    pub time_std_dev: f64,
}

/// Distance profile of one restaurant, identified by its coordinate hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDistance {
    pub restaurant_id: u64,
    pub mean_distance_km: f64,
    pub orders: u64,
    /// `None` when no order for this restaurant carries a usable rating.
    pub mean_rating: Option<f64>,
}

// ── Aggregations ──────────────────────────────────────────────────────────────

/// Restaurant-to-delivery haversine distance of a single record, in km.
fn record_distance_km(record: &OrderRecord) -> f64 {
    geo::haversine_km(
        (record.restaurant_latitude, record.restaurant_longitude),
        (
            record.delivery_location_latitude,
            record.delivery_location_longitude,
        ),
    )
}

/// Mean restaurant-to-delivery distance across the filtered set, 2dp.
/// `None` for an empty set.
pub fn mean_delivery_distance_km(records: &[OrderRecord]) -> Option<f64> {
    let distances: Vec<f64> = records.iter().map(record_distance_km).collect();
    stats::mean(&distances).map(stats::round2)
}

/// Mean or population std of delivery time over rows matching one
/// festival value, 2dp. `None` when no rows match: "no data", never 0.
pub fn avg_time_by_festival(
    records: &[OrderRecord],
    statistic: TimeStatistic,
    festival: &str,
) -> Option<f64> {
    let times: Vec<f64> = records
        .iter()
        .filter(|r| r.festival == festival)
        .map(|r| r.time_taken_minutes as f64)
        .collect();

    let value = match statistic {
        TimeStatistic::Mean => stats::mean(&times)?,
        TimeStatistic::StdDev => stats::population_std_dev(&times)?,
    };
    Some(stats::round2(value))
}

/// Mean and population std of delivery time per city, 2dp each,
/// first-seen order.
pub fn avg_time_by_city(records: &[OrderRecord]) -> Vec<CityTimeStats> {
    group_in_order(records, |r| r.city.clone())
        .into_iter()
        .filter_map(|(city, members)| {
            let times: Vec<f64> = members.iter().map(|r| r.time_taken_minutes as f64).collect();
            let mean = stats::mean(&times)?;
            let std_dev = stats::population_std_dev(&times)?;
            Some(CityTimeStats {
                city,
                mean_time_minutes: stats::round2(mean),
                time_std_dev: stats::round2(std_dev),
            })
        })
        .collect()
}

/// Mean delivery distance per city, 2dp, first-seen order.
pub fn distance_share_by_city(records: &[OrderRecord]) -> Vec<CityMeanDistance> {
    group_in_order(records, |r| r.city.clone())
        .into_iter()
        .filter_map(|(city, members)| {
            let distances: Vec<f64> = members.iter().copied().map(record_distance_km).collect();
            stats::mean(&distances).map(|mean| CityMeanDistance {
                city,
                mean_distance_km: stats::round2(mean),
            })
        })
        .collect()
}

/// Mean and population std of delivery time per (city, traffic-density)
/// pair, unrounded, first-seen order.
pub fn time_by_city_and_traffic(records: &[OrderRecord]) -> Vec<CityTrafficTimeStats> {
    group_in_order(records, |r| {
        (r.city.clone(), r.road_traffic_density.clone())
    })
    .into_iter()
    .filter_map(|((city, density), members)| {
        let times: Vec<f64> = members.iter().map(|r| r.time_taken_minutes as f64).collect();
        let mean = stats::mean(&times)?;
        let std_dev = stats::population_std_dev(&times)?;
        Some(CityTrafficTimeStats {
            city,
            road_traffic_density: density,
            mean_time_minutes: mean,
            time_std_dev: std_dev,
        })
    })
    .collect()
}

/// Per-restaurant distance profile, ascending by mean distance.
///
/// Restaurants are identified by a proxy id, a stable FNV-1a hash of the
/// coordinate pair rounded to six decimal places, so two restaurants at
/// identical coordinates are indistinguishable.
pub fn avg_distance_by_restaurant(records: &[OrderRecord]) -> Vec<RestaurantDistance> {
    let mut profiles: Vec<RestaurantDistance> = group_in_order(records, |r| {
        restaurant_id(r.restaurant_latitude, r.restaurant_longitude)
    })
    .into_iter()
    .filter_map(|(id, members)| {
        let distances: Vec<f64> = members.iter().copied().map(record_distance_km).collect();
        let ratings: Vec<f64> = members
            .iter()
            .filter_map(|r| r.delivery_person_rating)
            .collect();
        stats::mean(&distances).map(|mean_distance| RestaurantDistance {
            restaurant_id: id,
            mean_distance_km: mean_distance,
            orders: members.len() as u64,
            mean_rating: stats::mean(&ratings),
        })
    })
    .collect();

    profiles.sort_by(|a, b| a.mean_distance_km.total_cmp(&b.mean_distance_km));
    profiles
}

/// Stable proxy identity for a restaurant coordinate pair.
pub fn restaurant_id(latitude: f64, longitude: f64) -> u64 {
    fnv1a_64(format!("{latitude:.6},{longitude:.6}").as_bytes())
}

/// 64-bit FNV-1a.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

// ── Tests ─────────────────────────────────────────────────────────────────────
