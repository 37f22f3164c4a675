//! Company-view artifacts: order volume over time, traffic composition,
//! and delivery-hub map placement.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use delivery_core::models::OrderRecord;
use delivery_core::stats;
use serde::Serialize;

use super::group_in_order;

// ── Artifact types ────────────────────────────────────────────────────────────

/// One point of the orders-per-day bar series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOrders {
    pub order_date: NaiveDate,
    pub orders: u64,
}

/// One slice of the traffic-share pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficShare {
    pub road_traffic_density: String,
    pub orders: u64,
    /// Percentage of the filtered total, 2dp. Slices round independently,
    /// so the percentages need not sum to exactly 100.
    pub share_pct: f64,
}

/// One bubble of the city × traffic scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTrafficOrders {
    pub city: String,
    pub road_traffic_density: String,
    pub orders: u64,
}

/// One point of the weekly order-count line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyOrders {
    pub week_of_year: u32,
    pub orders: u64,
}

/// One point of the weekly orders-per-deliverer line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyOrdersPerDeliverer {
    pub week_of_year: u32,
    /// Orders divided by distinct deliverers that week, 2dp. `None` when
    /// the week has no distinct deliverers; reported as "no data", never
    /// as zero.
    pub orders_per_deliverer: Option<f64>,
}

/// One map marker: the median delivery location for a city × traffic pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryHub {
    pub city: String,
    pub road_traffic_density: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ── Aggregations ──────────────────────────────────────────────────────────────

/// Record count per distinct order date, chronological.
pub fn orders_per_day(records: &[OrderRecord]) -> Vec<DailyOrders> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.order_date).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(order_date, orders)| DailyOrders { order_date, orders })
        .collect()
}

/// Share of orders per road-traffic density, as a percentage of the
/// filtered total.
pub fn traffic_share(records: &[OrderRecord]) -> Vec<TrafficShare> {
    let total = records.len() as f64;
    group_in_order(records, |r| r.road_traffic_density.clone())
        .into_iter()
        .map(|(density, group)| {
            let orders = group.len() as u64;
            TrafficShare {
                road_traffic_density: density,
                orders,
                share_pct: stats::round2(orders as f64 / total * 100.0),
            }
        })
        .collect()
}

/// Order count per (city, traffic-density) pair, first-seen order.
pub fn traffic_by_city(records: &[OrderRecord]) -> Vec<CityTrafficOrders> {
    group_in_order(records, |r| {
        (r.city.clone(), r.road_traffic_density.clone())
    })
    .into_iter()
    .map(|((city, density), group)| CityTrafficOrders {
        city,
        road_traffic_density: density,
        orders: group.len() as u64,
    })
    .collect()
}

/// Record count per week of the year, ascending weeks.
pub fn orders_by_week(records: &[OrderRecord]) -> Vec<WeeklyOrders> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.week_of_year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(week_of_year, orders)| WeeklyOrders {
            week_of_year,
            orders,
        })
        .collect()
}

/// Orders per distinct deliverer per week: two groupings on the same key,
/// joined on the week number, ascending weeks.
pub fn orders_per_deliverer_by_week(records: &[OrderRecord]) -> Vec<WeeklyOrdersPerDeliverer> {
    let mut weeks: BTreeMap<u32, (u64, HashSet<&str>)> = BTreeMap::new();
    for record in records {
        let entry = weeks.entry(record.week_of_year).or_default();
        entry.0 += 1;
        entry.1.insert(record.delivery_person_id.as_str());
    }

    weeks
        .into_iter()
        .map(|(week_of_year, (orders, deliverers))| {
            let ratio = if deliverers.is_empty() {
                None
            } else {
                Some(stats::round2(orders as f64 / deliverers.len() as f64))
            };
            WeeklyOrdersPerDeliverer {
                week_of_year,
                orders_per_deliverer: ratio,
            }
        })
        .collect()
}

/// Median delivery location per (city, traffic-density) pair, for map
/// marker placement. Coordinates are left unrounded.
pub fn median_delivery_location_by_city_traffic(records: &[OrderRecord]) -> Vec<DeliveryHub> {
    group_in_order(records, |r| {
        (r.city.clone(), r.road_traffic_density.clone())
    })
    .into_iter()
    .filter_map(|((city, density), group)| {
        let lats: Vec<f64> = group.iter().map(|r| r.delivery_location_latitude).collect();
        let lons: Vec<f64> = group
            .iter()
            .map(|r| r.delivery_location_longitude)
            .collect();
        match (stats::median(&lats), stats::median(&lons)) {
            (Some(latitude), Some(longitude)) => Some(DeliveryHub {
                city,
                road_traffic_density: density,
                latitude,
                longitude,
            }),
            _ => None,
        }
    })
    .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
