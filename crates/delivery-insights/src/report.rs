//! Report-page assembly.
//!
//! Bundles the aggregation artifacts each dashboard page consumes into one
//! serializable struct. The pages mirror the three views of the dashboard:
//! company, deliverers, restaurants. Rendering (charts, maps, layout) is
//! the presentation layer's concern; these structs are its input.

use delivery_core::models::OrderRecord;
use delivery_data::aggregates::company::{
    self, CityTrafficOrders, DailyOrders, DeliveryHub, TrafficShare, WeeklyOrders,
    WeeklyOrdersPerDeliverer,
};
use delivery_data::aggregates::deliverers::{
    self, DelivererMeanTime, DelivererRating, FleetOverview, GroupRating, RankDirection,
    RatingBreakdown,
};
use delivery_data::aggregates::restaurants::{
    self, CityMeanDistance, CityTimeStats, CityTrafficTimeStats, RestaurantDistance,
    TimeStatistic,
};
use serde::Serialize;

// ── Company view ──────────────────────────────────────────────────────────────

/// Artifacts of the company page: order volume over time, traffic
/// composition, and map markers.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport {
    pub orders_per_day: Vec<DailyOrders>,
    pub traffic_share: Vec<TrafficShare>,
    pub traffic_by_city: Vec<CityTrafficOrders>,
    pub orders_by_week: Vec<WeeklyOrders>,
    pub orders_per_deliverer_by_week: Vec<WeeklyOrdersPerDeliverer>,
    pub delivery_hubs: Vec<DeliveryHub>,
}

impl CompanyReport {
    pub fn build(records: &[OrderRecord]) -> Self {
        Self {
            orders_per_day: company::orders_per_day(records),
            traffic_share: company::traffic_share(records),
            traffic_by_city: company::traffic_by_city(records),
            orders_by_week: company::orders_by_week(records),
            orders_per_deliverer_by_week: company::orders_per_deliverer_by_week(records),
            delivery_hubs: company::median_delivery_location_by_city_traffic(records),
        }
    }

    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Orders by day: {} dates\n",
            self.orders_per_day.len()
        ));
        for share in &self.traffic_share {
            out.push_str(&format!(
                "Traffic {}: {} orders ({}%)\n",
                share.road_traffic_density, share.orders, share.share_pct
            ));
        }
        out.push_str(&format!(
            "Weekly series: {} weeks, {} delivery hubs mapped\n",
            self.orders_by_week.len(),
            self.delivery_hubs.len()
        ));
        out
    }
}

// ── Deliverers view ───────────────────────────────────────────────────────────

/// Artifacts of the deliverers page: fleet scalars, rating breakdowns,
/// and speed rankings.
#[derive(Debug, Clone, Serialize)]
pub struct DeliverersReport {
    pub fleet_overview: FleetOverview,
    pub mean_rating_by_deliverer: Vec<DelivererRating>,
    pub ratings_by_traffic: Vec<GroupRating>,
    pub ratings_by_weather: Vec<GroupRating>,
    pub fastest_deliverers: Vec<DelivererMeanTime>,
    pub slowest_deliverers: Vec<DelivererMeanTime>,
}

impl DeliverersReport {
    pub fn build(records: &[OrderRecord]) -> Self {
        Self {
            fleet_overview: deliverers::fleet_overview(records),
            mean_rating_by_deliverer: deliverers::mean_rating_by_deliverer(records),
            ratings_by_traffic: deliverers::ratings_by(records, RatingBreakdown::TrafficDensity),
            ratings_by_weather: deliverers::ratings_by(records, RatingBreakdown::WeatherCondition),
            fastest_deliverers: deliverers::top_deliverers_by_time(records, RankDirection::Fastest),
            slowest_deliverers: deliverers::top_deliverers_by_time(records, RankDirection::Slowest),
        }
    }

    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        let overview = &self.fleet_overview;
        out.push_str(&format!(
            "Deliverers: {} distinct, ages {:?}–{:?}, vehicle condition {:?}–{:?}\n",
            overview.distinct_deliverers,
            overview.youngest_age,
            overview.oldest_age,
            overview.worst_vehicle_condition,
            overview.best_vehicle_condition
        ));
        out.push_str(&format!(
            "Rated deliverers: {}; rating groups: {} by traffic, {} by weather\n",
            self.mean_rating_by_deliverer.len(),
            self.ratings_by_traffic.len(),
            self.ratings_by_weather.len()
        ));
        if let Some(fastest) = self.fastest_deliverers.first() {
            out.push_str(&format!(
                "Fastest: {} ({} min mean)\n",
                fastest.delivery_person_id, fastest.mean_time_minutes
            ));
        }
        if let Some(slowest) = self.slowest_deliverers.first() {
            out.push_str(&format!(
                "Slowest: {} ({} min mean)\n",
                slowest.delivery_person_id, slowest.mean_time_minutes
            ));
        }
        out
    }
}

// ── Restaurants view ──────────────────────────────────────────────────────────

/// Artifacts of the restaurants page: distance and delivery-time
/// statistics, with and without festivals.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantsReport {
    pub distinct_deliverers: usize,
    pub mean_delivery_distance_km: Option<f64>,
    pub festival_mean_time: Option<f64>,
    pub festival_time_std_dev: Option<f64>,
    pub non_festival_mean_time: Option<f64>,
    pub non_festival_time_std_dev: Option<f64>,
    pub avg_time_by_city: Vec<CityTimeStats>,
    pub avg_distance_by_restaurant: Vec<RestaurantDistance>,
    pub distance_share_by_city: Vec<CityMeanDistance>,
    pub time_by_city_and_traffic: Vec<CityTrafficTimeStats>,
}

impl RestaurantsReport {
    pub fn build(records: &[OrderRecord]) -> Self {
        Self {
            distinct_deliverers: deliverers::fleet_overview(records).distinct_deliverers,
            mean_delivery_distance_km: restaurants::mean_delivery_distance_km(records),
            festival_mean_time: restaurants::avg_time_by_festival(
                records,
                TimeStatistic::Mean,
                "Yes",
            ),
            festival_time_std_dev: restaurants::avg_time_by_festival(
                records,
                TimeStatistic::StdDev,
                "Yes",
            ),
            non_festival_mean_time: restaurants::avg_time_by_festival(
                records,
                TimeStatistic::Mean,
                "No",
            ),
            non_festival_time_std_dev: restaurants::avg_time_by_festival(
                records,
                TimeStatistic::StdDev,
                "No",
            ),
            avg_time_by_city: restaurants::avg_time_by_city(records),
            avg_distance_by_restaurant: restaurants::avg_distance_by_restaurant(records),
            distance_share_by_city: restaurants::distance_share_by_city(records),
            time_by_city_and_traffic: restaurants::time_by_city_and_traffic(records),
        }
    }

    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Distinct deliverers: {}\n",
            self.distinct_deliverers
        ));
        match self.mean_delivery_distance_km {
            Some(km) => out.push_str(&format!("Mean delivery distance: {km} km\n")),
            None => out.push_str("Mean delivery distance: no data\n"),
        }
        match (self.festival_mean_time, self.festival_time_std_dev) {
            (Some(mean), Some(std)) => out.push_str(&format!(
                "Festival deliveries: {mean} min mean, {std} min std\n"
            )),
            _ => out.push_str("Festival deliveries: no data\n"),
        }
        out.push_str(&format!(
            "Cities: {}, restaurants: {}\n",
            self.avg_time_by_city.len(),
            self.avg_distance_by_restaurant.len()
        ));
        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
