use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the delivery order export, exactly as it appears in the CSV.
///
/// Header names follow the upstream export verbatim. Most columns arrive as
/// free text and are repaired by the normalizer; the coordinate and
/// vehicle-condition columns are reliably numeric in the source and are
/// deserialized directly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Delivery_person_ID")]
    pub delivery_person_id: String,
    /// Free text; may carry the missing sentinel or stray whitespace.
    #[serde(rename = "Delivery_person_Age")]
    pub delivery_person_age: String,
    #[serde(rename = "Delivery_person_Ratings")]
    pub delivery_person_rating: String,
    #[serde(rename = "Restaurant_latitude")]
    pub restaurant_latitude: f64,
    #[serde(rename = "Restaurant_longitude")]
    pub restaurant_longitude: f64,
    #[serde(rename = "Delivery_location_latitude")]
    pub delivery_location_latitude: f64,
    #[serde(rename = "Delivery_location_longitude")]
    pub delivery_location_longitude: f64,
    /// `DD-MM-YYYY`, guaranteed well-formed by the upstream contract.
    #[serde(rename = "Order_Date")]
    pub order_date: String,
    /// Descriptive prefix plus the actual condition, e.g. "conditions Fog".
    #[serde(rename = "Weatherconditions")]
    pub weather_condition: String,
    #[serde(rename = "Road_traffic_density")]
    pub road_traffic_density: String,
    #[serde(rename = "Vehicle_condition")]
    pub vehicle_condition: i32,
    #[serde(rename = "Type_of_order")]
    pub type_of_order: String,
    #[serde(rename = "Type_of_vehicle")]
    pub type_of_vehicle: String,
    #[serde(rename = "multiple_deliveries")]
    pub multiple_deliveries: String,
    #[serde(rename = "Festival")]
    pub festival: String,
    #[serde(rename = "City")]
    pub city: String,
    /// Unit label plus the numeral, e.g. "(min) 24".
    #[serde(rename = "Time_taken(min)")]
    pub time_taken: String,
}

/// A fully normalized order record.
///
/// Produced once per pipeline run by the normalizer and treated as
/// immutable afterwards; filtered views clone, they never mutate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub id: String,
    pub delivery_person_id: String,
    /// `None` when the raw value failed numeric coercion.
    pub delivery_person_age: Option<i32>,
    /// `None` when the raw value failed numeric coercion.
    pub delivery_person_rating: Option<f64>,
    pub restaurant_latitude: f64,
    pub restaurant_longitude: f64,
    pub delivery_location_latitude: f64,
    pub delivery_location_longitude: f64,
    pub order_date: NaiveDate,
    /// Derived from `order_date` (Sunday-start week numbering, 0–53).
    /// Never set independently of the date.
    pub week_of_year: u32,
    /// Last whitespace-separated token of the raw field ("Fog", "Sunny", …).
    pub weather_condition: String,
    /// One of "Low", "Medium", "High", "Jam".
    pub road_traffic_density: String,
    pub vehicle_condition: i32,
    pub type_of_order: String,
    pub type_of_vehicle: String,
    /// `None` when the raw value failed numeric coercion.
    pub multiple_deliveries: Option<i32>,
    /// "Yes" or "No".
    pub festival: String,
    pub city: String,
    pub time_taken_minutes: u32,
}
