//! Diesel table definitions for the SQLite backend.
//!
//! Route, weather and crew sequences are stored as JSON text columns;
//! timestamps are RFC 3339 text so the recorded local offset survives
//! storage.

diesel::table! {
    vessels (id) {
        id -> BigInt,
        name -> Text,
        vessel_type -> Text,
        sail_number -> Nullable<Text>,
        home_port -> Nullable<Text>,
    }
}

diesel::table! {
    trips (id) {
        id -> BigInt,
        vessel_id -> BigInt,
        name -> Text,
        checksum -> Text,
        start_time -> Text,
        end_time -> Nullable<Text>,
        route_json -> Text,
        weather_json -> Text,
        crew_json -> Text,
        notes -> Nullable<Text>,
    }
}

diesel::joinable!(trips -> vessels (vessel_id));
diesel::allow_tables_to_appear_in_same_query!(vessels, trips);
