//! Fleet/period aggregation of recorded trips into summary statistics.

use std::collections::HashMap;

use chrono::Timelike;

use crate::api::{MonthlyActivity, SailingStats, TimeOfDayActivity, WeatherSummary};
use crate::models::Trip;
use crate::services::trip_stats::compute_trip_stats;

/// Fold a collection of trips into aggregate statistics.
///
/// Single pass, in the order given. Totals do not depend on order; the
/// monthly buckets keep first-seen insertion order because calling screens
/// slice "last N months" positionally. Open trips contribute their distance
/// but zero duration. An empty slice yields the all-zero stats without any
/// division by zero.
pub fn aggregate_trips(trips: &[Trip]) -> SailingStats {
    let mut monthly: Vec<MonthlyActivity> = Vec::new();
    let mut month_index: HashMap<String, usize> = HashMap::new();
    let mut time_of_day = TimeOfDayActivity::default();

    let mut total_distance_nm = 0.0;
    let mut total_duration_minutes = 0.0;
    let mut max_speed_knots: f64 = 0.0;

    let mut wind_speed_sum = 0.0;
    let mut wind_direction_sum = 0.0;
    let mut temperature_sum = 0.0;
    let mut max_wind_speed_knots: f64 = 0.0;
    let mut observation_count = 0usize;

    for trip in trips {
        let stats = compute_trip_stats(trip);
        total_distance_nm += stats.distance_nm;
        total_duration_minutes += stats.duration_minutes;
        max_speed_knots = max_speed_knots.max(stats.max_speed_knots);

        let month_key = trip.start_time.format("%Y-%m").to_string();
        let bucket_idx = match month_index.get(&month_key) {
            Some(&idx) => idx,
            None => {
                monthly.push(MonthlyActivity {
                    month: month_key.clone(),
                    trip_count: 0,
                    distance_nm: 0.0,
                    duration_minutes: 0.0,
                });
                let idx = monthly.len() - 1;
                month_index.insert(month_key, idx);
                idx
            }
        };
        let bucket = &mut monthly[bucket_idx];
        bucket.trip_count += 1;
        bucket.distance_nm += stats.distance_nm;
        bucket.duration_minutes += stats.duration_minutes;

        match trip.start_time.hour() {
            6..=11 => time_of_day.morning += 1,
            12..=17 => time_of_day.afternoon += 1,
            18..=23 => time_of_day.evening += 1,
            _ => time_of_day.night += 1,
        }

        for observation in &trip.weather_log {
            observation_count += 1;
            wind_speed_sum += observation.wind_speed_knots;
            wind_direction_sum += observation.wind_direction_deg;
            temperature_sum += observation.temperature_c;
            max_wind_speed_knots = max_wind_speed_knots.max(observation.wind_speed_knots);
        }
    }

    let total_trips = trips.len();
    let average_trip_length_nm = if total_trips > 0 {
        total_distance_nm / total_trips as f64
    } else {
        0.0
    };
    let average_speed_knots = if total_duration_minutes > 0.0 {
        total_distance_nm / (total_duration_minutes / 60.0)
    } else {
        0.0
    };

    let weather = if observation_count > 0 {
        let n = observation_count as f64;
        WeatherSummary {
            observation_count,
            average_wind_speed_knots: wind_speed_sum / n,
            average_wind_direction_deg: wind_direction_sum / n,
            average_temperature_c: temperature_sum / n,
            max_wind_speed_knots,
        }
    } else {
        WeatherSummary::default()
    };

    SailingStats {
        total_trips,
        total_distance_nm,
        total_duration_minutes,
        average_speed_knots,
        average_trip_length_nm,
        max_speed_knots,
        monthly_activity: monthly,
        time_of_day,
        weather,
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod statistics_tests;
