pub mod conversions;
pub mod distribution;
pub mod landing;
pub mod statistics;
pub mod trips;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::statistics::GET_SAILING_STATS, "get_sailing_stats");
        assert_eq!(
            super::distribution::GET_DISTRIBUTION_DATA,
            "get_distribution_data"
        );
        assert_eq!(super::trips::GET_TRIP_SUMMARY, "get_trip_summary");
        assert_eq!(super::landing::LIST_VESSELS, "list_vessels");
        assert_eq!(super::landing::POST_VESSEL, "store_vessel");
        assert_eq!(super::landing::LIST_TRIPS, "list_trips");
        assert_eq!(super::conversions::CONVERT_UNITS, "convert_units");
    }
}
