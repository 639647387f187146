mod aggregation_mode;

pub use aggregation_mode::AggregationMode;
