mod capability_aggregator;
mod capability_ranker;

pub use capability_aggregator::CapabilityAggregator;
pub use capability_ranker::CapabilityRanker;
