use crate::capability_report::domain::{Capability, CapabilityIndex};
use std::cmp::Ordering;

/// Level selected for the chart
const TOP_LEVEL: u32 = 1;

/// CapabilityRanker service selecting and ordering top-level capabilities
pub struct CapabilityRanker;

impl CapabilityRanker {
    /// Keeps level 1 capabilities and sorts them by aggregated count, highest
    /// first. Equal counts fall back to display name in ascending ordinal order.
    pub fn rank_top_level(index: CapabilityIndex) -> Vec<Capability> {
        let mut top_level: Vec<Capability> = index
            .into_capabilities()
            .into_iter()
            .filter(|c| c.level() == TOP_LEVEL)
            .collect();

        top_level.sort_by(Self::compare);
        top_level
    }

    pub fn compare(a: &Capability, b: &Capability) -> Ordering {
        b.aggregated_application_count()
            .cmp(&a.aggregated_application_count())
            .then_with(|| a.display_name().cmp(b.display_name()))
    }
}
