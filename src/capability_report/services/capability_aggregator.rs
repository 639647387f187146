use crate::capability_report::domain::{Capability, CapabilityIndex};
use crate::capability_report::policies::AggregationMode;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::{BTreeSet, HashSet};

/// Pending union of one capability's direct applications into its ancestors
struct Contribution {
    child_id: String,
    parent_id: String,
    targets: Vec<String>,
    application_ids: BTreeSet<String>,
}

/// CapabilityAggregator service rolling application sets up the hierarchy
///
/// Pure domain logic: builds the index, checks every parent reference, then
/// unions each node's direct application set into its parent (or all of its
/// ancestors, depending on the mode). Contributions are planned from the
/// direct sets before anything is mutated, so the result does not depend on
/// record order and a failure leaves no node half-aggregated.
pub struct CapabilityAggregator;

impl CapabilityAggregator {
    /// Aggregates the fetched records into a capability index
    ///
    /// # Errors
    /// Returns `ReportError::MissingParent` when a parent id is not part of the
    /// record set, or `ReportError::ParentCycle` when parent links loop.
    pub fn aggregate(records: Vec<Capability>, mode: AggregationMode) -> Result<CapabilityIndex> {
        let mut index = CapabilityIndex::from_records(records);

        Self::validate_parents(&index)?;
        let contributions = Self::plan_contributions(&index, mode)?;

        for contribution in contributions {
            if let Some(parent) = index.get_mut(&contribution.parent_id) {
                parent.add_child(&contribution.child_id);
            }
            for target in &contribution.targets {
                if let Some(ancestor) = index.get_mut(target) {
                    ancestor.absorb_applications(&contribution.application_ids);
                }
            }
        }

        Ok(index)
    }

    /// Every parent must exist and no parent chain may loop, whatever the mode
    fn validate_parents(index: &CapabilityIndex) -> Result<()> {
        for capability in index.iter() {
            if let Some(parent_id) = capability.parent_id() {
                if !index.contains(parent_id) {
                    return Err(ReportError::MissingParent {
                        child_id: capability.id().to_string(),
                        parent_id: parent_id.to_string(),
                    }
                    .into());
                }
            }
        }

        for capability in index.iter().filter(|c| !c.is_root()) {
            Self::ancestors_of(capability, index)?;
        }
        Ok(())
    }

    fn plan_contributions(
        index: &CapabilityIndex,
        mode: AggregationMode,
    ) -> Result<Vec<Contribution>> {
        let mut contributions = Vec::new();

        for capability in index.iter() {
            let Some(parent_id) = capability.parent_id() else {
                continue;
            };

            let targets = match mode {
                AggregationMode::ImmediateParent => vec![parent_id.to_string()],
                AggregationMode::Transitive => Self::ancestors_of(capability, index)?,
            };

            contributions.push(Contribution {
                child_id: capability.id().to_string(),
                parent_id: parent_id.to_string(),
                targets,
                application_ids: capability.related_application_ids().clone(),
            });
        }

        Ok(contributions)
    }

    /// Collects the parent chain from the immediate parent up to the root
    fn ancestors_of(capability: &Capability, index: &CapabilityIndex) -> Result<Vec<String>> {
        let mut ancestors = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(capability.id());

        let mut current = capability.parent_id();
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(ReportError::ParentCycle { id: id.to_string() }.into());
            }
            ancestors.push(id.to_string());
            current = index.get(id).and_then(|c| c.parent_id());
        }

        Ok(ancestors)
    }
}
