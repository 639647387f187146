use super::Capability;
use std::collections::HashMap;

/// CapabilityIndex aggregate mapping capability ids to capabilities
///
/// Built once per fetch cycle. Keeps the order in which ids were first seen
/// so iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CapabilityIndex {
    entries: HashMap<String, Capability>,
    order: Vec<String>,
}

impl CapabilityIndex {
    /// Builds the index from records; the first occurrence of an id wins
    pub fn from_records(records: Vec<Capability>) -> Self {
        let mut index = Self::default();
        for capability in records {
            if index.entries.contains_key(capability.id()) {
                continue;
            }
            index.order.push(capability.id().to_string());
            index.entries.insert(capability.id().to_string(), capability);
        }
        index
    }

    pub fn get(&self, id: &str) -> Option<&Capability> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Capability> {
        self.entries.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates capabilities in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Consumes the index, yielding capabilities in first-seen order
    pub fn into_capabilities(mut self) -> Vec<Capability> {
        self.order
            .iter()
            .filter_map(|id| self.entries.remove(id))
            .collect()
    }
}
