pub mod capability;
pub mod capability_index;

pub use capability::{Capability, BUSINESS_CAPABILITY_TYPE};
pub use capability_index::CapabilityIndex;
