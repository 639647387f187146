use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Fact sheet type tag carried by every capability record
pub const BUSINESS_CAPABILITY_TYPE: &str = "BusinessCapability";

/// Business capability node of the capability hierarchy
///
/// The aggregated application count is derived from the related application
/// set and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    id: String,
    display_name: String,
    level: u32,
    parent_id: Option<String>,
    children: Vec<String>,
    related_application_ids: BTreeSet<String>,
}

impl Capability {
    pub fn new(
        id: String,
        display_name: String,
        level: u32,
        parent_id: Option<String>,
        related_application_ids: BTreeSet<String>,
    ) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(ReportError::Validation {
                message: "Capability id cannot be empty".to_string(),
            }
            .into());
        }

        if level == 0 {
            return Err(ReportError::Validation {
                message: format!("Capability {} has level 0; levels start at 1", id),
            }
            .into());
        }

        Ok(Self {
            id,
            display_name,
            level,
            parent_id,
            children: Vec::new(),
            related_application_ids,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fact_sheet_type(&self) -> &'static str {
        BUSINESS_CAPABILITY_TYPE
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn related_application_ids(&self) -> &BTreeSet<String> {
        &self.related_application_ids
    }

    pub fn aggregated_application_count(&self) -> usize {
        self.related_application_ids.len()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub(crate) fn absorb_applications<'a, I>(&mut self, application_ids: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.related_application_ids
            .extend(application_ids.into_iter().cloned());
    }

    pub(crate) fn add_child(&mut self, child_id: &str) {
        if !self.children.iter().any(|c| c == child_id) {
            self.children.push(child_id.to_string());
        }
    }
}
