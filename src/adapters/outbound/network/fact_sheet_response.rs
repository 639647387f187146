//! Wire types of the `allFactSheets` capability query
//!
//! Shared by the HTTP client and the recorded-pages reader so both map
//! payloads to domain records the same way.

use crate::capability_report::domain::{Capability, BUSINESS_CAPABILITY_TYPE};
use crate::ports::outbound::CapabilityPage;
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Query for one page of business capabilities with their parent and
/// application relations
pub const ALL_BUSINESS_CAPABILITIES_QUERY: &str = r#"query AllBusinessCapabilities($first: Int, $after: String) {
  allFactSheets(factSheetType: BusinessCapability, first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    edges {
      node {
        id
        type
        displayName
        ... on BusinessCapability {
          level
          relToParent {
            edges {
              node {
                factSheet {
                  id
                }
              }
            }
          }
          relBusinessCapabilityToApplication {
            edges {
              node {
                factSheet {
                  id
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    data: Option<AllFactSheetsData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllFactSheetsData {
    all_fact_sheets: FactSheetConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FactSheetConnection {
    page_info: PageInfo,
    #[serde(default)]
    edges: Vec<FactSheetEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    #[serde(default)]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FactSheetEdge {
    node: FactSheetNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FactSheetNode {
    id: String,
    #[serde(rename = "type")]
    fact_sheet_type: String,
    display_name: String,
    level: u32,
    #[serde(default)]
    rel_to_parent: Option<RelationConnection>,
    #[serde(default)]
    rel_business_capability_to_application: Option<RelationConnection>,
}

#[derive(Debug, Deserialize)]
struct RelationConnection {
    #[serde(default)]
    edges: Vec<RelationEdge>,
}

#[derive(Debug, Deserialize)]
struct RelationEdge {
    node: RelationNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationNode {
    fact_sheet: FactSheetRef,
}

#[derive(Debug, Deserialize)]
struct FactSheetRef {
    id: String,
}

impl GraphQlResponse {
    /// Converts a response into a capability page
    ///
    /// # Errors
    /// Returns `ReportError::Query` when the response carries GraphQL errors,
    /// has no data, or contains a fact sheet of another type.
    pub(crate) fn into_page(self) -> Result<CapabilityPage> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ReportError::Query {
                details: messages.join("; "),
            }
            .into());
        }

        let connection = self
            .data
            .ok_or_else(|| ReportError::Query {
                details: "response contains neither data nor errors".to_string(),
            })?
            .all_fact_sheets;

        let records = connection
            .edges
            .into_iter()
            .map(|edge| edge.node.into_capability())
            .collect::<Result<Vec<_>>>()?;

        Ok(CapabilityPage {
            records,
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
        })
    }
}

impl FactSheetNode {
    fn into_capability(self) -> Result<Capability> {
        if self.fact_sheet_type != BUSINESS_CAPABILITY_TYPE {
            return Err(ReportError::Query {
                details: format!(
                    "fact sheet {} has type {}, expected {}",
                    self.id, self.fact_sheet_type, BUSINESS_CAPABILITY_TYPE
                ),
            }
            .into());
        }

        let parent_id = self
            .rel_to_parent
            .and_then(|rel| rel.edges.into_iter().next())
            .map(|edge| edge.node.fact_sheet.id);

        let related_application_ids: BTreeSet<String> = self
            .rel_business_capability_to_application
            .map(|rel| {
                rel.edges
                    .into_iter()
                    .map(|edge| edge.node.fact_sheet.id)
                    .collect()
            })
            .unwrap_or_default();

        Capability::new(
            self.id,
            self.display_name,
            self.level,
            parent_id,
            related_application_ids,
        )
    }
}

/// Parses a raw GraphQL response body into a capability page
pub(crate) fn parse_page(body: &str) -> Result<CapabilityPage> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| ReportError::Query {
            details: format!("malformed response: {}", e),
        })?;
    response.into_page()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_maps_relations() {
        let body = r#"{
          "data": {
            "allFactSheets": {
              "pageInfo": { "hasNextPage": true, "endCursor": "c1" },
              "edges": [
                {
                  "node": {
                    "id": "bc-2",
                    "type": "BusinessCapability",
                    "displayName": "Order Handling",
                    "level": 2,
                    "relToParent": {
                      "edges": [
                        { "node": { "factSheet": { "id": "bc-1" } } },
                        { "node": { "factSheet": { "id": "bc-9" } } }
                      ]
                    },
                    "relBusinessCapabilityToApplication": {
                      "edges": [
                        { "node": { "factSheet": { "id": "app-1" } } },
                        { "node": { "factSheet": { "id": "app-2" } } },
                        { "node": { "factSheet": { "id": "app-1" } } }
                      ]
                    }
                  }
                }
              ]
            }
          }
        }"#;

        let page = parse_page(body).unwrap();

        assert!(page.has_next_page);
        assert_eq!(page.end_cursor.as_deref(), Some("c1"));
        assert_eq!(page.records.len(), 1);
        let capability = &page.records[0];
        assert_eq!(capability.id(), "bc-2");
        assert_eq!(capability.display_name(), "Order Handling");
        assert_eq!(capability.level(), 2);
        assert_eq!(capability.parent_id(), Some("bc-1"));
        assert_eq!(capability.aggregated_application_count(), 2);
    }

    #[test]
    fn test_parse_page_missing_relations() {
        let body = r#"{
          "data": {
            "allFactSheets": {
              "pageInfo": { "hasNextPage": false, "endCursor": null },
              "edges": [
                { "node": { "id": "bc-1", "type": "BusinessCapability", "displayName": "Sales", "level": 1 } },
                { "node": { "id": "bc-3", "type": "BusinessCapability", "displayName": "HR", "level": 1,
                            "relToParent": { "edges": [] }, "relBusinessCapabilityToApplication": null } }
              ]
            }
          }
        }"#;

        let page = parse_page(body).unwrap();

        assert!(!page.has_next_page);
        assert!(page.end_cursor.is_none());
        assert!(page.records.iter().all(|c| c.is_root()));
        assert!(page
            .records
            .iter()
            .all(|c| c.related_application_ids().is_empty()));
    }

    #[test]
    fn test_parse_page_graphql_errors() {
        let body = r#"{ "data": null, "errors": [ { "message": "Unauthorized" }, { "message": "Try again" } ] }"#;

        let err = parse_page(body).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Query { details }) if details == "Unauthorized; Try again"
        ));
    }

    #[test]
    fn test_parse_page_wrong_type() {
        let body = r#"{
          "data": { "allFactSheets": {
            "pageInfo": { "hasNextPage": false },
            "edges": [ { "node": { "id": "app-1", "type": "Application", "displayName": "CRM", "level": 1 } } ]
          } }
        }"#;

        let err = parse_page(body).unwrap_err();
        assert!(err.to_string().contains("expected BusinessCapability"));
    }

    #[test]
    fn test_parse_page_rejects_level_zero_record() {
        let body = r#"{
          "data": { "allFactSheets": {
            "pageInfo": { "hasNextPage": false },
            "edges": [
              { "node": { "id": "bc-1", "type": "BusinessCapability", "displayName": "Sales", "level": 1 } },
              { "node": { "id": "bc-0", "type": "BusinessCapability", "displayName": "Broken", "level": 0 } }
            ]
          } }
        }"#;

        let err = parse_page(body).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Validation { message }) if message.contains("bc-0")
        ));
    }

    #[test]
    fn test_parse_page_malformed() {
        let err = parse_page("not json").unwrap_err();
        assert!(err.to_string().contains("malformed response"));
    }
}
