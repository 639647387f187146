/// Network adapters for the host's GraphQL API
mod fact_sheet_response;
mod graphql_client;

pub(crate) use fact_sheet_response::GraphQlResponse;
pub use fact_sheet_response::ALL_BUSINESS_CAPABILITIES_QUERY;
pub use graphql_client::GraphQlCapabilityClient;
