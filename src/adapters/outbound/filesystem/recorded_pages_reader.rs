use crate::adapters::outbound::network::GraphQlResponse;
use crate::ports::outbound::{CapabilityPage, CapabilityPageSource};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum size of a recorded pages file (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordedResponses {
    Pages(Vec<GraphQlResponse>),
    Single(GraphQlResponse),
}

/// RecordedPagesReader adapter serving capability pages from a JSON file
///
/// The file holds recorded responses of the capability query, either a single
/// response object or an array of them in page order. Pages are looked up by
/// the cursor the previous page handed out, exactly as the live endpoint
/// would be queried.
#[derive(Debug)]
pub struct RecordedPagesReader {
    path: PathBuf,
    pages: Vec<CapabilityPage>,
}

impl RecordedPagesReader {
    /// Loads and validates every recorded page
    ///
    /// # Errors
    /// Returns an error if the file is missing, a symbolic link, too large,
    /// not valid JSON, or one of the recorded responses is a failed query.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::validate_file(path)?;

        let content = fs::read_to_string(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let responses: RecordedResponses =
            serde_json::from_str(&content).map_err(|e| ReportError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Invalid recorded GraphQL response: {}", e),
            })?;

        let responses = match responses {
            RecordedResponses::Pages(pages) => pages,
            RecordedResponses::Single(page) => vec![page],
        };

        if responses.is_empty() {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: "File contains no recorded pages".to_string(),
            }
            .into());
        }

        let pages = responses
            .into_iter()
            .map(GraphQlResponse::into_page)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            pages,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn validate_file(path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ReportError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            }
            .into());
        }

        Ok(())
    }

    fn position_after(&self, cursor: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.end_cursor.as_deref() == Some(cursor))
            .map(|i| i + 1)
    }
}

#[async_trait]
impl CapabilityPageSource for RecordedPagesReader {
    async fn fetch_page(&self, after: Option<&str>) -> Result<CapabilityPage> {
        let position = match after {
            None => Some(0),
            Some(cursor) => self.position_after(cursor),
        };

        position
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or_else(|| {
                ReportError::Query {
                    details: format!(
                        "no recorded page after cursor {} in {}",
                        after.unwrap_or("<start>"),
                        self.path.display()
                    ),
                }
                .into()
            })
    }
}
