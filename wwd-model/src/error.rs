/// Error types for the dashboard libraries
use thiserror::Error;

/// Main error type for loading and resolving dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// HTTP request failed or returned a non-success status
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A dataset could not be deserialized
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A dataset parsed but contained nothing usable
    #[error("Dataset is empty: {0}")]
    EmptyDataset(&'static str),

    /// A map click referenced a feature that does not exist
    #[error("No map feature at index {0}")]
    FeatureIndex(usize),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
