use thiserror::Error;

/// Everything that aborts a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to fetch `{path}`")]
    Fetch {
        path: &'static str,

        #[source]
        source: FetchError,
    },

    #[error("station index {index} is out of range for {n_stations} station(s)")]
    InvalidStationIndex { index: i64, n_stations: usize },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("failed to render the report")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] ureq::Error),

    #[error("the controller rejected the password")]
    Unauthorized,

    #[error("the controller responded with result code {0}")]
    Controller(i64),
}

impl ReportError {
    pub(crate) fn render(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Render(source.into())
    }
}
