use thiserror::Error;

/// Renderer error type.
///
/// Fetch failures fall into two kinds (see [`ErrorKind`]): transport and parse.
/// Both are fatal to the page view; there is no retry.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read resume source: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Resume document is not a JSON object: {0}")]
    NotADocument(String),

    #[error("No resume data available")]
    NoData,

    #[error("Host page error: {0}")]
    HostPage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Parse,
    Render,
    HostPage,
}

impl FolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FolioError::Status { .. } | FolioError::Http(_) | FolioError::Io(_) => {
                ErrorKind::Transport
            }
            FolioError::Parse(_) | FolioError::NotADocument(_) => ErrorKind::Parse,
            FolioError::NoData => ErrorKind::Render,
            FolioError::HostPage(_) => ErrorKind::HostPage,
        }
    }
}
