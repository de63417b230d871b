use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// Message fit for a toast: the API's own error text when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::InvalidRequest(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Form input rejected before anything is sent.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Title and content are required")]
    TitleAndContentRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please login to comment with your username or choose anonymous")]
    LoginRequiredForNamedComment,

    #[error("Invalid file type. Only JPG, PNG, GIF, and WebP are allowed")]
    UnsupportedImageType,

    #[error("File size too large. Maximum 5MB allowed")]
    ImageTooLarge,
}
