use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcPickError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid index: {token}")]
    NotAnIndex { token: String },

    #[error("Invalid index: {token} (choose between 1 and {max})")]
    IndexOutOfRange { token: String, max: usize },

    #[error("Destination is not an existing directory: {path}")]
    DestinationUnavailable { path: String },

    #[error("Failed to launch {program}: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ToolFailed { program: String, status: String },

    #[error("Unsupported format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Console input was closed")]
    InputClosed,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ArcPickError {
    fn user_message(&self) -> String {
        match self {
            ArcPickError::InvalidPath { path } => {
                format!("Invalid directory: {}", path)
            }
            ArcPickError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            ArcPickError::DestinationUnavailable { path } => {
                format!("Extraction cancelled, destination unavailable: {}", path)
            }
            ArcPickError::ToolLaunch { program, .. } => {
                format!("Could not run {}", program)
            }
            ArcPickError::InputClosed => "No more input, stopping".to_string(),
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ArcPickError::InvalidPath { .. } => Some(
                "Pass an existing directory with --dir, or run from the folder that holds your archives.".to_string()
            ),
            ArcPickError::Config { .. } => Some(
                "Run with --help to see accepted values.".to_string()
            ),
            ArcPickError::ToolLaunch { program, .. } => Some(format!(
                "Install {} or point --unzip/--tar/--unrar at another program.",
                program
            )),
            ArcPickError::DestinationUnavailable { .. } => Some(
                "The archive's folder may have been moved or removed since the scan.".to_string()
            ),
            ArcPickError::NotAnIndex { .. } | ArcPickError::IndexOutOfRange { .. } => Some(
                "Enter numbers from the list separated by commas, e.g. 1,3,4".to_string()
            ),
            _ => None,
        }
    }
}

impl From<walkdir::Error> for ArcPickError {
    fn from(error: walkdir::Error) -> Self {
        let path = error
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        match error.into_io_error() {
            Some(io) => ArcPickError::Io(io),
            None => ArcPickError::InvalidPath {
                path: format!("filesystem loop at {}", path),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ArcPickError>;
