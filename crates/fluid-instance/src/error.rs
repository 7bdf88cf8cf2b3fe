use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("not a readable application bundle: {0}")]
    InvalidPath(PathBuf),

    #[error("URL patterns resource {path} is present but unreadable: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, InstanceError>;
