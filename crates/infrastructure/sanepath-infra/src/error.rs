use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a directory: {0}")]
    NotADirectory(Utf8PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("path '{0}' can't be placed under the root")]
    UnsafePath(String),
    #[error("escape character {0:?} is not usable: {1}")]
    UnusableEscapeChar(char, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfraErrorKind {
    Io,
    NotADirectory,
    UnsafePath,
}

impl InfraError {
    pub fn kind(&self) -> InfraErrorKind {
        match self {
            InfraError::Io(_) | InfraError::Walk(_) => InfraErrorKind::Io,
            InfraError::NotADirectory(_) => InfraErrorKind::NotADirectory,
            InfraError::UnsafePath(_) | InfraError::UnusableEscapeChar(..) => {
                InfraErrorKind::UnsafePath
            }
        }
    }
}
