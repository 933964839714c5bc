use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid certificate id: {0}")]
    InvalidCertificateId(String),
    #[error("invalid issue date: {0}")]
    InvalidIssueDate(String),
    #[error("unknown certificate type: {0}")]
    UnknownCertificateKind(String),
    #[error("unknown certificate status: {0}")]
    UnknownCertificateStatus(String),
    #[error("unknown file format: {0}")]
    UnknownFileFormat(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
