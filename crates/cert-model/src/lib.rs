//! Data model for the certificate registry.
//!
//! Everything the search surface operates on lives here: the immutable
//! [`Certificate`] record, the closed-set enums for category, status and
//! file format, and the validated identifier and date newtypes.

pub mod enums;
pub mod error;
pub mod ids;
pub mod record;

pub use enums::{CertificateKind, CertificateStatus, FileFormat};
pub use error::{ModelError, Result};
pub use ids::CertificateId;
pub use record::{Certificate, IssueDate};
