//! Type-safe enumerations for certificate metadata.
//!
//! Categories, lifecycle statuses and file formats form closed sets in the
//! registry; these enums give them compile-time names while `as_str` /
//! `FromStr` bridge to the display strings the registry uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Certificate category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateKind {
    Bonafide,
    Transfer,
    CourseCompletion,
    Merit,
    Participation,
}

impl CertificateKind {
    /// All categories, in display order.
    pub const ALL: [CertificateKind; 5] = [
        CertificateKind::Bonafide,
        CertificateKind::Transfer,
        CertificateKind::CourseCompletion,
        CertificateKind::Merit,
        CertificateKind::Participation,
    ];

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateKind::Bonafide => "Bonafide",
            CertificateKind::Transfer => "Transfer",
            CertificateKind::CourseCompletion => "Course Completion",
            CertificateKind::Merit => "Merit",
            CertificateKind::Participation => "Participation",
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificateKind {
    type Err = ModelError;

    /// Parse a category name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "BONAFIDE" => Ok(CertificateKind::Bonafide),
            "TRANSFER" => Ok(CertificateKind::Transfer),
            "COURSE COMPLETION" => Ok(CertificateKind::CourseCompletion),
            "MERIT" => Ok(CertificateKind::Merit),
            "PARTICIPATION" => Ok(CertificateKind::Participation),
            _ => Err(ModelError::UnknownCertificateKind(s.to_string())),
        }
    }
}

/// Certificate lifecycle status.
///
/// Only `Issued` certificates may be downloaded; `Pending` and `Rejected`
/// entries exist for browsing and audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateStatus {
    Issued,
    Pending,
    Rejected,
}

impl CertificateStatus {
    /// All statuses, in display order.
    pub const ALL: [CertificateStatus; 3] = [
        CertificateStatus::Issued,
        CertificateStatus::Pending,
        CertificateStatus::Rejected,
    ];

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Issued => "Issued",
            CertificateStatus::Pending => "Pending",
            CertificateStatus::Rejected => "Rejected",
        }
    }

    /// Returns true if the certificate document may be downloaded.
    pub fn is_issued(&self) -> bool {
        matches!(self, CertificateStatus::Issued)
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificateStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ISSUED" => Ok(CertificateStatus::Issued),
            "PENDING" => Ok(CertificateStatus::Pending),
            "REJECTED" => Ok(CertificateStatus::Rejected),
            _ => Err(ModelError::UnknownCertificateStatus(s.to_string())),
        }
    }
}

/// Stored document format for a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    Pdf,
    Jpg,
    Png,
}

impl FileFormat {
    /// All formats, in display order.
    pub const ALL: [FileFormat; 3] = [FileFormat::Pdf, FileFormat::Jpg, FileFormat::Png];

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "PDF",
            FileFormat::Jpg => "JPG",
            FileFormat::Png => "PNG",
        }
    }

    /// Returns the lowercase file extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Jpg => "jpg",
            FileFormat::Png => "png",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "PDF" => Ok(FileFormat::Pdf),
            "JPG" | "JPEG" => Ok(FileFormat::Jpg),
            "PNG" => Ok(FileFormat::Png),
            _ => Err(ModelError::UnknownFileFormat(s.to_string())),
        }
    }
}
