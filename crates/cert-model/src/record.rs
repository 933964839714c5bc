use std::fmt;

use chrono::NaiveDate;

use crate::{CertificateId, CertificateKind, CertificateStatus, FileFormat, ModelError};

/// An ISO-8601 calendar date (`YYYY-MM-DD`) stored as its string form.
///
/// Byte order on the canonical form coincides with chronological order, so
/// dates compare and sort as plain strings throughout the engine.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IssueDate(String);

impl IssueDate {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidIssueDate(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a date from calendar components, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ModelError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ModelError::InvalidIssueDate(format!("{year}-{month:02}-{day:02}")))?;
        Ok(Self(date.format("%Y-%m-%d").to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for IssueDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One certificate entry in the registry.
///
/// Records are immutable once generated; every field the search surface
/// filters or sorts on lives here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Certificate {
    pub id: CertificateId,
    pub holder_name: String,
    pub kind: CertificateKind,
    pub department: String,
    pub issue_date: IssueDate,
    pub status: CertificateStatus,
    pub format: FileFormat,
}

impl Certificate {
    /// The file name a download of this certificate would produce.
    pub fn download_file_name(&self) -> String {
        format!("{}.{}", self.id, self.format.extension())
    }
}
