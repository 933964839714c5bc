use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A certificate identifier in the canonical `CERT-<year>-<seq>` form.
///
/// The year buckets issuance batches and the four-digit sequence numbers
/// certificates within a bucket, so the string form sorts in issuance order.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CertificateId(String);

impl CertificateId {
    /// Build an identifier from an explicit year bucket and sequence number.
    pub fn new(year: u16, seq: u16) -> Result<Self, ModelError> {
        if !(1000..=9999).contains(&year) || seq > 9999 {
            return Err(ModelError::InvalidCertificateId(format!(
                "CERT-{year}-{seq}"
            )));
        }
        Ok(Self(format!("CERT-{year}-{seq:04}")))
    }

    /// Highest index [`CertificateId::from_index`] accepts; beyond it the
    /// year bucket would need a fifth digit and the id could no longer
    /// round-trip through parsing.
    pub const MAX_INDEX: usize = 797_999;

    /// Build the identifier for the `index`-th record of a generated
    /// collection: one hundred certificates per year bucket starting at 2020.
    ///
    /// # Panics
    ///
    /// Panics when `index` exceeds [`CertificateId::MAX_INDEX`].
    pub fn from_index(index: usize) -> Self {
        assert!(
            index <= Self::MAX_INDEX,
            "certificate index {index} exceeds the last four-digit year bucket"
        );
        let year = 2020 + index / 100;
        let seq = index % 10_000;
        Self(format!("CERT-{year}-{seq:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CertificateId {
    type Err = ModelError;

    /// Parse an identifier string (case-insensitive on the `CERT` prefix).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidCertificateId(s.to_string());

        let mut parts = trimmed.splitn(3, '-');
        let prefix = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        let seq = parts.next().ok_or_else(invalid)?;

        if !prefix.eq_ignore_ascii_case("CERT")
            || year.len() != 4
            || !year.bytes().all(|b| b.is_ascii_digit())
            || seq.len() != 4
            || !seq.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        Ok(Self(format!("CERT-{year}-{seq}")))
    }
}
