//! Filter state and the record predicate.
//!
//! All active conditions are AND-combined and applied in a fixed order:
//! free-text query, category, status, date-from, date-to.

use serde::{Deserialize, Serialize};

use cert_model::{Certificate, CertificateKind, CertificateStatus};

/// A closed-set filter value: match anything, or one specific choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    Any,
    Only(T),
}

// Manual impl: the derive would demand `T: Default` for a variant that
// carries no `T`.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns true if the given value passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(only) => only == value,
        }
    }
}

/// The active filter fields of a search.
///
/// Date boundaries are inclusive ISO-8601 strings compared byte-wise against
/// record issue dates; for well-formed dates that order is chronological, and
/// malformed boundaries degrade to a plain string comparison rather than an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text query matched case-insensitively against id and holder name.
    pub query: String,
    pub kind: Selection<CertificateKind>,
    pub status: Selection<CertificateStatus>,
    /// Inclusive lower bound on the issue date.
    pub date_from: Option<String>,
    /// Inclusive upper bound on the issue date.
    pub date_to: Option<String>,
}

impl SearchFilters {
    /// Returns true if every active condition accepts the record.
    pub fn matches(&self, record: &Certificate) -> bool {
        let query = self.query.trim();
        if !query.is_empty() {
            let needle = query.to_lowercase();
            let in_id = record.id.as_str().to_lowercase().contains(&needle);
            let in_name = record.holder_name.to_lowercase().contains(&needle);
            if !in_id && !in_name {
                return false;
            }
        }
        if !self.kind.admits(&record.kind) {
            return false;
        }
        if !self.status.admits(&record.status) {
            return false;
        }
        if let Some(from) = &self.date_from {
            if record.issue_date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if record.issue_date.as_str() > to.as_str() {
                return false;
            }
        }
        true
    }

    /// Merge the fields present in `update`; absent fields stay unchanged.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(date_from) = update.date_from {
            self.date_from = date_from;
        }
        if let Some(date_to) = update.date_to {
            self.date_to = date_to;
        }
    }

    /// Returns true if no filter condition is active.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.kind == Selection::Any
            && self.status == Selection::Any
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// A partial filter change: `None` fields are left untouched by
/// [`SearchFilters::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub query: Option<String>,
    pub kind: Option<Selection<CertificateKind>>,
    pub status: Option<Selection<CertificateStatus>>,
    pub date_from: Option<Option<String>>,
    pub date_to: Option<Option<String>>,
}

impl FilterUpdate {
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Selection<CertificateKind>) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn status(mut self, status: Selection<CertificateStatus>) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(Some(date.into()));
        self
    }

    #[must_use]
    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(Some(date.into()));
        self
    }

    #[must_use]
    pub fn clear_date_from(mut self) -> Self {
        self.date_from = Some(None);
        self
    }

    #[must_use]
    pub fn clear_date_to(mut self) -> Self {
        self.date_to = Some(None);
        self
    }
}
