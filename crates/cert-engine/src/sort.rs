//! Sort field selection and the record comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use cert_model::Certificate;

/// The record field a search is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Id,
    HolderName,
    Kind,
    IssueDate,
    Status,
}

impl SortField {
    /// All sortable fields, in table-column order.
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::HolderName,
        SortField::Kind,
        SortField::IssueDate,
        SortField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::HolderName => "holder",
            SortField::Kind => "type",
            SortField::IssueDate => "date",
            SortField::Status => "status",
        }
    }
}

/// Sort direction; ascending unless a repeated column click flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient a base (ascending) comparison to this direction.
    ///
    /// Equal keys stay equal under both directions, so reversing through the
    /// comparator keeps a stable sort stable instead of reversing tied runs.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Ascending comparison of two records on the given field.
///
/// All fields compare on their display string; for ISO issue dates string
/// order is chronological order.
pub fn compare(field: SortField, a: &Certificate, b: &Certificate) -> Ordering {
    match field {
        SortField::Id => a.id.as_str().cmp(b.id.as_str()),
        SortField::HolderName => a.holder_name.cmp(&b.holder_name),
        SortField::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        SortField::IssueDate => a.issue_date.as_str().cmp(b.issue_date.as_str()),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cert_model::{
        CertificateId, CertificateKind, CertificateStatus, FileFormat, IssueDate,
    };

    fn record(index: usize, name: &str, date: &str) -> Certificate {
        Certificate {
            id: CertificateId::from_index(index),
            holder_name: name.to_string(),
            kind: CertificateKind::Bonafide,
            department: "Economics".to_string(),
            issue_date: IssueDate::new(date).expect("valid date"),
            status: CertificateStatus::Issued,
            format: FileFormat::Jpg,
        }
    }

    #[test]
    fn compare_orders_by_selected_field() {
        let a = record(1, "Neha Sen", "2022-01-05");
        let b = record(2, "Amit Roy", "2021-12-31");

        assert_eq!(compare(SortField::Id, &a, &b), Ordering::Less);
        assert_eq!(compare(SortField::HolderName, &a, &b), Ordering::Greater);
        assert_eq!(compare(SortField::IssueDate, &a, &b), Ordering::Greater);
    }

    #[test]
    fn orient_reverses_only_descending() {
        assert_eq!(
            SortDirection::Ascending.orient(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.orient(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.orient(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn flipped_toggles_between_directions() {
        assert_eq!(
            SortDirection::Ascending.flipped(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }
}
