//! The search state machine and its derived result view.

use serde::Serialize;
use tracing::debug;

use cert_model::Certificate;

use crate::filter::{FilterUpdate, SearchFilters};
use crate::page;
use crate::sort::{self, SortDirection, SortField};

/// An in-memory search over a fixed collection of certificate records.
///
/// The collection is read-only for the search's lifetime; the mutable part is
/// the query state (filters, sort, page). Results are never stored: every
/// [`CertificateSearch::results`] call recomputes the filtered, sorted view
/// and slices out the current page.
#[derive(Debug, Clone)]
pub struct CertificateSearch {
    records: Vec<Certificate>,
    filters: SearchFilters,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
}

/// One derived view of the search: total counts plus the current page slice.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// Size of the full filtered set.
    pub total: usize,
    /// Pages needed for the filtered set; 0 when it is empty.
    pub total_pages: usize,
    /// The 1-based page this view holds.
    pub page: usize,
    /// The page slice, at most [`page::PAGE_SIZE`] records.
    pub records: Vec<&'a Certificate>,
}

impl CertificateSearch {
    /// Start a search with no filters, ordered by id descending, on page 1.
    ///
    /// Id-descending puts the newest issuance buckets first, which is the
    /// default listing the registry presents.
    pub fn new(records: Vec<Certificate>) -> Self {
        Self {
            records,
            filters: SearchFilters::default(),
            sort_field: SortField::Id,
            sort_direction: SortDirection::Descending,
            page: 1,
        }
    }

    /// Merge a partial filter change and reset to page 1.
    ///
    /// The page reset is unconditional: a changed filter invalidates the
    /// previous page's relevance even when the old page number would still be
    /// in range.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.page = 1;
        debug!(filters = ?self.filters, "filters updated");
    }

    /// Reset all filters to their defaults and return to page 1.
    ///
    /// Sort field and direction are left untouched.
    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
        self.page = 1;
        debug!("filters cleared");
    }

    /// Select a sort field, column-header style: selecting the current field
    /// flips the direction, selecting a new field forces ascending.
    ///
    /// The current page is kept.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
        debug!(
            field = self.sort_field.as_str(),
            direction = self.sort_direction.as_str(),
            "sort changed"
        );
    }

    /// Jump to a 1-based page.
    ///
    /// No clamping: callers derive the valid range from
    /// [`SearchResults::total_pages`], and an out-of-range page simply yields
    /// an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Recompute the filtered, sorted view and slice out the current page.
    pub fn results(&self) -> SearchResults<'_> {
        let mut matched: Vec<&Certificate> = self
            .records
            .iter()
            .filter(|record| self.filters.matches(record))
            .collect();
        // Stable sort: equal keys keep collection order in both directions.
        matched.sort_by(|a, b| {
            self.sort_direction
                .orient(sort::compare(self.sort_field, a, b))
        });

        let total = matched.len();
        let bounds = page::page_bounds(total, self.page);
        SearchResults {
            total,
            total_pages: page::total_pages(total),
            page: self.page,
            records: matched[bounds].to_vec(),
        }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The current 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Size of the full, unfiltered collection.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Look up a single record by its exact identifier string.
    pub fn find_by_id(&self, id: &str) -> Option<&Certificate> {
        self.records.iter().find(|record| record.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use cert_model::{
        CertificateId, CertificateKind, CertificateStatus, FileFormat, IssueDate,
    };

    fn record(index: usize, name: &str, date: &str, status: CertificateStatus) -> Certificate {
        Certificate {
            id: CertificateId::from_index(index),
            holder_name: name.to_string(),
            kind: CertificateKind::Participation,
            department: "Biology".to_string(),
            issue_date: IssueDate::new(date).expect("valid date"),
            status,
            format: FileFormat::Pdf,
        }
    }

    fn small_collection() -> Vec<Certificate> {
        vec![
            record(0, "Kavya Nair", "2021-04-01", CertificateStatus::Issued),
            record(1, "Deepak Iyer", "2020-09-15", CertificateStatus::Pending),
            record(2, "Kavya Nair", "2022-02-20", CertificateStatus::Issued),
            record(3, "Shreya Bose", "2021-04-01", CertificateStatus::Rejected),
        ]
    }

    #[test]
    fn initial_state_is_unfiltered_id_descending_page_one() {
        let search = CertificateSearch::new(small_collection());
        assert!(search.filters().is_empty());
        assert_eq!(search.sort_field(), SortField::Id);
        assert_eq!(search.sort_direction(), SortDirection::Descending);
        assert_eq!(search.page(), 1);

        let results = search.results();
        assert_eq!(results.total, 4);
        assert_eq!(results.records[0].id.as_str(), "CERT-2020-0003");
    }

    #[test]
    fn update_filters_resets_page() {
        let mut search = CertificateSearch::new(small_collection());
        search.set_page(2);
        search.update_filters(FilterUpdate::default().query("kavya"));
        assert_eq!(search.page(), 1);

        let results = search.results();
        assert_eq!(results.total, 2);
    }

    #[test]
    fn clear_filters_keeps_sort() {
        let mut search = CertificateSearch::new(small_collection());
        search.toggle_sort(SortField::HolderName);
        search.update_filters(
            FilterUpdate::default().status(Selection::Only(CertificateStatus::Issued)),
        );
        search.clear_filters();

        assert!(search.filters().is_empty());
        assert_eq!(search.sort_field(), SortField::HolderName);
        assert_eq!(search.sort_direction(), SortDirection::Ascending);
        assert_eq!(search.page(), 1);
        assert_eq!(search.results().total, 4);
    }

    #[test]
    fn toggle_sort_flips_same_field_and_resets_direction_on_new_field() {
        let mut search = CertificateSearch::new(small_collection());
        // Initial field is Id, so selecting Id flips descending -> ascending.
        search.toggle_sort(SortField::Id);
        assert_eq!(search.sort_direction(), SortDirection::Ascending);
        search.toggle_sort(SortField::Id);
        assert_eq!(search.sort_direction(), SortDirection::Descending);

        search.toggle_sort(SortField::IssueDate);
        assert_eq!(search.sort_field(), SortField::IssueDate);
        assert_eq!(search.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn toggle_sort_keeps_page() {
        let mut search = CertificateSearch::new(small_collection());
        search.set_page(2);
        search.toggle_sort(SortField::Status);
        assert_eq!(search.page(), 2);
    }

    #[test]
    fn equal_sort_keys_keep_collection_order() {
        let mut search = CertificateSearch::new(small_collection());
        search.toggle_sort(SortField::HolderName); // ascending

        let results = search.results();
        let kavya: Vec<&str> = results
            .records
            .iter()
            .filter(|r| r.holder_name == "Kavya Nair")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(kavya, vec!["CERT-2020-0000", "CERT-2020-0002"]);

        // Same relative order after flipping direction.
        search.toggle_sort(SortField::HolderName); // descending
        let results = search.results();
        let kavya: Vec<&str> = results
            .records
            .iter()
            .filter(|r| r.holder_name == "Kavya Nair")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(kavya, vec!["CERT-2020-0000", "CERT-2020-0002"]);
    }

    #[test]
    fn page_past_the_end_yields_empty_slice() {
        let mut search = CertificateSearch::new(small_collection());
        search.set_page(7);
        let results = search.results();
        assert_eq!(results.page, 7);
        assert_eq!(results.total, 4);
        assert!(results.records.is_empty());
    }

    #[test]
    fn results_serialize_for_the_view_layer() {
        let mut search = CertificateSearch::new(small_collection());
        search.update_filters(FilterUpdate::default().query("kavya"));

        let results = search.results();
        let json = serde_json::to_value(&results).expect("serialize results");
        assert_eq!(json["total"], 2);
        assert_eq!(json["total_pages"], 1);
        assert_eq!(json["page"], 1);
        // Initial sort is id descending, so the later bucket leads.
        assert_eq!(json["records"][0]["id"], "CERT-2020-0002");
        assert_eq!(json["records"][1]["holder_name"], "Kavya Nair");
    }

    #[test]
    fn find_by_id_is_exact() {
        let search = CertificateSearch::new(small_collection());
        assert!(search.find_by_id("CERT-2020-0002").is_some());
        assert!(search.find_by_id("CERT-2020-0009").is_none());
    }
}
