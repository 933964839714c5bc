//! End-to-end search scenarios over the deterministic 500-record collection.

use cert_engine::{
    CertificateSearch, FilterUpdate, PAGE_SIZE, Selection, SortDirection, SortField,
};
use cert_model::{Certificate, CertificateStatus};

fn seeded_search() -> CertificateSearch {
    CertificateSearch::new(cert_data::default_collection())
}

#[test]
fn issued_by_date_descending_page_one_is_the_ten_latest() {
    let records = cert_data::default_collection();
    let mut search = CertificateSearch::new(records.clone());
    search.update_filters(
        FilterUpdate::default().status(Selection::Only(CertificateStatus::Issued)),
    );
    search.toggle_sort(SortField::IssueDate); // ascending
    search.toggle_sort(SortField::IssueDate); // descending

    // Reference: stable date-descending order over the issued subset.
    let mut issued: Vec<&Certificate> = records
        .iter()
        .filter(|r| r.status == CertificateStatus::Issued)
        .collect();
    issued.sort_by(|a, b| b.issue_date.as_str().cmp(a.issue_date.as_str()));

    let results = search.results();
    assert_eq!(results.total, issued.len());
    assert_eq!(results.records.len(), PAGE_SIZE);
    for (got, expected) in results.records.iter().zip(&issued) {
        assert_eq!(got.id, expected.id);
        assert!(got.status.is_issued());
    }
    // Most recent first.
    assert!(results.records[0].issue_date >= results.records[9].issue_date);
}

#[test]
fn exact_id_query_matches_one_record() {
    let mut search = seeded_search();
    search.update_filters(FilterUpdate::default().query("cert-2021-0150"));

    let results = search.results();
    assert_eq!(results.total, 1);
    assert_eq!(results.records[0].id.as_str(), "CERT-2021-0150");
}

#[test]
fn inclusive_date_window_selects_exactly_the_window() {
    let records = cert_data::default_collection();
    let mut search = CertificateSearch::new(records.clone());
    search.update_filters(
        FilterUpdate::default()
            .date_from("2022-06-01")
            .date_to("2022-06-30"),
    );

    let expected = records
        .iter()
        .filter(|r| {
            r.issue_date.as_str() >= "2022-06-01" && r.issue_date.as_str() <= "2022-06-30"
        })
        .count();
    let results = search.results();
    assert_eq!(results.total, expected);
    assert!(results.total > 0, "seeded window should not be empty");
}

#[test]
fn inverted_date_window_is_empty() {
    let mut search = seeded_search();
    search.update_filters(
        FilterUpdate::default()
            .date_from("2022-06-30")
            .date_to("2022-06-01"),
    );

    let results = search.results();
    assert_eq!(results.total, 0);
    assert_eq!(results.total_pages, 0);
    assert!(results.records.is_empty());
}

#[test]
fn pagination_covers_the_filtered_set_without_overlap() {
    let mut search = seeded_search();
    search.update_filters(
        FilterUpdate::default().status(Selection::Only(CertificateStatus::Issued)),
    );
    let first = search.results();
    let total = first.total;
    let total_pages = first.total_pages;
    assert_eq!(total_pages, total.div_ceil(PAGE_SIZE));

    let mut seen = Vec::new();
    for page in 1..=total_pages {
        search.set_page(page);
        let results = search.results();
        assert!(results.records.len() <= PAGE_SIZE);
        if page < total_pages {
            assert_eq!(results.records.len(), PAGE_SIZE);
        }
        seen.extend(results.records.iter().map(|r| r.id.clone()));
    }
    assert_eq!(seen.len(), total);
    let mut deduped = seen.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), total, "pages must not overlap");
}

#[test]
fn filter_change_resets_an_otherwise_valid_page() {
    let mut search = seeded_search();
    search.set_page(3);
    // The issued subset is still larger than three pages, but the reset is
    // unconditional.
    search.update_filters(
        FilterUpdate::default().status(Selection::Only(CertificateStatus::Issued)),
    );
    assert_eq!(search.page(), 1);
    assert!(search.results().total_pages >= 3);
}

#[test]
fn clear_filters_returns_the_full_first_page_in_current_order() {
    let mut search = seeded_search();
    search.update_filters(FilterUpdate::default().query("sharma"));
    search.toggle_sort(SortField::HolderName);
    search.clear_filters();

    let results = search.results();
    assert_eq!(results.total, search.record_count());
    assert_eq!(results.page, 1);
    assert_eq!(search.sort_field(), SortField::HolderName);
    assert_eq!(search.sort_direction(), SortDirection::Ascending);
    // First page of the untouched sort order.
    for pair in results.records.windows(2) {
        assert!(pair[0].holder_name <= pair[1].holder_name);
    }
}
