use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{info, warn};

use cert_data::GeneratorOptions;
use cert_engine::{CertificateSearch, FilterUpdate, Selection};
use cert_model::CertificateId;

use crate::cli::{CollectionArgs, DownloadArgs, SearchArgs, ShowArgs};
use crate::render;

pub fn run_search(args: &SearchArgs) -> Result<()> {
    warn_on_malformed_date("--from", args.date_from.as_deref());
    warn_on_malformed_date("--to", args.date_to.as_deref());

    let mut search = load_search(&args.collection);
    search.update_filters(filter_update_from(args));
    if let Some(sort) = args.sort {
        search.toggle_sort(sort.into());
        if args.desc {
            search.toggle_sort(sort.into());
        }
    }
    search.set_page(args.page);

    let results = search.results();
    validate_page(args.page, results.total, results.total_pages)?;
    info!(
        total = results.total,
        page = results.page,
        total_pages = results.total_pages,
        "search complete"
    );
    render::print_results(&search, &results);
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let record = find_record(&args.id, &args.collection)?;
    render::print_detail(&record);
    Ok(())
}

pub fn run_download(args: &DownloadArgs) -> Result<()> {
    let record = find_record(&args.id, &args.collection)?;
    if !record.status.is_issued() {
        bail!(
            "cannot download {}: status is {}, only Issued certificates can be downloaded",
            record.id,
            record.status
        );
    }
    // Simulated action: the registry holds no documents to transfer.
    info!(id = %record.id, file = %record.download_file_name(), "simulated download");
    println!(
        "Download simulated for {}: would produce {} (no file written).",
        record.id,
        record.download_file_name()
    );
    Ok(())
}

fn load_search(collection: &CollectionArgs) -> CertificateSearch {
    let options = GeneratorOptions::default()
        .with_count(collection.count as usize)
        .with_seed(collection.seed);
    let records = cert_data::generate(&options);
    info!(
        count = records.len(),
        seed = collection.seed,
        "generated demo collection"
    );
    CertificateSearch::new(records)
}

fn find_record(
    id: &str,
    collection: &CollectionArgs,
) -> Result<cert_model::Certificate> {
    let id: CertificateId = id.parse()?;
    let search = load_search(collection);
    match search.find_by_id(id.as_str()) {
        Some(record) => Ok(record.clone()),
        None => bail!("no certificate {id} in the collection"),
    }
}

fn filter_update_from(args: &SearchArgs) -> FilterUpdate {
    let mut update = FilterUpdate::default();
    if let Some(query) = &args.query {
        update = update.query(query.clone());
    }
    if let Some(kind) = args.kind {
        update = update.kind(Selection::Only(kind.into()));
    }
    if let Some(status) = args.status {
        update = update.status(Selection::Only(status.into()));
    }
    if let Some(from) = &args.date_from {
        update = update.date_from(from.clone());
    }
    if let Some(to) = &args.date_to {
        update = update.date_to(to.clone());
    }
    update
}

/// The caller-side page contract: on a non-empty result set the requested
/// page must fall within `1..=total_pages`.
fn validate_page(page: usize, total: usize, total_pages: usize) -> Result<()> {
    if total > 0 && !(1..=total_pages).contains(&page) {
        bail!("page {page} is out of range (1..={total_pages})");
    }
    Ok(())
}

fn warn_on_malformed_date(flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            warn!(flag, value, "not a calendar date; comparing as plain text");
        }
    }
}
