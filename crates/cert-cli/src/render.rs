//! Table rendering for search results and the certificate detail view.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cert_engine::{CertificateSearch, SearchResults, SortDirection, SortField};
use cert_model::{Certificate, CertificateKind, CertificateStatus};

/// Print one page of results followed by the pagination footer.
pub fn print_results(search: &CertificateSearch, results: &SearchResults<'_>) {
    if results.total == 0 {
        println!("No certificates match the current filters.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        sortable_header(search, SortField::Id, "ID"),
        sortable_header(search, SortField::HolderName, "Holder"),
        sortable_header(search, SortField::Kind, "Type"),
        header_cell("Department"),
        sortable_header(search, SortField::IssueDate, "Issued"),
        sortable_header(search, SortField::Status, "Status"),
        header_cell("Format"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);

    for record in &results.records {
        table.add_row(vec![
            Cell::new(record.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.holder_name),
            kind_cell(record.kind),
            Cell::new(&record.department),
            Cell::new(record.issue_date.as_str()),
            status_cell(record.status),
            dim_cell(record.format.as_str()),
        ]);
    }
    println!("{table}");
    println!("{}", footer_line(results.total, results.page, results.total_pages));
}

/// Print the detail view of a single certificate.
pub fn print_detail(record: &Certificate) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_detail_table_style(&mut table);
    table.add_row(vec![
        dim_cell("ID"),
        Cell::new(record.id.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![dim_cell("Holder"), Cell::new(&record.holder_name)]);
    table.add_row(vec![dim_cell("Type"), kind_cell(record.kind)]);
    table.add_row(vec![dim_cell("Department"), Cell::new(&record.department)]);
    table.add_row(vec![
        dim_cell("Issue date"),
        Cell::new(record.issue_date.as_str()),
    ]);
    table.add_row(vec![dim_cell("Status"), status_cell(record.status)]);
    table.add_row(vec![dim_cell("Format"), Cell::new(record.format.as_str())]);
    println!("{table}");

    if record.status.is_issued() {
        println!("Download available: {}", record.download_file_name());
    } else {
        println!(
            "Download unavailable: status is {}, only Issued certificates can be downloaded.",
            record.status
        );
    }
}

/// The pagination footer under a results table.
pub fn footer_line(total: usize, page: usize, total_pages: usize) -> String {
    format!("{total} matching certificates (page {page} of {total_pages})")
}

fn sortable_header(search: &CertificateSearch, field: SortField, label: &str) -> Cell {
    if search.sort_field() == field {
        let marker = match search.sort_direction() {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        header_cell(&format!("{label} {marker}"))
    } else {
        header_cell(label)
    }
}

fn status_cell(status: CertificateStatus) -> Cell {
    match status {
        CertificateStatus::Issued => Cell::new("Issued")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CertificateStatus::Pending => Cell::new("Pending").fg(Color::Yellow),
        CertificateStatus::Rejected => Cell::new("Rejected").fg(Color::Red),
    }
}

fn kind_cell(kind: CertificateKind) -> Cell {
    let color = match kind {
        CertificateKind::Bonafide => Color::Cyan,
        CertificateKind::Transfer => Color::Blue,
        CertificateKind::CourseCompletion => Color::Magenta,
        CertificateKind::Merit => Color::Green,
        CertificateKind::Participation => Color::DarkGrey,
    };
    Cell::new(kind.as_str()).fg(color)
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
