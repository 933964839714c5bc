//! CLI argument definitions for the certificate registry browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cert_engine::SortField;
use cert_model::{CertificateKind, CertificateStatus};

#[derive(Parser)]
#[command(
    name = "cert-search",
    version,
    about = "Certificate Registry - search and browse issued certificates",
    long_about = "Search, browse and inspect the certificate registry.\n\n\
                  Filters by free text, category, status and issue-date range;\n\
                  results are sorted and paginated ten records per page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the registry and print one page of matching certificates.
    Search(SearchArgs),

    /// Show the detail view of a single certificate.
    Show(ShowArgs),

    /// Download a certificate document (simulated; Issued only).
    Download(DownloadArgs),
}

/// Options selecting the generated demo collection.
#[derive(Args)]
pub struct CollectionArgs {
    /// Number of records in the generated collection (identifier buckets run
    /// out of four-digit years past 798000).
    #[arg(long, value_name = "N", default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..=798_000))]
    pub count: u64,

    /// Seed for the deterministic record generator.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    pub seed: u64,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query matched against certificate id and holder name.
    #[arg(long)]
    pub query: Option<String>,

    /// Only certificates of this category.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub kind: Option<KindArg>,

    /// Only certificates with this status.
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Only certificates issued on or after this date (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// Only certificates issued on or before this date (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,

    /// Sort column (default: id, newest buckets first).
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Reverse the sort direction chosen with --sort.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// 1-based page of the result set to print.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[command(flatten)]
    pub collection: CollectionArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Certificate identifier, e.g. CERT-2021-0150.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub collection: CollectionArgs,
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Certificate identifier, e.g. CERT-2021-0150.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub collection: CollectionArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Bonafide,
    Transfer,
    CourseCompletion,
    Merit,
    Participation,
}

impl From<KindArg> for CertificateKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Bonafide => CertificateKind::Bonafide,
            KindArg::Transfer => CertificateKind::Transfer,
            KindArg::CourseCompletion => CertificateKind::CourseCompletion,
            KindArg::Merit => CertificateKind::Merit,
            KindArg::Participation => CertificateKind::Participation,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Issued,
    Pending,
    Rejected,
}

impl From<StatusArg> for CertificateStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Issued => CertificateStatus::Issued,
            StatusArg::Pending => CertificateStatus::Pending,
            StatusArg::Rejected => CertificateStatus::Rejected,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Id,
    Holder,
    Type,
    Date,
    Status,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortField::Id,
            SortArg::Holder => SortField::HolderName,
            SortArg::Type => SortField::Kind,
            SortArg::Date => SortField::IssueDate,
            SortArg::Status => SortField::Status,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn arg_enums_map_onto_model_enums() {
        assert_eq!(
            CertificateKind::from(KindArg::CourseCompletion),
            CertificateKind::CourseCompletion
        );
        assert_eq!(
            CertificateStatus::from(StatusArg::Rejected),
            CertificateStatus::Rejected
        );
        assert_eq!(SortField::from(SortArg::Holder), SortField::HolderName);
    }

    #[test]
    fn search_defaults_to_page_one() {
        let cli = Cli::try_parse_from(["cert-search", "search"]).expect("parse");
        let Command::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.page, 1);
        assert_eq!(args.collection.count, 500);
        assert!(args.sort.is_none());
    }

    #[test]
    fn count_flag_is_bounded_by_the_id_scheme() {
        assert!(Cli::try_parse_from(["cert-search", "search", "--count", "798000"]).is_ok());
        assert!(Cli::try_parse_from(["cert-search", "search", "--count", "798001"]).is_err());
        assert!(Cli::try_parse_from(["cert-search", "search", "--count", "0"]).is_err());
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["cert-search", "search", "--desc"]).is_err());
        assert!(
            Cli::try_parse_from(["cert-search", "search", "--sort", "date", "--desc"]).is_ok()
        );
    }
}
