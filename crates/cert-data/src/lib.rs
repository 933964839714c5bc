//! Deterministic mock record source for the certificate registry.
//!
//! Supplies the read-only collection the search engine consumes. Generation
//! is seeded, so equal [`GeneratorOptions`] always produce the same
//! collection; tests and demos rely on that.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cert_model::{
    Certificate, CertificateId, CertificateKind, CertificateStatus, FileFormat, IssueDate,
};

const DEPARTMENTS: [&str; 10] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Business Administration",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Economics",
];

const FIRST_NAMES: [&str; 30] = [
    "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Sai", "Reyansh", "Ayaan", "Krishna",
    "Ishaan", "Ananya", "Diya", "Saanvi", "Aadhya", "Kavya", "Riya", "Priya", "Neha", "Shreya",
    "Pooja", "Rahul", "Amit", "Pradeep", "Suresh", "Rajesh", "Vikram", "Kiran", "Mohan",
    "Deepak", "Sanjay",
];

const LAST_NAMES: [&str; 20] = [
    "Sharma", "Verma", "Patel", "Gupta", "Singh", "Kumar", "Reddy", "Joshi", "Rao", "Nair",
    "Iyer", "Menon", "Pillai", "Das", "Bose", "Sen", "Roy", "Mukherjee", "Chatterjee",
    "Banerjee",
];

/// Options controlling a generated collection.
///
/// The issue-date window is fixed rather than "now"-relative so that equal
/// seeds keep producing equal collections across days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of records to generate; at most
    /// `CertificateId::MAX_INDEX + 1` ids exist in the four-digit-year scheme.
    pub count: usize,
    pub seed: u64,
    /// Inclusive lower bound of the issue-date window.
    pub date_from: NaiveDate,
    /// Inclusive upper bound of the issue-date window.
    pub date_to: NaiveDate,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 500,
            seed: 42,
            date_from: ymd(2020, 1, 1),
            date_to: ymd(2024, 12, 31),
        }
    }
}

impl GeneratorOptions {
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a certificate collection.
///
/// Identifiers come from the year-bucketed sequence (unique by construction),
/// names and departments from fixed pools, category and file format uniformly,
/// status with the registry's 70/20/10 Issued/Pending/Rejected weighting, and
/// issue dates uniformly from the configured window.
pub fn generate(options: &GeneratorOptions) -> Vec<Certificate> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let window_days = (options.date_to - options.date_from).num_days().max(0);

    (0..options.count)
        .map(|index| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let department = DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];
            let kind = CertificateKind::ALL[rng.random_range(0..CertificateKind::ALL.len())];
            let format = FileFormat::ALL[rng.random_range(0..FileFormat::ALL.len())];
            let status = weighted_status(rng.random::<f64>());
            let offset = rng.random_range(0..=window_days);
            let issue_date = IssueDate::from(options.date_from + Duration::days(offset));

            Certificate {
                id: CertificateId::from_index(index),
                holder_name: format!("{first} {last}"),
                kind,
                department: department.to_string(),
                issue_date,
                status,
                format,
            }
        })
        .collect()
}

/// The default 500-record demo collection.
pub fn default_collection() -> Vec<Certificate> {
    generate(&GeneratorOptions::default())
}

fn weighted_status(roll: f64) -> CertificateStatus {
    if roll < 0.70 {
        CertificateStatus::Issued
    } else if roll < 0.90 {
        CertificateStatus::Pending
    } else {
        CertificateStatus::Rejected
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
