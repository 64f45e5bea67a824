//! Enrollment code (NISN) generation: `YYMMDD` plus a zero-padded 4-digit random suffix.

use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_RANGE: u32 = 10_000;

/// Source of enrollment codes. Injected into the repository so tests can pin codes.
pub trait EnrollmentCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Format a code for `date` with the given random suffix (reduced into `0..10000`).
pub fn format_code(date: NaiveDate, suffix: u32) -> String {
    format!(
        "{:02}{:02}{:02}{:04}",
        date.year().rem_euclid(100),
        date.month(),
        date.day(),
        suffix % SUFFIX_RANGE
    )
}

/// Local-date codes with a time-seeded RNG. Codes are not checked for uniqueness.
pub struct RandomEnrollmentCodes {
    rng: Mutex<StdRng>,
}

impl RandomEnrollmentCodes {
    /// Seeded from the system clock at construction.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomEnrollmentCodes {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn next_suffix(&self) -> u32 {
        let mut rng = match self.rng.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..SUFFIX_RANGE)
    }
}

impl Default for RandomEnrollmentCodes {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrollmentCodeGenerator for RandomEnrollmentCodes {
    fn generate(&self) -> String {
        format_code(Local::now().date_naive(), self.next_suffix())
    }
}
