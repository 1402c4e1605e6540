use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::pools::{
    BRAZILIAN_SOURCE_COUNT, COMPANIES, LOCATIONS_BY_COUNTRY, ROLES, SOURCES, TECH_BUNDLES,
};
use crate::models::job::{EmploymentType, JobPosting, WorkModality};

/// Postings are spread uniformly over the last `MAX_DAYS_AGO` days (exclusive).
pub const MAX_DAYS_AGO: i64 = 30;
pub const URGENT_PROBABILITY: f64 = 0.1;
pub const DEFAULT_BATCH_SIZE: usize = 500;

const BENEFITS: &[&str] = &[
    "Premium health and dental plan",
    "Flexible meal allowance",
    "Home office allowance",
    "Gympass / TotalPass",
    "Annual education and courses budget",
    "Life insurance",
    "Profit sharing program",
    "Flexible hours",
];

/// Produces fresh synthetic batches. Owns its RNG so a seeded generator yields
/// a reproducible sequence of batches.
pub struct SyntheticGenerator {
    count: usize,
    rng: Mutex<StdRng>,
}

impl SyntheticGenerator {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            count,
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self, now: DateTime<Utc>) -> Vec<JobPosting> {
        self.with_rng(|rng| generate_batch(rng, self.count, now))
    }

    /// Runs `f` against the generator's RNG, so derived random fields on
    /// merged postings follow the same seed.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng)
    }
}

pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<JobPosting> {
    let stamp = now.timestamp_millis();
    (0..count).map(|i| generate_one(rng, i, stamp, now)).collect()
}

fn generate_one<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    stamp: i64,
    now: DateTime<Utc>,
) -> JobPosting {
    let company = pick(rng, COMPANIES);
    let (country, locations) = *pick(rng, LOCATIONS_BY_COUNTRY);
    let location = *pick(rng, locations);
    let days_ago = rng.gen_range(0..MAX_DAYS_AGO);
    let is_br = country == "BR";

    let title = *pick(rng, ROLES);
    let pitched_role = *pick(rng, ROLES);

    let salary = if is_br {
        format!("R$ {}.000", rng.gen_range(5..25))
    } else {
        format!("$ {}.000/yr", rng.gen_range(60..200))
    };

    let source = if is_br {
        *pick(rng, &SOURCES[..BRAZILIAN_SOURCE_COUNT])
    } else {
        *pick(rng, &SOURCES[BRAZILIAN_SOURCE_COUNT..])
    };

    JobPosting {
        id: format!("job-{}-{}", index + 1, stamp),
        title: title.to_string(),
        company: company.name.to_string(),
        logo: company.logo.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        employment_type: *pick(rng, &EmploymentType::ALL),
        modality: *pick(rng, &WorkModality::ALL),
        salary,
        description: format!(
            "We are looking for a {pitched_role} to join the {} team. You will work on \
             challenging projects using industry best practices, in a collaborative \
             environment with room to grow.",
            company.name
        ),
        requirements: vec![
            format!("{}+ years of proven experience", rng.gen_range(2..7)),
            "Solid knowledge of software architecture".to_string(),
            "Experience with agile methodologies".to_string(),
            "Good communication and teamwork".to_string(),
            if is_br {
                "Intermediate/advanced English".to_string()
            } else {
                "Fluent English".to_string()
            },
        ],
        benefits: BENEFITS.iter().map(|b| b.to_string()).collect(),
        technologies: pick(rng, TECH_BUNDLES)
            .iter()
            .map(|t| t.to_string())
            .collect(),
        source: source.to_string(),
        source_url: format!("https://{}/careers/job/{}", company.domain, index),
        posted_at: now - Duration::days(days_ago),
        urgent: rng.gen_bool(URGENT_PROBABILITY),
        views: rng.gen_range(10..5010),
    }
}

/// Uniform pick from a non-empty pool.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}
