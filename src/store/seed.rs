//! Sample data for a fresh store
//!
//! Records are generated from fixed name pools. When `rng_seed` is set the
//! output is reproducible across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::client_store::ClientStore;
use super::record::{ClientId, ClientRecord, Gender};

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Felipe", "Gabriela", "Hugo", "Isabel", "Joao",
    "Karen", "Lucas",
];

const LAST_NAMES: [&str; 10] = [
    "Silva", "Santos", "Oliveira", "Souza", "Costa", "Pereira", "Almeida", "Ferreira", "Gomes",
    "Ribeiro",
];

const DOMAINS: [&str; 4] = ["example.com", "mail.test", "clients.dev", "sample.org"];

/// Sample-data settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of records to generate (default: 10)
    #[serde(default = "default_count")]
    pub count: usize,

    /// Fixed RNG seed for reproducible data
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_count() -> usize {
    10
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            rng_seed: None,
        }
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn sample_record<R: Rng>(rng: &mut R, id: ClientId) -> ClientRecord {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    let email = format!(
        "{}.{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        id,
        pick(rng, &DOMAINS)
    );
    let phone = format!(
        "+55 {:02} 9{:04}-{:04}",
        rng.gen_range(11..100),
        rng.gen_range(0..10_000),
        rng.gen_range(0..10_000)
    );
    let gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];

    ClientRecord::new(id, format!("{} {}", first, last), email, gender, phone)
}

/// Generate `config.count` records with identifiers `1..=count`.
pub fn generate(config: &SeedConfig) -> Vec<ClientRecord> {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (1..=config.count as ClientId)
        .map(|id| sample_record(&mut rng, id))
        .collect()
}

/// Build a store populated with generated sample records
pub fn seeded_store(config: &SeedConfig) -> ClientStore {
    ClientStore::with_records(generate(config))
}
