//! Random test-data generator
//!
//! Builds plausible contacts from fixed name, street and city pools.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::contact::Contact;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emma", "James", "Olivia", "William", "Sophia",
    "Robert", "Ava", "Joseph", "Isabella", "Thomas",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
];

const DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "example.com"];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Maple Dr", "Cedar Ln", "Pine Rd", "Elm St", "Washington Ave", "Lake Dr",
    "Hill Rd", "River Ln",
];

/// City and its state abbreviation
const CITIES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("San Jose", "CA"),
];

/// Produces random contacts
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator; the same seed yields the same field values
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One random contact with a fresh ID
    pub fn generate_contact(&mut self) -> Contact {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        let domain = self.pick(DOMAINS);
        let email = format!("{}.{}@{}", first, last, domain);
        let phone = self.phone_number();
        let address = self.street_address();

        Contact::new(first, last, email, phone, address)
    }

    /// `n` random contacts
    pub fn generate_contacts(&mut self, n: usize) -> Vec<Contact> {
        (0..n).map(|_| self.generate_contact()).collect()
    }

    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        // Pools are non-empty constants
        *pool.choose(&mut self.rng).unwrap_or(&pool[0])
    }

    /// `(ddd) ddd-dddd`
    fn phone_number(&mut self) -> String {
        let digits: String = (0..10)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect();
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    }

    /// `<number> <street>, <city>, <state> <zip>`
    fn street_address(&mut self) -> String {
        let number = self.rng.gen_range(1..=9999);
        let street = self.pick(STREETS);
        let (city, state) = self.pick(CITIES);
        let zip = self.rng.gen_range(10000..=99999);
        format!("{} {}, {}, {} {}", number, street, city, state, zip)
    }
}
