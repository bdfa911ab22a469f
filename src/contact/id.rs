//! Contact ID generation
//!
//! Format: `YYYYMMDDHHMMSS-<16 hex chars>`
//!
//! The timestamp prefix is the creation second in UTC, so IDs sort roughly by
//! creation time. The suffix is 8 bytes from the thread-local CSPRNG, which
//! keeps IDs minted within the same second apart.

use chrono::{DateTime, Utc};
use rand::RngCore;

/// `chrono` format string for the timestamp prefix
pub const ID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Random bytes per ID
const RANDOM_BYTES: usize = 8;

/// Build a new ID for a contact created at `created_at`
pub fn generate_id(created_at: DateTime<Utc>) -> String {
    let mut random = [0u8; RANDOM_BYTES];
    rand::thread_rng().fill_bytes(&mut random);

    format!(
        "{}-{}",
        created_at.format(ID_TIMESTAMP_FORMAT),
        hex::encode(random)
    )
}
