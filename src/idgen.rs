//! Random task identifier generation.

use rand::rngs::OsRng;
use rand::RngCore;

/// Random bytes per identifier. 32 bits keeps ids short to type while
/// making collisions negligible for a single-user store.
const ID_BYTES: usize = 4;

/// Generate a fresh 8-character lowercase hex id from the OS CSPRNG.
///
/// Panics if the randomness source is unavailable: that is an
/// environment fault the process cannot recover from, not a business
/// error.
pub fn generate() -> String {
    let mut bytes = [0u8; ID_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .expect("OS randomness source unavailable");
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_fixed_length_hex() {
        let id = generate();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn successive_ids_differ() {
        let ids: Vec<String> = (0..32).map(|_| generate()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }
}
