//! Short code generation.

/// Number of random bytes drawn per code; hex encoding doubles the length.
const CODE_LENGTH_BYTES: usize = 3;

/// Generates a random short code: 3 random bytes, hex encoded.
///
/// Produces 6 lowercase hex characters (~16.7M possible values). The code is
/// drawn independently of the URL being shortened; uniqueness is enforced by
/// the storage constraint, not by the generator.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_is_lowercase_hex() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_code_varies_across_draws() {
        // 100 draws from a ~16.7M space; a collision here is effectively
        // impossible without a broken generator.
        let mut codes = HashSet::new();

        for _ in 0..100 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 100);
    }
}
