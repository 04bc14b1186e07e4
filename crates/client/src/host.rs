//! Per-request hostname label generation.

use rand::{distributions::Alphanumeric, Rng};

/// Length of the generated subdomain label.
pub const LABEL_LEN: usize = 10;

/// Generate a random label of `len` characters drawn uniformly from
/// `a-z`, `A-Z`, `0-9`.
///
/// Every request carries a fresh label as its subdomain, which is what keeps
/// static hostname blocklists from ever matching twice. The label is
/// obfuscation only: the RNG is not cryptographic and the label carries no
/// secret, so `thread_rng` is deliberately sufficient here.
pub fn generate_label(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_has_requested_length() {
        for len in [0, 1, 10, 63] {
            assert_eq!(generate_label(len).chars().count(), len);
        }
    }

    #[test]
    fn label_is_alphanumeric_under_repeated_sampling() {
        for _ in 0..200 {
            let label = generate_label(LABEL_LEN);
            assert!(
                label.chars().all(|c| c.is_ascii_alphanumeric()),
                "non-alphanumeric character in label: {label}"
            );
        }
    }

    #[test]
    fn labels_vary_across_calls() {
        // 62^10 possible labels; a collision here means a broken RNG.
        let a = generate_label(LABEL_LEN);
        let b = generate_label(LABEL_LEN);
        assert_ne!(a, b);
    }
}
