use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 6;

/// Short, stable stand-in for a subject in logs.
///
/// Lets operators correlate log lines for one principal without writing the
/// identifier itself.
pub fn fingerprint(subject: &str) -> String {
    let digest = Sha256::digest(subject.as_bytes());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

#[cfg(test)]
mod tests {
    use super::fingerprint;

    #[test]
    fn fingerprint_is_stable_and_hides_the_subject() {
        let a = fingerprint("user@example.com");
        assert_eq!(a, fingerprint("user@example.com"));
        assert_eq!(a.len(), 12);
        assert!(!a.contains("user"));
        assert_ne!(a, fingerprint("other@example.com"));
    }
}
