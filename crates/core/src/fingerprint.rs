//! Anonymous device fingerprint
//!
//! Produces identifiers of the form `fp_<device-hash>_<epoch>`: a SHA-256
//! over stable environment characteristics, truncated to 16 hex chars,
//! plus the generation moment. The hash reasonably distinguishes distinct
//! devices in common use; it is neither collision-proof nor
//! forgery-resistant, and nothing here should be mistaken for
//! authentication.

use sha2::{Digest, Sha256};

/// Generates a fingerprint for the current device at `now` (epoch secs).
pub fn generate(now: u64) -> String {
    format!("fp_{}_{}", device_hash(), now)
}

/// The stable device-hash segment of a fingerprint. Two fingerprints name
/// the same device exactly when these match; the epoch suffix only marks
/// when each was generated.
pub fn device_component(fp: &str) -> &str {
    fp.split('_').nth(1).unwrap_or(fp)
}

pub fn same_device(a: &str, b: &str) -> bool {
    device_component(a) == device_component(b)
}

/// First 16 hex chars of SHA-256 over username, hostname, OS, arch, and
/// locale/timezone env vars. Falls back to the config dir path if the
/// environment is completely bare.
fn device_hash() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default();

    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default();

    let locale = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .unwrap_or_default();
    let timezone = std::env::var("TZ").unwrap_or_default();

    let seed = if !user.is_empty() || !host.is_empty() {
        format!(
            "{}@{}|{}|{}|{}|{}",
            user,
            host,
            std::env::consts::OS,
            std::env::consts::ARCH,
            locale,
            timezone
        )
    } else {
        dirs::config_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "plansmith-unknown".to_string())
    };

    let hash = Sha256::digest(seed.as_bytes());
    hex_encode(&hash[..8])
}

pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_environment_yields_same_device() {
        let a = generate(1_000);
        let b = generate(2_000);
        assert_ne!(a, b, "epoch suffix should differ");
        assert!(same_device(&a, &b));
    }

    #[test]
    fn fingerprint_format() {
        let fp = generate(1_234_567);
        let parts: Vec<&str> = fp.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "fp");
        assert_eq!(parts[1].len(), 16, "expected 16 hex chars, got: {fp}");
        assert!(parts[1].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(parts[2], "1234567");
    }

    #[test]
    fn device_component_tolerates_opaque_strings() {
        assert_eq!(device_component("not-a-fingerprint"), "not-a-fingerprint");
        assert!(!same_device("fp_aa_1", "fp_bb_1"));
    }

    #[test]
    fn hex_encode_known_values() {
        assert_eq!(hex_encode(&[]), "");
        assert_eq!(hex_encode(&[0x00]), "00");
        assert_eq!(hex_encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }
}
