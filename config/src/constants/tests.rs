//! Tests for the kernel configuration snapshot.

use super::*;

/// Ensures the default snapshot uses the shared segment constant.
#[test]
fn default_config_is_valid() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.segments, DEFAULT_SEGMENTS);
    assert_eq!(KernelConfig::new(cfg.segments), Ok(cfg));
}

/// Validates the constructor rejects segment counts on both sides.
#[test]
fn new_validates_segments() {
    assert_eq!(
        KernelConfig::new(2).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert_eq!(
        KernelConfig::new(MAX_SEGMENTS + 1).unwrap_err(),
        ConfigError::InvalidSegments(MAX_SEGMENTS + 1)
    );
    assert!(KernelConfig::new(MIN_SEGMENTS).is_ok());
    assert!(KernelConfig::new(MAX_SEGMENTS).is_ok());
}

#[test]
fn config_error_message_names_bounds() {
    let message = ConfigError::InvalidSegments(1).to_string();
    assert!(message.contains("3..=1024"));
    assert!(message.ends_with(": 1"));
}
