//! Tests for the kernel configuration snapshot.

use super::*;

/// Ensures default settings are sane.
#[test]
fn default_config_is_valid() {
    let cfg = KernelConfig::default();
    assert!(cfg.degenerate_epsilon > 0.0);
    assert_eq!(cfg.solid_name, STL_SOLID_NAME);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// assert!(KernelConfig::new(-1.0, "gear").is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        KernelConfig::new(0.0, "gear").unwrap_err(),
        ConfigError::InvalidEpsilon(0.0)
    );
    assert!(matches!(
        KernelConfig::new(f64::NAN, "gear").unwrap_err(),
        ConfigError::InvalidEpsilon(_)
    ));
    assert_eq!(
        KernelConfig::new(1.0e-4, "").unwrap_err(),
        ConfigError::InvalidSolidName(String::new())
    );
    assert_eq!(
        KernelConfig::new(1.0e-4, "my gear").unwrap_err(),
        ConfigError::InvalidSolidName("my gear".to_string())
    );
}

#[test]
fn config_error_messages_name_the_field() {
    assert!(ConfigError::InvalidEpsilon(0.0)
        .to_string()
        .contains("degenerate_epsilon"));
    assert!(ConfigError::InvalidSolidName(String::new())
        .to_string()
        .contains("solid name"));
}
