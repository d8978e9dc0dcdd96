//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MathSheet";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mathsheet";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "MathSheet";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "MATHSHEET_CONFIG_DIR";
