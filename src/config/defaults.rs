/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024; // 16MB

// Storage defaults
pub const DEFAULT_STATIC_PATH: &str = "./static";
pub const DEFAULT_INDEX_FILE: &str = "./templates/index.html";

// EPG defaults
pub const DEFAULT_EPG_DAYS: u32 = 2;

// Channel defaults
pub const DEFAULT_SEED_SAMPLE_CHANNELS: bool = true;
