//! Shared constants for catalog tests

/// Commit author filtered out of changelogs by default
pub const AUTOMATION_AUTHOR: &str = "github-actions";

/// A human commit author
pub const HUMAN_AUTHOR: &str = "SlashNephy";

pub const SHA_HUMAN: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678";
pub const SHA_BOT: &str = "ffeeddccbbaa99887766554433221100ffeeddcc";

/// 2024-01-01T00:00:00Z
pub const TS_2024_UTC: &str = "2024-01-01T00:00:00Z";
pub const TS_2024_JST: &str = "2024-01-01T09:00:00+09:00";
pub const EPOCH_2024: i64 = 1_704_067_200;

/// 2024-06-01T12:00:00Z
pub const TS_JUNE_UTC: &str = "2024-06-01T12:00:00Z";
pub const EPOCH_JUNE: i64 = 1_717_243_200;

pub const REPO_URL: &str = "https://github.com/horoscope-dev/Dalamud.Divination.Plugins";

pub const DOWNLOAD_BASE: &str = "https://xiv.starry.blue/plugins";
