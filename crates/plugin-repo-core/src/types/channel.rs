//! Release channel definitions

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Parallel release tracks a plugin can be published to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Testing,
}

impl Channel {
    /// Every channel, in scan order
    pub const ALL: [Channel; 2] = [Channel::Stable, Channel::Testing];

    /// Directory and URL segment for this channel
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Testing => "testing",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stable" => Ok(Self::Stable),
            "testing" => Ok(Self::Testing),
            _ => Err(Error::invalid_config(format!(
                "invalid channel '{}'; expected stable|testing",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_round_trips_through_str() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let err = "beta".parse::<Channel>().unwrap_err();
        assert!(err.to_string().contains("expected stable|testing"));
    }
}
