//! Region selection and endpoint targets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::AlbionError;

/// Albion Online server region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    /// Americas (west) server.
    #[default]
    Americas,
    /// Asia (east) server.
    Asia,
    /// Europe server.
    Europe,
}

impl Region {
    /// Returns the region name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
        }
    }

    /// Returns the gameinfo API base URL for this region.
    #[must_use]
    pub const fn api_url(&self) -> &'static str {
        match self {
            Self::Americas => "https://gameinfo.albiononline.com/api/gameinfo",
            Self::Asia => "https://gameinfo-sgp.albiononline.com/api/gameinfo",
            Self::Europe => "https://gameinfo-ams.albiononline.com/api/gameinfo",
        }
    }

    /// Returns the server status URL for this region.
    #[must_use]
    pub const fn status_url(&self) -> &'static str {
        match self {
            Self::Americas => "http://serverstatus.albiononline.com/",
            Self::Asia => "http://serverstatus-sgp.albiononline.com/",
            Self::Europe => "http://serverstatus-ams.albiononline.com/",
        }
    }

    /// Returns the pair of base URLs for this region.
    #[must_use]
    pub fn target(&self) -> EndpointTarget {
        EndpointTarget::new(self.api_url(), self.status_url())
    }

    /// Returns all regions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Americas, Self::Asia, Self::Europe]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = AlbionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "americas" | "america" | "west" | "us" => Ok(Self::Americas),
            "asia" | "east" | "sgp" => Ok(Self::Asia),
            "europe" | "eu" | "ams" => Ok(Self::Europe),
            _ => Err(AlbionError::InvalidRegion(s.to_string())),
        }
    }
}

/// The pair of base URLs a client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointTarget {
    api_url: String,
    status_url: String,
}

impl EndpointTarget {
    /// Creates a target from explicit base URLs.
    ///
    /// A trailing slash on `api_url` is dropped so paths can be appended
    /// verbatim.
    #[must_use]
    pub fn new(api_url: impl Into<String>, status_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            status_url: status_url.into(),
        }
    }

    /// Returns the data API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the status API URL.
    #[must_use]
    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}

impl From<Region> for EndpointTarget {
    fn from(region: Region) -> Self {
        region.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse() {
        assert_eq!("Americas".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!("asia".parse::<Region>().unwrap(), Region::Asia);
        assert_eq!(" EU ".parse::<Region>().unwrap(), Region::Europe);
    }

    #[test]
    fn test_region_parse_rejects_unknown() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        assert!(matches!(err, AlbionError::InvalidRegion(ref r) if r == "Atlantis"));
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_targets_are_distinct() {
        let targets: Vec<_> = Region::all().iter().map(Region::target).collect();
        assert_eq!(targets.len(), 3);
        assert_ne!(targets[0], targets[1]);
        assert_ne!(targets[1], targets[2]);
        assert_eq!(
            Region::Europe.target().api_url(),
            "https://gameinfo-ams.albiononline.com/api/gameinfo"
        );
    }

    #[test]
    fn test_target_trims_trailing_slash() {
        let target = EndpointTarget::new("http://127.0.0.1:9000/api/", "http://127.0.0.1:9000/status");
        assert_eq!(target.api_url(), "http://127.0.0.1:9000/api");
        assert_eq!(target.status_url(), "http://127.0.0.1:9000/status");
    }
}
