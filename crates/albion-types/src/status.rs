//! Server status reported by the status hosts.

use serde::{Deserialize, Serialize};

/// Coarse availability of a game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Accepting logins.
    Online,
    /// Coming back up after maintenance.
    Starting,
    /// Down or unreachable.
    Offline,
}

impl StatusKind {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Starting => "starting",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status payload, e.g. `{"status": "online", "message": "All good."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ServerStatus {
    /// The server is up.
    Online {
        /// Message from the status host.
        message: String,
    },
    /// The server is starting.
    Starting {
        /// Message from the status host.
        message: String,
    },
    /// The server is down, or the status host answered with an error.
    Offline {
        /// Message from the status host, or a synthesized explanation.
        message: String,
    },
}

impl ServerStatus {
    /// Creates an offline status for a status host that answered with `status_code`.
    #[must_use]
    pub fn unreachable(status_code: u16) -> Self {
        Self::Offline {
            message: format!(
                "Albion status server returned a status code of {status_code}, \
                 the server is most likely down for maintenance"
            ),
        }
    }

    /// Returns the status kind.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        match self {
            Self::Online { .. } => StatusKind::Online,
            Self::Starting { .. } => StatusKind::Starting,
            Self::Offline { .. } => StatusKind::Offline,
        }
    }

    /// Returns the status message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Online { message } | Self::Starting { message } | Self::Offline { message } => {
                message
            }
        }
    }

    /// Returns true if the server is online.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialize() {
        let status: ServerStatus =
            serde_json::from_str(r#"{"status":"online","message":"All good."}"#).unwrap();
        assert!(status.is_online());
        assert_eq!(status.message(), "All good.");

        let status: ServerStatus =
            serde_json::from_str(r#"{"status":"starting","message":"Server is starting."}"#)
                .unwrap();
        assert_eq!(status.kind(), StatusKind::Starting);
    }

    #[test]
    fn test_status_rejects_unknown_kind() {
        let result = serde_json::from_str::<ServerStatus>(r#"{"status":"melting","message":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unreachable_mentions_code() {
        let status = ServerStatus::unreachable(503);
        assert_eq!(status.kind(), StatusKind::Offline);
        assert!(status.message().contains("503"));
        assert_eq!(
            serde_json::to_value(&status).unwrap()["status"],
            serde_json::json!("offline")
        );
    }
}
