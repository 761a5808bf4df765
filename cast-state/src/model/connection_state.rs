//! Derived connection state

use serde::{Deserialize, Serialize};

/// Connection sub-state reported by the SDK's device manager
///
/// Used both for the transport link and for the application link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

/// Outward-facing cast state
///
/// Never set directly: always recomputed with [`ConnectionState::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    /// No device can be cast to
    #[default]
    Unavailable,
    /// An application session is being established
    Connecting,
    /// An application session is running
    Connected,
    /// Devices exist but no session is active
    Available,
}

impl ConnectionState {
    /// Derive the state from discovery and the application link
    ///
    /// `application_link` is `None` when no device manager exists.
    pub fn derive(devices_empty: bool, application_link: Option<LinkState>) -> Self {
        if devices_empty {
            return ConnectionState::Unavailable;
        }

        match application_link {
            None => ConnectionState::Unavailable,
            Some(LinkState::Connecting) => ConnectionState::Connecting,
            Some(LinkState::Connected) => ConnectionState::Connected,
            Some(_) => ConnectionState::Available,
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_is_unavailable() {
        for link in [
            None,
            Some(LinkState::Disconnected),
            Some(LinkState::Connecting),
            Some(LinkState::Connected),
            Some(LinkState::Disconnecting),
        ] {
            assert_eq!(ConnectionState::derive(true, link), ConnectionState::Unavailable);
        }
    }

    #[test]
    fn test_no_device_manager_is_unavailable() {
        assert_eq!(ConnectionState::derive(false, None), ConnectionState::Unavailable);
    }

    #[test]
    fn test_mirrors_application_link() {
        assert_eq!(
            ConnectionState::derive(false, Some(LinkState::Connecting)),
            ConnectionState::Connecting
        );
        assert_eq!(
            ConnectionState::derive(false, Some(LinkState::Connected)),
            ConnectionState::Connected
        );
        assert_eq!(
            ConnectionState::derive(false, Some(LinkState::Disconnected)),
            ConnectionState::Available
        );
        assert_eq!(
            ConnectionState::derive(false, Some(LinkState::Disconnecting)),
            ConnectionState::Available
        );
    }
}
