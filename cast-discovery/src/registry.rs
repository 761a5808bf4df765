//! Registry of discoverable cast devices.
//!
//! Tracks every device the scanner has reported, keeps a liveness flag per
//! device, and reports when the set of online devices flips between empty
//! and non-empty.

use crate::device::{Device, FilterCriteria};
use crate::error::Result;
use crate::scanner::DeviceScanner;
use crate::DeviceId;

/// Availability transition of the online device set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The first device came online
    BecameAvailable,
    /// The last online device went offline
    BecameUnavailable,
}

/// Tracks currently discoverable devices.
///
/// Devices stay in the registry after going offline (with `is_online`
/// cleared) so that a reappearing device keeps its position; only online
/// devices count as discoverable.
pub struct DeviceRegistry {
    scanner: Box<dyn DeviceScanner>,
    scanning: bool,
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Create a registry driving the given scanner
    pub fn new(scanner: Box<dyn DeviceScanner>) -> Self {
        Self {
            scanner,
            scanning: false,
            devices: Vec::new(),
        }
    }

    /// Begin discovery. No-op if a scan is already running.
    pub fn start_scan(&mut self, criteria: &FilterCriteria) -> Result<()> {
        if self.scanning {
            tracing::debug!("start_scan ignored: scan already running");
            return Ok(());
        }

        criteria.validate()?;
        self.scanner.start(criteria)?;
        self.scanning = true;
        tracing::debug!(
            "Scanning for devices able to run {} (passive: {})",
            criteria.application_id,
            criteria.passive
        );
        Ok(())
    }

    /// End discovery. No-op if no scan is running.
    pub fn stop_scan(&mut self) {
        if !self.scanning {
            return;
        }

        self.scanner.stop();
        self.scanning = false;
        tracing::debug!("Scan stopped");
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Online devices, in the order they were first seen
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(|d| d.is_online)
    }

    /// Every device seen so far, including offline ones
    pub fn known_devices(&self) -> &[Device] {
        &self.devices
    }

    /// Look up an online device
    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices().find(|d| d.id == *id)
    }

    /// Number of online devices
    pub fn len(&self) -> usize {
        self.devices().count()
    }

    /// True when no device is currently discoverable
    pub fn is_empty(&self) -> bool {
        !self.devices.iter().any(|d| d.is_online)
    }

    /// Record a device coming online.
    ///
    /// A device already known by id is refreshed in place. Records with an
    /// empty id are dropped.
    pub fn device_online(&mut self, mut device: Device) -> Option<Availability> {
        if let Err(e) = device.validate() {
            tracing::warn!("Ignoring device: {}", e);
            return None;
        }

        let was_empty = self.is_empty();
        device.is_online = true;

        match self.devices.iter_mut().find(|d| d.id == device.id) {
            Some(existing) => *existing = device,
            None => self.devices.push(device),
        }

        was_empty.then_some(Availability::BecameAvailable)
    }

    /// Record a device going offline. Unknown ids are ignored.
    pub fn device_offline(&mut self, id: &DeviceId) -> Option<Availability> {
        let was_empty = self.is_empty();

        match self.devices.iter_mut().find(|d| d.id == *id) {
            Some(device) => device.is_online = false,
            None => {
                tracing::debug!("Offline event for unknown device {}", id);
                return None;
            }
        }

        (!was_empty && self.is_empty()).then_some(Availability::BecameUnavailable)
    }
}

impl std::fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("scanning", &self.scanning)
            .field("devices", &self.devices)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscoveryError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct CountingScanner {
        starts: Rc<Cell<usize>>,
        stops: Rc<Cell<usize>>,
        fail: bool,
    }

    impl DeviceScanner for CountingScanner {
        fn start(&mut self, _criteria: &FilterCriteria) -> Result<()> {
            if self.fail {
                return Err(DiscoveryError::ScannerUnavailable("no network".to_string()));
            }
            self.starts.set(self.starts.get() + 1);
            Ok(())
        }

        fn stop(&mut self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::for_application("CC1AD845")
    }

    #[test]
    fn test_start_scan_is_idempotent() {
        let scanner = CountingScanner::default();
        let mut registry = DeviceRegistry::new(Box::new(scanner.clone()));

        registry.start_scan(&criteria()).unwrap();
        registry.start_scan(&criteria()).unwrap();

        assert!(registry.is_scanning());
        assert_eq!(scanner.starts.get(), 1);
    }

    #[test]
    fn test_stop_scan_without_scan_is_noop() {
        let scanner = CountingScanner::default();
        let mut registry = DeviceRegistry::new(Box::new(scanner.clone()));

        registry.stop_scan();
        registry.stop_scan();

        assert!(!registry.is_scanning());
        assert_eq!(scanner.stops.get(), 0);

        registry.start_scan(&criteria()).unwrap();
        registry.stop_scan();
        registry.stop_scan();
        assert_eq!(scanner.stops.get(), 1);
    }

    #[test]
    fn test_failed_start_leaves_scan_inactive() {
        let scanner = CountingScanner {
            fail: true,
            ..Default::default()
        };
        let mut registry = DeviceRegistry::new(Box::new(scanner));

        assert!(registry.start_scan(&criteria()).is_err());
        assert!(!registry.is_scanning());
    }

    #[test]
    fn test_invalid_criteria_rejected() {
        let mut registry = DeviceRegistry::new(Box::new(CountingScanner::default()));
        let result = registry.start_scan(&FilterCriteria::for_application(""));
        assert!(matches!(result, Err(DiscoveryError::InvalidCriteria(_))));
    }

    #[test]
    fn test_availability_transitions() {
        let mut registry = DeviceRegistry::new(Box::new(CountingScanner::default()));
        assert!(registry.is_empty());

        assert_eq!(
            registry.device_online(Device::new("a", "A")),
            Some(Availability::BecameAvailable)
        );
        assert_eq!(registry.device_online(Device::new("b", "B")), None);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.device_offline(&DeviceId::new("a")), None);
        assert_eq!(
            registry.device_offline(&DeviceId::new("b")),
            Some(Availability::BecameUnavailable)
        );
        assert!(registry.is_empty());
        assert_eq!(registry.known_devices().len(), 2);
    }

    #[test]
    fn test_reappearing_device_refreshed_in_place() {
        let mut registry = DeviceRegistry::new(Box::new(CountingScanner::default()));
        registry.device_online(Device::new("a", "Old Name"));
        registry.device_online(Device::new("b", "B"));
        registry.device_offline(&DeviceId::new("a"));
        assert!(registry.get(&DeviceId::new("a")).is_none());

        registry.device_online(Device::new("a", "New Name"));

        let names: Vec<_> = registry.devices().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["New Name", "B"]);
    }

    #[test]
    fn test_offline_for_unknown_device_ignored() {
        let mut registry = DeviceRegistry::new(Box::new(CountingScanner::default()));
        assert_eq!(registry.device_offline(&DeviceId::new("ghost")), None);
        assert!(registry.known_devices().is_empty());
    }

    #[test]
    fn test_device_without_id_dropped() {
        let mut registry = DeviceRegistry::new(Box::new(CountingScanner::default()));
        assert_eq!(registry.device_online(Device::new("", "Nameless")), None);
        assert!(registry.is_empty());
    }
}
