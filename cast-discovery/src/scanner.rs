//! Scanner seam over the external discovery SDK.

use crate::device::FilterCriteria;
use crate::error::Result;

/// Starts and stops the SDK's device scanner.
///
/// Discovery results are not returned from here: the SDK reports devices
/// coming online or going offline as events, which the owner of the
/// registry feeds into [`DeviceRegistry::device_online`] and
/// [`DeviceRegistry::device_offline`].
///
/// [`DeviceRegistry::device_online`]: crate::DeviceRegistry::device_online
/// [`DeviceRegistry::device_offline`]: crate::DeviceRegistry::device_offline
pub trait DeviceScanner {
    /// Begin scanning for devices matching `criteria`
    fn start(&mut self, criteria: &FilterCriteria) -> Result<()>;

    /// Stop scanning
    fn stop(&mut self);
}

/// Scanner that never touches the network.
///
/// Useful when device events are injected by hand, e.g. from an SDK adapter
/// that runs its own scanner or from tests.
#[derive(Debug, Default, Clone)]
pub struct ManualScanner {
    starts: usize,
    stops: usize,
}

impl ManualScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `start` was called
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// Number of times `stop` was called
    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl DeviceScanner for ManualScanner {
    fn start(&mut self, _criteria: &FilterCriteria) -> Result<()> {
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}
