//! Cast device discovery
//!
//! This crate tracks the receivers surfaced by an external cast SDK's
//! scanner. The SDK performs the actual network discovery; this crate owns
//! the bookkeeping on top of it.
//!
//! # Quick Start
//!
//! ```
//! use cast_discovery::{Availability, Device, DeviceRegistry, FilterCriteria, ManualScanner};
//!
//! let mut registry = DeviceRegistry::new(Box::new(ManualScanner::new()));
//! registry.start_scan(&FilterCriteria::for_application("CC1AD845")).unwrap();
//!
//! // Feed scanner callbacks into the registry
//! let change = registry.device_online(Device::new("uuid:4a1f", "Living Room TV"));
//! assert_eq!(change, Some(Availability::BecameAvailable));
//!
//! for device in registry.devices() {
//!     println!("Found {} ({})", device.name, device.id);
//! }
//! ```

mod device;
mod device_id;
mod error;
mod registry;
mod scanner;

pub use device::{Device, FilterCriteria};
pub use device_id::DeviceId;
pub use error::{DiscoveryError, Result};
pub use registry::{Availability, DeviceRegistry};
pub use scanner::{DeviceScanner, ManualScanner};
