//! Property and table tests for the device registry

use cast_discovery::{Availability, Device, DeviceId, DeviceRegistry, ManualScanner};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone)]
enum Op {
    Online(u8),
    Offline(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..5).prop_map(Op::Online),
        (0u8..5).prop_map(Op::Offline),
    ]
}

fn device_for(n: u8) -> Device {
    Device::new(format!("device-{}", n), format!("Device {}", n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The registry is empty exactly when no device is online, and
    /// availability transitions only fire when emptiness flips.
    #[test]
    fn prop_availability_tracks_emptiness(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut registry = DeviceRegistry::new(Box::new(ManualScanner::new()));
        let mut online = std::collections::HashSet::new();

        for op in ops {
            let was_empty = registry.is_empty();
            let change = match op {
                Op::Online(n) => {
                    online.insert(n);
                    registry.device_online(device_for(n))
                }
                Op::Offline(n) => {
                    online.remove(&n);
                    registry.device_offline(&DeviceId::new(format!("device-{}", n)))
                }
            };

            prop_assert_eq!(registry.is_empty(), online.is_empty());
            prop_assert_eq!(registry.len(), online.len());

            match change {
                Some(Availability::BecameAvailable) => prop_assert!(was_empty && !registry.is_empty()),
                Some(Availability::BecameUnavailable) => prop_assert!(!was_empty && registry.is_empty()),
                None => prop_assert_eq!(was_empty, registry.is_empty()),
            }
        }
    }
}

#[rstest]
#[case("uuid:ABC-123", "uuid:ABC-123")]
#[case("abc-123", "abc-123")]
#[case("  ABC-123\n", "ABC-123")]
fn test_device_ids_kept_verbatim(#[case] raw: &str, #[case] expected: &str) {
    let mut registry = DeviceRegistry::new(Box::new(ManualScanner::new()));
    registry.device_online(Device::new(raw, "TV"));

    let device = registry.get(&DeviceId::new(expected)).unwrap();
    assert_eq!(device.id.as_str(), expected);
}

#[test]
fn test_ids_differing_in_case_are_separate_devices() {
    let mut registry = DeviceRegistry::new(Box::new(ManualScanner::new()));
    registry.device_online(Device::new("uuid:AbC", "Kitchen"));
    registry.device_online(Device::new("uuid:abc", "Office"));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(&DeviceId::new("uuid:AbC")).unwrap().name, "Kitchen");
}
