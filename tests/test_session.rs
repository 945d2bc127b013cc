//! Integration tests for the controller session protocol sequence

use wiiext_rs::extension::constants::{
    ID_CLASSIC, ID_DJ_TURNTABLE, ID_NUNCHUK, MIN_REQUEST_SIZE,
};
use wiiext_rs::{ControllerSession, ExtensionType, MockExtensionBus};

fn nunchuk_bus() -> MockExtensionBus {
    let mut bus = MockExtensionBus::new(ID_NUNCHUK);
    bus.set_report(&[0x80, 0x7E, 0x9F, 0x12, 0x34, 0x03]);
    bus
}

#[test]
fn connect_happy_path() {
    let mut session = ControllerSession::new(nunchuk_bus());

    assert!(session.connect());
    assert_eq!(session.controller_type(), ExtensionType::Nunchuk);
    assert_eq!(session.control_bytes(), &[0x80, 0x7E, 0x9F, 0x12, 0x34, 0x03]);
}

#[test]
fn connect_fails_on_bad_init() {
    let mut session = ControllerSession::new(nunchuk_bus().fail_init());

    assert!(!session.connect());
    assert_eq!(session.controller_type(), ExtensionType::None);
}

#[test]
fn connect_fails_on_bad_poll() {
    let mut session = ControllerSession::new(nunchuk_bus().fail_request());

    assert!(!session.connect());
    // Identification still happened; only the data poll failed
    assert_eq!(session.controller_type(), ExtensionType::Nunchuk);
}

#[test]
fn disconnect_clears_state() {
    let mut session = ControllerSession::new(nunchuk_bus());
    assert!(session.connect());

    session.disconnect();

    assert_eq!(session.controller_type(), ExtensionType::None);
    assert!(session.control_bytes().iter().all(|&b| b == 0x00));
}

#[test]
fn connect_after_disconnect_is_idempotent() {
    let mut once = ControllerSession::new(nunchuk_bus());
    assert!(once.connect());

    let mut twice = ControllerSession::new(nunchuk_bus());
    assert!(twice.connect());
    twice.disconnect();
    assert!(twice.connect());

    assert_eq!(once.controller_type(), twice.controller_type());
    assert_eq!(once.control_bytes(), twice.control_bytes());
    assert_eq!(once.request_size(), twice.request_size());
}

#[test]
fn update_false_on_type_mismatch_without_bus_traffic() {
    let bus = MockExtensionBus::new(ID_CLASSIC);
    let mut session = ControllerSession::with_expected(bus, ExtensionType::GuitarController);

    assert!(!session.connect());

    let polls = session.bus().request_calls;
    assert!(!session.update());
    assert!(!session.update());
    assert_eq!(session.bus().request_calls, polls);
}

#[test]
fn update_false_when_never_connected() {
    let mut session = ControllerSession::new(nunchuk_bus());

    // No connect: wildcard expectation matches nothing
    assert!(!session.update());
    assert_eq!(session.bus().request_calls, 0);
}

#[test]
fn update_rejects_bus_noise() {
    let mut session = ControllerSession::new(nunchuk_bus());
    assert!(session.connect());

    // Controller yanked mid-session: the bus floats high
    session.bus().set_report(&[0xFF; MIN_REQUEST_SIZE]);
    assert!(!session.update());

    session.bus().set_report(&[0x00; MIN_REQUEST_SIZE]);
    assert!(!session.update());
}

#[test]
fn reconnect_recovers_without_clearing() {
    let mut session = ControllerSession::new(nunchuk_bus());
    assert!(session.connect());

    session.set_control_data(0, 0x42);
    assert!(session.reconnect());

    // Reconnect re-polled, so the byte reflects fresh bus data again
    assert_eq!(session.control_data(0), 0x80);
    assert_eq!(session.controller_type(), ExtensionType::Nunchuk);
}

#[test]
fn expected_type_enforced_across_variants() {
    let mut session = ControllerSession::with_expected(
        MockExtensionBus::new(ID_DJ_TURNTABLE),
        ExtensionType::DJTurntableController,
    );

    assert!(session.connect());
    assert_eq!(session.controller_type(), ExtensionType::DJTurntableController);
    assert!(session.update());
}

#[test]
fn unknown_signature_still_polls_under_wildcard() {
    // Something answers, but with a signature the driver cannot name
    let bus = MockExtensionBus::new([0x42, 0x00, 0xA4, 0x20, 0x7F, 0x7F]);
    let mut session = ControllerSession::new(bus);

    assert!(session.connect());
    assert_eq!(session.controller_type(), ExtensionType::Unknown);
    assert!(session.update());
}

#[test]
fn identity_read_failure_maps_to_none() {
    let mut session = ControllerSession::new(nunchuk_bus().fail_identity());

    assert!(!session.connect());
    assert_eq!(session.controller_type(), ExtensionType::None);
}

#[test]
fn control_data_round_trip() {
    let mut session = ControllerSession::new(nunchuk_bus());
    assert!(session.connect());

    session.set_control_data(2, 0xAB);
    assert_eq!(session.control_data(2), 0xAB);
}

#[test]
fn larger_request_size_fills_more_bytes() {
    let mut bus = MockExtensionBus::new(ID_CLASSIC);
    bus.set_report(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);

    let mut session = ControllerSession::new(bus);
    session.set_request_size(8);

    assert!(session.connect());
    assert_eq!(session.control_bytes().len(), 8);
    assert_eq!(session.control_data(7), 0x88);
}
