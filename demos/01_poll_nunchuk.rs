//! Demo 01: Connect to a Nunchuk and poll control data
//!
//! Uses the mock bus scripted as a Nunchuk. Run with:
//!   cargo run --example 01_poll_nunchuk

use wiiext_rs::extension::constants::ID_NUNCHUK;
use wiiext_rs::{ControllerSession, ExtensionType, MockExtensionBus};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut bus = MockExtensionBus::new(ID_NUNCHUK);
    bus.set_report(&[0x80, 0x7E, 0x9F, 0x12, 0x34, 0x03]);

    let mut session = ControllerSession::with_expected(bus, ExtensionType::Nunchuk);
    session.begin();

    if !session.connect() {
        eprintln!("Nunchuk not found");
        return;
    }

    println!("Connected: {}", session.controller_type());

    for _ in 0..5 {
        if session.update() {
            let mut line = String::new();
            let _ = session.write_debug_raw(&mut line);
            println!("{}", line);
        }
    }

    session.disconnect();
}
