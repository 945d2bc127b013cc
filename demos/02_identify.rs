//! Demo 02: Identify whatever controller answers on the bus
//!
//! Scripts the mock bus with each known identity signature in turn and
//! shows how the wildcard session reports them. Run with:
//!   cargo run --example 02_identify

use wiiext_rs::extension::constants::{
    ID_CLASSIC, ID_DJ_TURNTABLE, ID_DRAWSOME, ID_DRUMS, ID_GUITAR, ID_NUNCHUK, ID_UDRAW,
};
use wiiext_rs::{ControllerSession, MockExtensionBus};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let identities = [
        ID_NUNCHUK,
        ID_CLASSIC,
        ID_GUITAR,
        ID_DRUMS,
        ID_DJ_TURNTABLE,
        ID_UDRAW,
        ID_DRAWSOME,
        // Something off-brand
        [0x42, 0x00, 0xA4, 0x20, 0x7F, 0x7F],
    ];

    for identity in identities {
        let mut session = ControllerSession::new(MockExtensionBus::new(identity));
        session.begin();
        session.connect();

        let mut id_line = String::new();
        let _ = session.write_debug_id(&mut id_line);
        println!("{:<20} <- {}", session.controller_type().to_string(), id_line);
    }
}
