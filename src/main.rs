//! Extension controller poller - Main Application
//!
//! Runs the connect / poll / verify loop against a mock bus so the
//! protocol sequence can be exercised without hardware. Point the
//! session at a real transport implementation to poll an actual
//! controller.

use anyhow::Result;
use std::thread;
use std::time::Duration;
use wiiext_rs::extension::constants::ID_NUNCHUK;
use wiiext_rs::{ControllerSession, MockExtensionBus, PollerConfig};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("=== Extension Controller Poller ===");
    println!();
    println!("This application will:");
    println!("1. Bring up the bus transport (mock: answers as a Nunchuk)");
    println!("2. Connect and identify the controller");
    println!("3. Poll control data and print it as hex");
    println!();

    let config = PollerConfig::load_default()?;

    let bus = MockExtensionBus::new(ID_NUNCHUK);
    let mut session = ControllerSession::with_expected(bus, config.expected);
    session.set_request_size(config.request_size);
    session.begin();

    let mut connected = false;
    for attempt in 1..=config.connect_retries {
        if session.connect() {
            connected = true;
            break;
        }
        println!("Connect attempt {} failed, retrying...", attempt);
        thread::sleep(Duration::from_millis(config.poll_interval_ms));
    }

    if !connected {
        anyhow::bail!("no controller found after {} attempts", config.connect_retries);
    }

    println!("Connected: {}", session.controller_type());

    let mut id_line = String::new();
    let _ = session.write_debug_id(&mut id_line);
    println!("{}", id_line);

    for _ in 0..10 {
        if session.update() {
            session.print_debug();
        } else {
            println!("Poll failed, reconnecting...");
            if !session.reconnect() {
                println!("Controller lost");
                break;
            }
        }

        thread::sleep(Duration::from_millis(config.poll_interval_ms));
    }

    session.disconnect();
    println!("Done");

    Ok(())
}
