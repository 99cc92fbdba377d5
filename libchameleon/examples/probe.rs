//! Query a device over its serial port.
//!
//! Usage:
//!   cargo run -p libchameleon --example probe -- /dev/ttyACM0 [key-a-hex]

use anyhow::{Context, Result};
use libchameleon::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let port = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            let ports = SerialTransport::available_ports()?;
            println!("usage: probe <port>; available ports: {:?}", ports);
            return Ok(());
        }
    };

    let dev = Device::open_serial(&port).with_context(|| format!("opening {}", port))?;
    let p = dev.positive();

    let version = p.get_app_version()?;
    println!("firmware version: {}.{}", version >> 8, version & 0xff);
    println!("chip id: {}", p.get_device_chip_id()?);
    println!("ble address: {}", p.get_device_address()?);
    let reader = p.is_reader_device_mode()?;
    println!("mode: {}", if reader { "reader" } else { "tag emulation" });

    for slot in 1..=libchameleon::constants::SLOT_COUNT {
        for sense in [SenseType::Hf, SenseType::Lf] {
            match p.get_slot_tag_nick_name(slot, sense) {
                Ok(name) => println!("slot {} {}: {}", slot, sense, name),
                Err(e @ Error::NegativeResponse { .. }) => {
                    println!("slot {} {}: <{}>", slot, sense, e)
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    if reader {
        match p.scan_tag_14a() {
            Ok(frame) => println!("14a tag: {}", bytes_to_hex_spaced(&frame.payload)),
            Err(e) => println!("no 14a tag: {}", e),
        }
        if let Some(key_hex) = std::env::args().nth(2) {
            let key = parse_hex(&key_hex)?;
            match p.auth_mf1_key(0, KeyType::A, &key) {
                Ok(true) => println!("key A {} opens block 0", key_hex),
                Ok(false) => println!("key A {} rejected", key_hex),
                Err(e) => println!("key check failed: {}", e),
            }
        }
        match p.read_em_410x() {
            Ok(id) => println!("em410x: {}", id.to_hex()),
            Err(e) => println!("no em410x tag: {}", e),
        }
    }

    dev.close()?;
    Ok(())
}
