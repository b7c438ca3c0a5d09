//! Home Session
//!
//! This example walks a home through a short evening.
//!
//! Key concepts:
//! - Mode fan-out over lights, televisions and sound systems
//! - Critical devices refusing to power off
//! - Prototype-style device cloning with copied configuration
//! - Authoritative undo/redo over power snapshots
//!
//! Run with: RUST_LOG=debug cargo run --example home_session

use hearth::device::{Brand, Device, DeviceKind};
use hearth::home::{Home, StateOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> hearth::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Home Session ===\n");

    let mut home = Home::builder().history_capacity(10).build()?;
    home.start();
    println!("Started with {} devices\n", home.all_devices().len());

    // Dim the first light, then add two more that inherit its settings
    if let Some(appearance) = home.devices(DeviceKind::Light)[0]
        .borrow_mut()
        .appearance_mut()
    {
        appearance.set_brightness(60);
    }
    let added = home.add_devices(DeviceKind::Light, 2, Brand::Secondary)?;
    println!("Added {added} lights");

    // Party, then a film
    let report = home.change_mode('P')?;
    println!("Party mode: {} switched, {} unchanged", report.switched, report.unchanged);
    home.change_mode('C')?;
    println!("Cinema mode active: {}\n", home.current_mode());

    // Detectors never switch off
    let report = home.power_off_all();
    println!("Power off all: {} switched, {} refused", report.switched, report.refused);
    let smoke = &home.devices(DeviceKind::SmokeDetector)[0];
    println!("Smoke detector still on: {}\n", smoke.borrow().is_powered_on());

    home.change_state('S')?;
    println!("{}\n", home.history().display_history());

    // Step back twice and forward once
    match home.change_state('P')? {
        StateOutcome::Restored(restoration) => {
            println!("Previous state restored: {}", restoration.snapshot)
        }
        StateOutcome::Switched(state) => println!("Switched to {state}"),
    }
    let restoration = home.undo()?;
    println!("Undo restored mode {}", restoration.snapshot.mode_name());
    home.redo()?;
    println!("Redo restored mode {}\n", home.current_mode());

    if let Err(err) = home.change_mode('X') {
        println!("Rejected: {err}\n");
    }

    println!("{}\n", home.status());

    let report = home.shutdown();
    println!("Shutdown: {} switched off, {} refused", report.switched, report.refused);

    println!("\n=== Example Complete ===");
    Ok(())
}
