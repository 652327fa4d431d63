//! Calculator Kid Demo
//!
//! Plays a short session against the mock-DOM widget and prints what a
//! player would see, then runs the shared checks on both drivers.
//!
//! Run with: RUST_LOG=calculator_kid=debug cargo run --example calculator_demo

use calculator_kid::driver::{run_all_checks, CalculatorDriver, EngineDriver};
use calculator_kid::haptics::RecordingHaptics;
use calculator_kid::wasm::{ids, GameCalculator, WasmDriver};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Calculator Kid! - Demo                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let haptics = RecordingHaptics::new();
    let mut driver =
        WasmDriver::with_calculator(GameCalculator::new().with_haptics(Box::new(haptics.clone())));

    for keys in ["3+", "5×", "2=", "10÷3=", "7÷0=", "C"] {
        driver.enter(keys);
        let history = driver.history_line().unwrap_or_default();
        println!(
            "  pressed {keys:<6} │ {history:>8} │ {:>10} │ Score: {}",
            driver.display(),
            driver.score()
        );
    }

    println!();
    println!("📳 Haptic patterns fired:");
    for pattern in haptics.patterns() {
        println!("   {pattern:?}");
    }

    println!();
    println!("ℹ️  Info modal:");
    driver.click(ids::INFO_BUTTON);
    println!(
        "   open: {:?}",
        driver.dom().is_element_visible(ids::INFO_MODAL)
    );
    for section in driver.calculator().info().sections() {
        println!("   ▸ {}", section.heading);
    }
    driver.click(ids::INFO_CLOSE);

    println!();
    println!("🧪 Shared checks:");
    run_all_checks(&mut EngineDriver::new());
    println!("   ✓ engine driver");
    run_all_checks(&mut WasmDriver::new());
    println!("   ✓ wasm driver");
}
