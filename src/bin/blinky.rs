//! NUCLEO-F446RE Basic Blinky Example
//! This is a minimal embedded Rust program that blinks the green user LED
//! (LD2, PA5) on the NUCLEO-F446RE board. It demonstrates:
//! 1. Basic no_std/no_main setup
//! 2. GPIO output configuration
//! 3. Timer-paced toggling with embassy-time
//! 4. Logging with defmt
//!
//! Hardware Connection:
//!   - No external connections needed - uses onboard LED at PA5
//!
//! Expected Behavior:
//!   - LD2 blinks with a 500ms half-period
//!   - Debug messages will be output via defmt RTT

#![no_std] // Disable Rust standard library (required for embedded)
#![no_main] // Disable standard main interface

use defmt::*; // Formatted logging macros
use embassy_executor::Spawner; // Async executor
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::{Duration, Ticker};
use nucleo_f446_lab::hardware::{gpio_led::GpioLed, traits::Led};
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    // (HSI at reset frequency; the blink rate does not depend on it)
    let p = embassy_stm32::init(Default::default());

    info!("blinky up");

    // Configure onboard LED (PA5) as push-pull output, starting dark
    let mut led = GpioLed::new(Output::new(
        p.PA5,       // Onboard LED pin
        Level::Low,  // Initial state (off, LD2 is active high)
        Speed::Low,  // Suitable speed for simple blinking
    ));

    // A ticker keeps the period fixed regardless of loop-body time
    let mut ticker = Ticker::every(Duration::from_millis(500));

    // Main application loop
    loop {
        led.toggle();
        info!("LED toggled");
        ticker.next().await;
    }
}

// Notes:
// 1. The `#[embassy_executor::main]` macro sets up the async runtime
// 2. `defmt_rtt` enables logging over RTT (Real Time Transfer)
// 3. `panic_probe` provides panic handling with defmt integration
// 4. GPIO speed is set to Low as we don't need fast toggling for blinking
