//! NUCLEO-F446RE Stepper Wave-Drive Example
//! Commutates a four-coil unipolar stepper through external driver inputs:
//! 1. Brings the core up to 84 MHz from the internal oscillator via the PLL
//! 2. Configures PA6..PA9 as push-pull outputs for the coil lines
//! 3. Energizes one coil at a time in the fixed order A1, B1, A2, B2
//!
//! Hardware Connections:
//!   - PA6 -> driver input A1
//!   - PA7 -> driver input B1
//!   - PA8 -> driver input A2
//!   - PA9 -> driver input B2
//!
//! Expected Behavior:
//!   - The motor steps continuously, one phase per tick, open loop
//!   - There is no position feedback; hold time per phase is fixed

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::{Duration, Ticker};
use lab_core::wave::WaveDrive;
use nucleo_f446_lab::board;
use {defmt_rtt as _, panic_probe as _};

/// Hold time per phase. Every phase gets the same fixed duration.
const STEP_INTERVAL: Duration = Duration::from_millis(10);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(board::pll_84mhz());

    info!("stepper up, wave drive on PA6..PA9");

    // Coil lines in firing order; all released until the first step
    let coils = [
        Output::new(p.PA6, Level::Low, Speed::High), // A1
        Output::new(p.PA7, Level::Low, Speed::High), // B1
        Output::new(p.PA8, Level::Low, Speed::High), // A2
        Output::new(p.PA9, Level::Low, Speed::High), // B2
    ];
    let mut drive = WaveDrive::new(coils);

    let mut ticker = Ticker::every(STEP_INTERVAL);

    loop {
        ticker.next().await;
        let phase = drive.step();
        trace!("phase {}", phase);
    }
}
