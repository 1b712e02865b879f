//! NUCLEO-F446RE Polled Button Toggle Example
//! This program toggles the user LED from the user button by polling:
//! 1. Brings the core up to 84 MHz from the internal oscillator via the PLL
//! 2. Configures LD2 (PA5) as output, B1 (PC13) as input
//! 3. Toggles the LED once per press and absorbs the hold
//!
//! Hardware Connections:
//!   - No external connections needed - uses onboard LED and button
//!
//! Expected Behavior:
//!   - Each press of the blue button inverts LD2 exactly once
//!   - Holding the button does not re-toggle

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Timer;
use nucleo_f446_lab::{
    board,
    hardware::{
        gpio_button::GpioButton,
        gpio_led::GpioLed,
        traits::{Button, Led},
    },
};
use {defmt_rtt as _, panic_probe as _};

/// How often the button level is sampled.
const POLL_MS: u64 = 10;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // 84 MHz core clock, the bring-up this exercise is really about
    let p = embassy_stm32::init(board::pll_84mhz());

    info!("button_toggle up, core at 84 MHz");

    let mut led = GpioLed::new(Output::new(p.PA5, Level::Low, Speed::High));
    // The board provides the resistor network, so no internal pull
    let button = GpioButton::new(Input::new(p.PC13, Pull::None));

    led.off();

    loop {
        if button.is_pressed() {
            led.toggle();
            info!("press, LED toggled");

            // Absorb the hold: one toggle per press, not per sample
            while button.is_pressed() {
                Timer::after_millis(POLL_MS).await;
            }
        }
        Timer::after_millis(POLL_MS).await;
    }
}
