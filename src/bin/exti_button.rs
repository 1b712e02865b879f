//! NUCLEO-F446RE Button Interrupt Example
//! Services the user button through the external-interrupt controller
//! instead of polling:
//! 1. Runs the core directly from the 16 MHz internal oscillator
//! 2. Routes PC13 through SYSCFG to EXTI line 13, rising-edge trigger
//! 3. A button task debounces edges and posts press events on a channel
//! 4. The main loop consumes events, toggles LD2 and logs a heartbeat
//!
//! Hardware Connections:
//!   - No external connections needed - uses onboard LED and button
//!
//! Expected Behavior:
//!   - Each press inverts LD2 exactly once; bounce inside 50ms is dropped
//!   - A status line is logged every second

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, Sender},
};
use embassy_time::{Duration, Instant, Ticker};
use lab_core::debounce::Debounce;
use nucleo_f446_lab::{
    board,
    hardware::{gpio_led::GpioLed, traits::Led},
};
use {defmt_rtt as _, panic_probe as _};

/// Edges closer together than this are treated as contact bounce.
const DEBOUNCE_MS: u64 = 50;

/// One accepted press, posted by the button task.
struct Press;

// Single-producer event channel from the interrupt path to the main loop.
// The LED itself is touched only on the consuming side.
static PRESSES: Channel<ThreadModeRawMutex, Press, 4> = Channel::new();

/// Main application entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(board::hsi_16mhz());

    info!("exti_button up, EXTI13 armed");

    // Start with the LED lit, as the original exercise does
    let mut led = GpioLed::new(Output::new(p.PA5, Level::High, Speed::High));

    // SYSCFG routing, trigger selection, unmasking and NVIC enable all
    // happen inside the EXTI driver when the wait is armed
    let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::None);

    unwrap!(spawner.spawn(button_task(button, PRESSES.sender())));

    let mut toggles: u32 = 0;
    let mut heartbeat = Ticker::every(Duration::from_secs(1));

    // Consume press events; heartbeat keeps the idle loop visible
    loop {
        match select(PRESSES.receive(), heartbeat.next()).await {
            Either::First(_) => {
                led.toggle();
                toggles += 1;
                info!("press {}, LED toggled", toggles);
            }
            Either::Second(()) => {
                info!("idle, {} toggles so far", toggles);
            }
        }
    }
}

/// Button Monitoring Task
///
/// Waits on the EXTI line, filters contact bounce, and forwards one event
/// per accepted edge. The pending bit is cleared inside the driver's
/// handler before this future is woken, so the line cannot storm.
#[embassy_executor::task]
async fn button_task(
    mut button: ExtiInput<'static>,
    events: Sender<'static, ThreadModeRawMutex, Press, 4>,
) {
    let mut filter = Debounce::new(DEBOUNCE_MS);
    loop {
        // Rising edge: the button reads high while pressed on this board
        button.wait_for_rising_edge().await;

        if filter.accept(Instant::now().as_millis()) {
            events.send(Press).await;
        }
    }
}
