//! NUCLEO-F446RE PWM Duty-Cycle Fade Example
//! Drives the user LED from a timer channel instead of the output-data
//! register:
//! 1. Routes PA5 to TIM2 channel 1 (alternate function, push-pull)
//! 2. Runs the channel in PWM mode with preload, 100 Hz update rate
//! 3. Each button press steps the duty cycle: off -> half -> full -> off
//!
//! Hardware Connections:
//!   - No external connections needed - uses onboard LED and button
//!
//! Expected Behavior:
//!   - LD2 brightness steps through 0%, 50%, 100% on successive presses
//!   - Duty changes land at the next period boundary, never mid-period

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{
    gpio::{Input, OutputType, Pull},
    time::hz,
    timer::simple_pwm::{PwmPin, SimplePwm},
};
use embassy_time::Timer;
use lab_core::fade::DutyRamp;
use nucleo_f446_lab::hardware::{gpio_button::GpioButton, pwm_led::PwmLed, traits::Button};
use {defmt_rtt as _, panic_probe as _};

const POLL_MS: u64 = 10;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Default clock tree; the timer divides whatever APB1 provides down to
    // the requested update rate
    let p = embassy_stm32::init(Default::default());

    info!("pwm_fade up, TIM2_CH1 on PA5");

    // PA5 handed to the timer as TIM2_CH1
    let led_pin = PwmPin::new_ch1(p.PA5, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM2,
        Some(led_pin),
        None,
        None,
        None,
        hz(100), // update frequency; duty resolution comes from ARR
        Default::default(),
    );

    let mut ch1 = pwm.split().ch1;
    ch1.enable();

    let mut led = PwmLed::new(ch1);
    let max = led.max_duty();

    // Off -> half -> full -> off, the half step being max/2
    let mut ramp = DutyRamp::new(max / 2, max);
    led.off();

    let button = GpioButton::new(Input::new(p.PC13, Pull::None));

    loop {
        if button.is_pressed() {
            let compare = ramp.advance();
            led.set_duty(compare);
            info!("duty {}/{} ({}%)", compare, max, ramp.percent());

            // One step per press
            while button.is_pressed() {
                Timer::after_millis(POLL_MS).await;
            }
        }
        Timer::after_millis(POLL_MS).await;
    }
}

// Implementation Notes:
// 1. The compare register is preloaded: writes take effect at the next
//    update event, so a fade step never tears a period in half
// 2. max_duty() is ARR + 1; writing it holds the output permanently high,
//    which is the 100% endpoint of the ramp
