use super::traits::Led;
use embassy_stm32::gpio::Output;

/// LD2 on PA5. The LED sits between the pin and ground, so it is active
/// high (unlike the open-collector LEDs on many hobby boards).
pub struct GpioLed<'d> {
    pin: Output<'d>,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}
