use super::traits::Button;
use embassy_stm32::gpio::Input;

/// B1 on PC13. The board's divider network makes the pin read high while
/// the button is held, so no internal pull is configured.
pub struct GpioButton<'d> {
    pin: Input<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> Button for GpioButton<'d> {
    fn is_pressed(&self) -> bool {
        self.pin.is_high()
    }
}
