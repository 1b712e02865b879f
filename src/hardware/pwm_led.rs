use embedded_hal::pwm::SetDutyCycle;

/// An LED on a timer output-compare channel. Duty writes land in the
/// preloaded compare register and take effect at the next update event, so
/// brightness changes never tear mid-period.
pub struct PwmLed<T> {
    ch: T,
}

impl<T: SetDutyCycle> PwmLed<T> {
    pub fn new(ch: T) -> Self {
        Self { ch }
    }

    /// Compare value the channel treats as always-on (ARR + 1).
    pub fn max_duty(&self) -> u16 {
        self.ch.max_duty_cycle()
    }

    pub fn set_duty(&mut self, compare: u16) {
        self.ch.set_duty_cycle(compare).unwrap();
    }

    pub fn off(&mut self) {
        self.ch.set_duty_cycle_fully_off().unwrap();
    }
}
