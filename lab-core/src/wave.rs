//! Four-coil wave-drive commutation for a unipolar stepper.
//!
//! The coil order is A1 → B1 → A2 → B2, one coil energized at a time. Phase
//! hold time is owned by the caller; `step` only moves the outputs.

use embedded_hal::digital::OutputPin;

/// Coils per electrical revolution.
pub const COIL_COUNT: usize = 4;

pub struct WaveDrive<P> {
    coils: [P; COIL_COUNT],
    phase: Option<usize>,
}

impl<P: OutputPin> WaveDrive<P> {
    /// Takes the coil pins in firing order (A1, B1, A2, B2) and releases
    /// them all. Nothing is energized until the first `step`.
    pub fn new(coils: [P; COIL_COUNT]) -> Self {
        let mut drive = Self { coils, phase: None };
        drive.release();
        drive
    }

    /// Advance one phase. Exactly one coil is energized on return; the
    /// previous coil is dropped in the same pass. Returns the new phase
    /// index (0..COIL_COUNT).
    pub fn step(&mut self) -> usize {
        let next = match self.phase {
            Some(p) => (p + 1) % COIL_COUNT,
            None => 0,
        };
        for (i, coil) in self.coils.iter_mut().enumerate() {
            if i == next {
                coil.set_high().unwrap();
            } else {
                coil.set_low().unwrap();
            }
        }
        self.phase = Some(next);
        next
    }

    /// De-energize every coil and forget the phase.
    pub fn release(&mut self) {
        for coil in self.coils.iter_mut() {
            coil.set_low().unwrap();
        }
        self.phase = None;
    }

    /// Phase of the last `step`, or `None` while released.
    pub fn phase(&self) -> Option<usize> {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakePin(Rc<Cell<bool>>);

    impl FakePin {
        fn new() -> Self {
            FakePin(Rc::new(Cell::new(true)))
        }
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(true);
            Ok(())
        }
    }

    fn rig() -> ([FakePin; COIL_COUNT], WaveDrive<FakePin>) {
        let pins = [FakePin::new(), FakePin::new(), FakePin::new(), FakePin::new()];
        let drive = WaveDrive::new(pins.clone());
        (pins, drive)
    }

    fn energized(pins: &[FakePin; COIL_COUNT]) -> Vec<usize> {
        pins.iter()
            .enumerate()
            .filter(|(_, p)| p.0.get())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn new_drive_releases_all_coils() {
        let (pins, drive) = rig();
        assert!(energized(&pins).is_empty());
        assert_eq!(drive.phase(), None);
    }

    #[test]
    fn exactly_one_coil_energized_per_step() {
        let (pins, mut drive) = rig();
        for _ in 0..8 {
            drive.step();
            assert_eq!(energized(&pins).len(), 1);
        }
    }

    #[test]
    fn full_cycle_fires_coils_in_order_and_wraps() {
        let (pins, mut drive) = rig();
        let mut fired = Vec::new();
        for _ in 0..COIL_COUNT + 1 {
            drive.step();
            fired.push(energized(&pins)[0]);
        }
        // A1, B1, A2, B2, then back to A1.
        assert_eq!(fired, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn release_drops_every_coil_and_restarts_the_sequence() {
        let (pins, mut drive) = rig();
        drive.step();
        drive.step();
        drive.release();
        assert!(energized(&pins).is_empty());
        assert_eq!(drive.phase(), None);
        assert_eq!(drive.step(), 0);
    }
}
