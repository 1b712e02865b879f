//! Clock-tree arithmetic for the STM32F4 main PLL.
//!
//! f(VCO) = f(input) / M × N, f(SYSCLK) = f(VCO) / P, f(48 MHz domain) =
//! f(VCO) / Q. `const` so board presets can assert their dividers at compile
//! time.

pub const fn vco_hz(input_hz: u32, m: u32, n: u32) -> u32 {
    input_hz / m * n
}

pub const fn sysclk_hz(input_hz: u32, m: u32, n: u32, p: u32) -> u32 {
    vco_hz(input_hz, m, n) / p
}

pub const fn clk48_hz(input_hz: u32, m: u32, n: u32, q: u32) -> u32 {
    vco_hz(input_hz, m, n) / q
}

/// The reference manual wants the PLL comparison frequency (input / M)
/// inside 1..=2 MHz for low jitter.
pub const fn comparison_in_range(input_hz: u32, m: u32) -> bool {
    let f = input_hz / m;
    1_000_000 <= f && f <= 2_000_000
}

/// VCO output must sit inside 100..=432 MHz.
pub const fn vco_in_range(input_hz: u32, m: u32, n: u32) -> bool {
    let f = vco_hz(input_hz, m, n);
    100_000_000 <= f && f <= 432_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    const HSI_HZ: u32 = 16_000_000;

    #[test]
    fn lab_dividers_give_84mhz_core() {
        // HSI / 16 × 336 / 4, the bring-up used by the exercises.
        assert_eq!(sysclk_hz(HSI_HZ, 16, 336, 4), 84_000_000);
    }

    #[test]
    fn lab_dividers_give_48mhz_usb_domain() {
        assert_eq!(clk48_hz(HSI_HZ, 16, 336, 7), 48_000_000);
    }

    #[test]
    fn lab_dividers_respect_pll_input_limits() {
        assert!(comparison_in_range(HSI_HZ, 16));
        assert!(vco_in_range(HSI_HZ, 16, 336));
    }

    #[test]
    fn out_of_range_configurations_are_flagged() {
        // M = 4 leaves a 4 MHz comparison clock, outside the manual's range.
        assert!(!comparison_in_range(HSI_HZ, 4));
        assert!(!vco_in_range(HSI_HZ, 16, 32));
    }
}
