//! Clock presets for the NUCLEO-F446RE.
//!
//! Both presets run from the 16 MHz internal RC oscillator; the board ships
//! without a crystal on the MCU. `embassy_stm32::init` performs the actual
//! bring-up sequence (oscillator ready → PLL ready → flash wait states →
//! prescalers → sysclk switch) from these values.

use embassy_stm32::Config;
use lab_core::pll;

/// HSI frequency, fixed by silicon.
pub const HSI_HZ: u32 = 16_000_000;

const PLL_M: u32 = 16;
const PLL_N: u32 = 336;
const PLL_P: u32 = 4;
const PLL_Q: u32 = 7;

// 84 MHz core, 48 MHz on the USB-class domain, legal PLL operating points.
const _: () = assert!(pll::sysclk_hz(HSI_HZ, PLL_M, PLL_N, PLL_P) == 84_000_000);
const _: () = assert!(pll::clk48_hz(HSI_HZ, PLL_M, PLL_N, PLL_Q) == 48_000_000);
const _: () = assert!(pll::comparison_in_range(HSI_HZ, PLL_M));
const _: () = assert!(pll::vco_in_range(HSI_HZ, PLL_M, PLL_N));

/// HSI straight through: 16 MHz core, all buses undivided.
pub fn hsi_16mhz() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hsi = true;
        config.rcc.sys = Sysclk::HSI;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV1;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// HSI through the main PLL: 84 MHz core, 42 MHz APB1, 84 MHz APB2.
pub fn pll_84mhz() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hsi = true;
        config.rcc.pll_src = PllSource::HSI;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV16,
            mul: PllMul::MUL336,
            divp: Some(PllPDiv::DIV4),
            divq: Some(PllQDiv::DIV7),
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
        config.rcc.sys = Sysclk::PLL1_P;
    }
    config
}
