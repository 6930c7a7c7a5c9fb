//! STM32 Blue Pill GPIO Interrupt Blinky
//! =============================================================================================
//!
//! Blinks the onboard LED and switches between a slow (500 ms) and a fast
//! (250 ms) half-period on every button press.
//!
//! Hardware Connections:
//!   - Onboard LED at PC13 (active-low)
//!   - Push button between PB1 and GND (internal pull-up, EXTI1)
//!   - USART1 TX on PA9 for the startup banner (115200 8N1)
//!
//! Features:
//! 1. Falling-edge interrupt on the button line, handled by a dedicated task
//! 2. Press/loop handoff through a single coalescing flag
//! 3. Blink rate toggled once per observed press
//! 4. Any bring-up failure halts the core

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use gpio_interrupt::{
    blinky::Blinker,
    config::FirmwareConfig,
    edge::{EdgeFlag, relay_press},
    hardware::{gpio_button::GpioButton, stm32::Stm32Board},
    setup::bring_up,
};
use {defmt_rtt as _, panic_probe as _};

// Raised by the button task, consumed by the blink loop
static EDGE: EdgeFlag = EdgeFlag::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let config = FirmwareConfig::default();
    let mut board = Stm32Board::new(embassy_stm32::Config::default());

    // Bring-up failures are not recoverable on this board
    let mut hw = match bring_up(&mut board, &config) {
        Ok(hw) => hw,
        Err(e) => defmt::panic!("{}", e),
    };
    if hw.announce().is_err() {
        warn!("banner write to debug uart failed");
    }
    let _console = hw.console;

    spawner
        .spawn(button_irq(hw.button, &EDGE))
        .expect("Failed to spawn button task");

    info!(
        "blinking, long {} ms / short {} ms",
        config.blink.long_ms, config.blink.short_ms
    );

    let mut blinker = Blinker::new(hw.led, &EDGE, config.blink);
    let mut delay = Delay;

    loop {
        let iteration = blinker.step(&mut delay).await;
        if iteration.toggled {
            info!("blink interval now {} ms", iteration.interval_ms);
        }
    }
}

/// Button Interrupt Task
///
/// Woken by the EXTI1 interrupt on every falling edge. Only marks the edge;
/// the blink loop decides what to do with it.
#[embassy_executor::task]
async fn button_irq(mut button: GpioButton<'static>, edge: &'static EdgeFlag) {
    loop {
        relay_press(&mut button, edge).await;
    }
}
