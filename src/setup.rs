//! One-time bring-up sequence run before the blink loop.

use core::fmt;

use crate::config::FirmwareConfig;
use crate::console;
use crate::error::{InitError, Result};
use crate::hardware::traits::Board;

/// Peripherals handed over to the running firmware.
pub struct Hardware<B: Board> {
    pub led: B::Led,
    pub button: B::Button,
    pub console: B::Console,
}

impl<B: Board> Hardware<B> {
    /// Clear the terminal and print the banner on the debug channel.
    pub fn announce(&mut self) -> fmt::Result {
        console::print_banner(&mut self.console)
    }
}

/// Configure the board in a fixed order.
///
/// Returns the first failing step; nothing after it is touched, so on a button
/// failure the LED is configured but never driven on.
pub fn bring_up<B: Board>(board: &mut B, config: &FirmwareConfig) -> Result<Hardware<B>> {
    board.init_platform()?;
    let console = board.init_console(&config.console)?;
    let led = board.init_led(&config.led)?;

    if config.button.priority >= B::PRIORITY_LEVELS {
        return Err(InitError::Button);
    }
    let button = board.init_button(&config.button)?;
    board.enable_interrupts();

    Ok(Hardware {
        led,
        button,
        console,
    })
}
