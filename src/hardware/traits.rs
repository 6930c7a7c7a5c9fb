use core::fmt;

use crate::config::{ButtonConfig, ConsoleConfig, LedConfig};
use crate::error::Result;

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
}

// Only polled from a single executor task, so no Send bound is needed
#[allow(async_fn_in_trait)]
pub trait Button {
    /// Resolves on the next press (falling edge of the input line).
    async fn wait_for_press(&mut self);
}

/// Board bring-up steps, in the order [`crate::setup::bring_up`] runs them.
///
/// Each step hands out the configured peripheral so the board can only give
/// away a pin once. Any `Err` is fatal for the firmware.
pub trait Board {
    type Led: Led;
    type Button: Button;
    type Console: fmt::Write;

    /// Number of interrupt priority levels the platform implements.
    const PRIORITY_LEVELS: u8;

    fn init_platform(&mut self) -> Result<()>;

    fn init_console(&mut self, config: &ConsoleConfig) -> Result<Self::Console>;

    /// Push-pull output, left in its off level.
    fn init_led(&mut self, config: &LedConfig) -> Result<Self::Led>;

    /// Pull-up input bound to a falling-edge interrupt at `config.priority`,
    /// already checked against [`Board::PRIORITY_LEVELS`].
    fn init_button(&mut self, config: &ButtonConfig) -> Result<Self::Button>;

    fn enable_interrupts(&mut self);
}
