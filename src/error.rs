//! Bring-up errors.
//!
//! Nothing can fail once the blink loop is running, so the only errors are
//! the ones raised while configuring the board. The entry point treats every
//! one of them as fatal.

use core::fmt;

pub type Result<T> = core::result::Result<T, InitError>;

/// Setup step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum InitError {
    /// Clocks or peripheral singletons could not be brought up
    Platform,
    /// Debug UART could not be configured
    DebugChannel,
    /// LED output line could not be configured
    Led,
    /// Button input line or its interrupt binding could not be configured
    Button,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Platform => write!(f, "platform init failed"),
            InitError::DebugChannel => write!(f, "debug uart init failed"),
            InitError::Led => write!(f, "led gpio init failed"),
            InitError::Button => write!(f, "button gpio init failed"),
        }
    }
}
