//! Compile-time firmware configuration.
//!
//! The board has no storage for settings, so every knob lives here with the
//! values the Blue Pill build uses as its `Default`.

/// Half-period of the LED square wave in the slow state.
pub const DELAY_LONG_MS: u32 = 500;
/// Half-period of the LED square wave in the fast state.
pub const DELAY_SHORT_MS: u32 = 250;
/// NVIC priority level of the button's EXTI line.
pub const GPIO_INTERRUPT_PRIORITY: u8 = 3;
/// Debug UART baud rate.
pub const CONSOLE_BAUDRATE: u32 = 115_200;

/// Logic level that lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// Blink intervals for the two rate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    pub long_ms: u32,
    pub short_ms: u32,
}

impl BlinkConfig {
    pub const fn new(long_ms: u32, short_ms: u32) -> Self {
        Self { long_ms, short_ms }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::new(DELAY_LONG_MS, DELAY_SHORT_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedConfig {
    /// The PC13 LED on the Blue Pill sinks current, so it is lit at `Low`.
    pub active: ActiveLevel,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            active: ActiveLevel::Low,
        }
    }
}

/// Button input binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Interrupt priority handed to the platform as-is; lower is more urgent
    /// on Cortex-M.
    pub priority: u8,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            priority: GPIO_INTERRUPT_PRIORITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub baudrate: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            baudrate: CONSOLE_BAUDRATE,
        }
    }
}

/// Everything [`crate::setup::bring_up`] and the blink loop need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirmwareConfig {
    pub blink: BlinkConfig,
    pub led: LedConfig,
    pub button: ButtonConfig,
    pub console: ConsoleConfig,
}
