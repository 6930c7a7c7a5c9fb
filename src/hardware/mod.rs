pub mod traits;

#[cfg(feature = "stm32")]
pub mod debug_uart;
#[cfg(feature = "stm32")]
pub mod gpio_button;
#[cfg(feature = "stm32")]
pub mod gpio_led;
#[cfg(feature = "stm32")]
pub mod stm32;

#[cfg(test)]
pub mod mock;
