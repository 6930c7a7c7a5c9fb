//! Blue Pill wiring of the [`Board`] steps.
//!
//! Hardware Connections:
//!   LED     -> PC13 (onboard, active-low)
//!   Button  -> PB1 to GND (internal pull-up, EXTI line 1)
//!   UART TX -> PA9 (USART1, 115200 8N1)

use defmt::{debug, info, warn};
use embassy_stm32::{
    Config,
    exti::ExtiInput,
    gpio::{Output, Pull, Speed},
    interrupt::{self, InterruptExt, Priority},
    peripherals::{EXTI1, PA9, PB1, PC13, USART1},
    usart::{self, UartTx},
};

use super::debug_uart::DebugUart;
use super::gpio_button::GpioButton;
use super::gpio_led::GpioLed;
use super::traits::Board;
use crate::config::{ButtonConfig, ConsoleConfig, LedConfig};
use crate::error::{InitError, Result};

/// The STM32F1 NVIC implements the upper four bits of each priority byte.
const NVIC_PRIO_BITS: u8 = 4;

pub struct Stm32Board {
    config: Option<Config>,
    led: Option<PC13>,
    button: Option<PB1>,
    button_exti: Option<EXTI1>,
    uart: Option<USART1>,
    uart_tx: Option<PA9>,
}

impl Stm32Board {
    pub fn new(config: Config) -> Self {
        Self {
            config: Some(config),
            led: None,
            button: None,
            button_exti: None,
            uart: None,
            uart_tx: None,
        }
    }
}

impl Board for Stm32Board {
    type Led = GpioLed<'static>;
    type Button = GpioButton<'static>;
    type Console = DebugUart<'static>;

    const PRIORITY_LEVELS: u8 = 1 << NVIC_PRIO_BITS;

    fn init_platform(&mut self) -> Result<()> {
        // Peripherals can only be taken once
        let config = self.config.take().ok_or(InitError::Platform)?;
        let p = embassy_stm32::init(config);

        self.led = Some(p.PC13);
        self.button = Some(p.PB1);
        self.button_exti = Some(p.EXTI1);
        self.uart = Some(p.USART1);
        self.uart_tx = Some(p.PA9);

        debug!("platform initialized");
        Ok(())
    }

    fn init_console(&mut self, config: &ConsoleConfig) -> Result<Self::Console> {
        let (Some(uart), Some(tx_pin)) = (self.uart.take(), self.uart_tx.take()) else {
            return Err(InitError::DebugChannel);
        };

        let mut uart_config = usart::Config::default();
        uart_config.baudrate = config.baudrate;

        let tx = UartTx::new_blocking(uart, tx_pin, uart_config).map_err(|_| {
            warn!("USART1 rejected {} baud", config.baudrate);
            InitError::DebugChannel
        })?;

        debug!("debug uart ready at {} baud", config.baudrate);
        Ok(DebugUart::new(tx))
    }

    fn init_led(&mut self, config: &LedConfig) -> Result<Self::Led> {
        let pin = self.led.take().ok_or(InitError::Led)?;

        // Push-pull output, starts dark
        let output = Output::new(pin, GpioLed::off_level(config.active), Speed::Low);

        debug!("led configured, active {}", config.active);
        Ok(GpioLed::new(output, config.active))
    }

    fn init_button(&mut self, config: &ButtonConfig) -> Result<Self::Button> {
        let (Some(pin), Some(exti)) = (self.button.take(), self.button_exti.take()) else {
            return Err(InitError::Button);
        };

        // Released button reads high through the pull-up; a press pulls it low
        let input = ExtiInput::new(pin, exti, Pull::Up);
        interrupt::EXTI1.set_priority(Priority::from(config.priority << (8 - NVIC_PRIO_BITS)));

        debug!("button bound to EXTI1 at priority {}", config.priority);
        Ok(GpioButton::new(input))
    }

    fn enable_interrupts(&mut self) {
        // SAFETY: no critical section is open during bring-up
        unsafe { cortex_m::interrupt::enable() };
        info!("interrupts enabled");
    }
}
