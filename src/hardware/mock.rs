//! Host-side stand-ins for the board, LED, button and delay.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use super::traits::{Board, Button, Led};
use crate::config::{ButtonConfig, ConsoleConfig, LedConfig};
use crate::edge::EdgeFlag;
use crate::error::{InitError, Result};

/// Records every level the LED was driven to (`true` = lit).
#[derive(Debug, Default)]
pub struct MockLed {
    lit: bool,
    history: Rc<RefCell<Vec<bool>>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_history(history: Rc<RefCell<Vec<bool>>>) -> Self {
        Self { lit: false, history }
    }

    pub fn is_on(&self) -> bool {
        self.lit
    }

    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }

    fn drive(&mut self, lit: bool) {
        self.lit = lit;
        self.history.borrow_mut().push(lit);
    }
}

impl Led for MockLed {
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }
}

/// Button that is "pressed" every time it is awaited.
#[derive(Debug, Default)]
pub struct MockButton {
    presses: usize,
}

impl MockButton {
    pub fn presses(&self) -> usize {
        self.presses
    }
}

impl Button for MockButton {
    async fn wait_for_press(&mut self) {
        self.presses += 1;
    }
}

/// Simulated delay: returns immediately and keeps a log of requested waits.
///
/// Optionally raises an [`EdgeFlag`] when the n-th wait starts, which stands in
/// for a button press arriving while the main loop is sleeping.
#[derive(Debug, Default)]
pub struct MockDelay<'a> {
    delays_ms: Vec<u32>,
    press_on_call: Option<(usize, &'a EdgeFlag)>,
}

impl<'a> MockDelay<'a> {
    pub fn new() -> Self {
        Self {
            delays_ms: Vec::new(),
            press_on_call: None,
        }
    }

    pub fn raising_on_call(mut self, call: usize, flag: &'a EdgeFlag) -> Self {
        self.press_on_call = Some((call, flag));
        self
    }

    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&ms| u64::from(ms)).sum()
    }

    fn record(&mut self, ms: u32) {
        if let Some((call, flag)) = self.press_on_call {
            if call == self.delays_ms.len() {
                flag.raise();
            }
        }
        self.delays_ms.push(ms);
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns.div_ceil(1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}

#[derive(Debug, Default)]
pub struct MockConsole {
    output: Rc<RefCell<String>>,
    broken: bool,
}

impl fmt::Write for MockConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.broken {
            return Err(fmt::Error);
        }
        self.output.borrow_mut().push_str(s);
        Ok(())
    }
}

/// Board whose bring-up can be made to fail at a chosen step.
#[derive(Debug, Default)]
pub struct MockBoard {
    fail_at: Option<InitError>,
    steps: Vec<&'static str>,
    led_history: Rc<RefCell<Vec<bool>>>,
    console_output: Rc<RefCell<String>>,
    button_priority: Option<u8>,
    interrupts_enabled: bool,
    broken_console: bool,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(step: InitError) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }

    /// Console initializes fine but every write fails.
    pub fn with_broken_console() -> Self {
        Self {
            broken_console: true,
            ..Self::default()
        }
    }

    pub fn steps(&self) -> &[&'static str] {
        &self.steps
    }

    /// Every level driven on any LED this board handed out.
    pub fn led_history(&self) -> Vec<bool> {
        self.led_history.borrow().clone()
    }

    pub fn console_output(&self) -> String {
        self.console_output.borrow().clone()
    }

    pub fn button_priority(&self) -> Option<u8> {
        self.button_priority
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    fn step(&mut self, name: &'static str, err: InitError) -> Result<()> {
        self.steps.push(name);
        if self.fail_at == Some(err) {
            return Err(err);
        }
        Ok(())
    }
}

impl Board for MockBoard {
    type Led = MockLed;
    type Button = MockButton;
    type Console = MockConsole;

    const PRIORITY_LEVELS: u8 = 16;

    fn init_platform(&mut self) -> Result<()> {
        self.step("platform", InitError::Platform)
    }

    fn init_console(&mut self, _config: &ConsoleConfig) -> Result<Self::Console> {
        self.step("console", InitError::DebugChannel)?;
        Ok(MockConsole {
            output: Rc::clone(&self.console_output),
            broken: self.broken_console,
        })
    }

    fn init_led(&mut self, _config: &LedConfig) -> Result<Self::Led> {
        self.step("led", InitError::Led)?;
        Ok(MockLed::with_history(Rc::clone(&self.led_history)))
    }

    fn init_button(&mut self, config: &ButtonConfig) -> Result<Self::Button> {
        self.step("button", InitError::Button)?;
        self.button_priority = Some(config.priority);
        Ok(MockButton::default())
    }

    fn enable_interrupts(&mut self) {
        self.steps.push("interrupts");
        self.interrupts_enabled = true;
    }
}
