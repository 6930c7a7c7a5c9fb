use super::traits::Led;
use crate::config::ActiveLevel;
use embassy_stm32::gpio::{Level, Output};

pub struct GpioLed<'d> {
    pin: Output<'d>,
    active: ActiveLevel,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Pin level that leaves an LED wired for `active` dark.
    pub fn off_level(active: ActiveLevel) -> Level {
        match active {
            ActiveLevel::High => Level::Low,
            ActiveLevel::Low => Level::High,
        }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        match self.active {
            ActiveLevel::High => self.pin.set_high(),
            ActiveLevel::Low => self.pin.set_low(),
        }
    }

    fn off(&mut self) {
        self.pin.set_level(Self::off_level(self.active));
    }
}
