//! Blink-rate state machine driven by the edge flag.
//!
//! Every iteration first consumes the [`EdgeFlag`], flipping between
//! [`BlinkRate::Long`] and [`BlinkRate::Short`] if a press was pending, then
//! runs one full on/off period of the LED. The interval is latched before the
//! LED turns on, so a press that lands mid-period only takes effect on the
//! next iteration.

use crate::config::BlinkConfig;
use crate::edge::EdgeFlag;
use crate::hardware::traits::Led;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub enum BlinkRate {
    #[default]
    Long,
    Short,
}

impl BlinkRate {
    pub const fn toggled(self) -> Self {
        match self {
            BlinkRate::Long => BlinkRate::Short,
            BlinkRate::Short => BlinkRate::Long,
        }
    }

    /// Half-period of the LED square wave for this rate.
    pub const fn interval_ms(self, config: &BlinkConfig) -> u32 {
        match self {
            BlinkRate::Long => config.long_ms,
            BlinkRate::Short => config.short_ms,
        }
    }
}

/// What one loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "stm32", derive(defmt::Format))]
pub struct Iteration {
    /// Rate in effect for this iteration
    pub rate: BlinkRate,
    pub interval_ms: u32,
    /// A pending edge was consumed at the start of this iteration
    pub toggled: bool,
}

pub struct Blinker<'a, L> {
    led: L,
    flag: &'a EdgeFlag,
    config: BlinkConfig,
    rate: BlinkRate,
}

impl<'a, L: Led> Blinker<'a, L> {
    pub fn new(led: L, flag: &'a EdgeFlag, config: BlinkConfig) -> Self {
        Self {
            led,
            flag,
            config,
            rate: BlinkRate::default(),
        }
    }

    pub fn rate(&self) -> BlinkRate {
        self.rate
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    /// Consume a pending edge and latch the interval for the coming period.
    pub fn poll_edge(&mut self) -> Iteration {
        let toggled = self.flag.take();
        if toggled {
            self.rate = self.rate.toggled();
        }

        Iteration {
            rate: self.rate,
            interval_ms: self.rate.interval_ms(&self.config),
            toggled,
        }
    }

    /// One on/off period, yielding to the executor while waiting.
    #[cfg(feature = "async")]
    pub async fn step<D>(&mut self, delay: &mut D) -> Iteration
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let iteration = self.poll_edge();

        self.led.on();
        delay.delay_ms(iteration.interval_ms).await;
        self.led.off();
        delay.delay_ms(iteration.interval_ms).await;

        iteration
    }
}
