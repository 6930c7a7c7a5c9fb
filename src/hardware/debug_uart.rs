//! Blocking debug console on a USART transmitter.

use core::fmt;

use embassy_stm32::{mode::Blocking, usart::UartTx};

pub struct DebugUart<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> DebugUart<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'d> fmt::Write for DebugUart<'d> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.blocking_write(s.as_bytes()).map_err(|_| fmt::Error)?;
        self.tx.blocking_flush().map_err(|_| fmt::Error)
    }
}
