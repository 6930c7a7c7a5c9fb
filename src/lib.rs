#![cfg_attr(not(test), no_std)]

//! Button-controlled blink-rate firmware for the STM32F103 "Blue Pill".
//!
//! The button raises an interrupt on its falling edge; the handler only marks
//! an [`edge::EdgeFlag`]. The main loop consumes that flag once per blink
//! period and switches the LED between a long and a short half-period.
//!
//! Everything outside the `stm32`-gated hardware modules is target-independent,
//! so the blink state machine and the bring-up sequence run on the host.

pub mod blinky;
pub mod config;
pub mod console;
pub mod edge;
pub mod error;
pub mod hardware;
pub mod setup;
