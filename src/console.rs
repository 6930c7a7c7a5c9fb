//! Startup text on the debug channel.

use core::fmt::{self, Write};

/// ANSI escape sequence: clear screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

pub const BANNER: &str = "**************** STM32F103: GPIO Interrupt *****************\r\n";

/// Clear the terminal and print the one-line banner.
pub fn print_banner<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str(CLEAR_SCREEN)?;
    out.write_str(BANNER)
}
