//! ANSI/VT100 cursor control sequences.
//!
//! The [`cursor`] module is the library proper: pure builders for moving,
//! hiding and erasing. The remaining modules back the `tty-cursor` binary.

pub mod command;
pub mod config;
pub mod core;
pub mod cursor;
pub mod errors;
pub mod extensions;
pub mod logging;
