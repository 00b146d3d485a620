//! Platform specifics for locating and starting the Java host checker.

pub mod java;
pub mod process;

mod constants;

pub use constants::{PRELOAD_ENV, executable_extension, with_executable_extension};
