#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_log_level, LOG_ENV_VAR};
pub use ship::*;
pub use strategy::*;
