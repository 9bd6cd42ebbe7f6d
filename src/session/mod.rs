//! Session driver.
//!
//! A `Session` owns one `GameState` and feeds it lines of input through a
//! game's `Rules` until the phase is terminal (won, lost or quit).

mod runner;

pub use runner::Session;
