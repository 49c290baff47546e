//! bubblepop - a bubble-clicking toy for the terminal.
//!
//! Colored bubbles drift up a braille canvas; click them with the mouse.
//! Pink ones score +1 while every other color costs a point, and each pop
//! bursts into fading stars. The simulation in [`sim`] is headless and
//! seedable so it can be driven straight from tests; everything that
//! touches the terminal or the speaker lives in the host modules.

pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod model;
pub mod noise;
pub mod render;
pub mod sim;

pub use sim::{ClickOutcome, Game};
