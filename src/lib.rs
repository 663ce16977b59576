// =====================================================================
// Staff Trainer -- note reading practice for treble and bass clef
// =====================================================================
// A note is shown on a staff, the player names it with keys 1-7
// (C..B). Right answers play the note and every tenth one sets off
// fireworks.

pub mod app;
pub mod assets;
pub mod audio;
pub mod clef;
pub mod config;
pub mod error;
pub mod firework;
pub mod game;
pub mod menu;
pub mod note;
pub mod render;
pub mod round;
pub mod staff;
pub mod text;
pub mod timing;
pub mod tone;

pub use error::{Error, Result};
