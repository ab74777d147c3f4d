//! Individual wizard steps
//!
//! Each step collects input and returns a result; the wizard applies it to
//! the draft manager.

pub mod contact;
pub mod details;
pub mod location;
pub mod media;
