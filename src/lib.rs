//! Hebrew keyboard typing tutor.
//!
//! The core is three pieces: [`generator`] builds practice text from a
//! restricted letter set, [`session`] compares typed input against it, and
//! [`engine`] schedules vocabulary reviews with a simplified SM-2 algorithm.
//! [`store`] persists schedules and speed records.

pub mod config;
pub mod curriculum;
pub mod engine;
pub mod error;
pub mod event;
pub mod generator;
pub mod keyboard;
pub mod logging;
pub mod session;
pub mod store;
pub mod vocab;
