//! Command implementations for the sf-registry CLI

pub mod helpers;
pub mod pack;
pub mod resolve;
pub mod unpack;
