#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub mod bip39;
pub mod collector;
pub mod config;
pub mod numeral;
pub mod terminal;
