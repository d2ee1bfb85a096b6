#![deny(warnings)]
#![no_std]

mod fixedi128;
#[cfg(test)]
mod test;

pub use fixedi128::*;

/// Percent representation
pub const PERCENTAGE_FACTOR: u32 = 10_000;
