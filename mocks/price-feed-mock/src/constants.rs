pub const DECIMALS: u32 = 14;

/// Tick period, seconds
pub const RESOLUTION: u32 = 300;
