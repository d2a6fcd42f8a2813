/// Constants for the region layout system
/// Docking search
pub const DEFAULT_MAX_ATTEMPTS: u32 = 200;
pub const MAX_ATTEMPT_BUDGET: u32 = 10_000;

/// Default generation parameters
pub const DEFAULT_REGION_COUNT: u32 = 5;
pub const DEFAULT_MIN_PLACES: u32 = 5;
pub const DEFAULT_MAX_PLACES: u32 = 9;

/// Grid sentinel for cells no region occupies
pub const EMPTY_LABEL: &str = "";

/// Side length of the square regions in the cross preset
pub const CROSS_REGION_SIDE: i32 = 3;
