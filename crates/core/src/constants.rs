/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Maximum length of a record name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a record category, in characters
pub const MAX_CATEGORY_LENGTH: usize = 50;

/// Maximum length of a record description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Generic message returned when a snapshot cannot be persisted
pub const SNAPSHOT_CREATE_FAILED: &str = "Failed to create snapshot";

/// Generic message returned when snapshots cannot be loaded
pub const SNAPSHOT_FETCH_FAILED: &str = "Failed to fetch snapshots";

/// Returned when a sum of record values does not fit in a `Decimal`
pub const TOTAL_OUT_OF_RANGE: &str = "Total value exceeds the supported range";
