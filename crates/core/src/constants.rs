/// Decimal places allowed on ledger amounts (currency minor unit)
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Key format for monthly trend buckets
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Asset classes the insight provider is asked to fill in its allocation
pub const ALLOCATION_CLASSES: [&str; 3] = ["stocks", "bonds", "cash"];

/// Default timeout for the insight provider call, in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 20;

/// Largest magnitude accepted for a single amount or opening balance, in
/// whole currency units. Keeps every ledger sum inside the `Decimal` range.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;
