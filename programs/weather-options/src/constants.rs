pub const CONFIG_SEED: &[u8] = b"config";
pub const SERIES_SEED: &[u8] = b"series";
pub const POSITION_SEED: &[u8] = b"position";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";

/// Longest station identifier we store (WMO/ICAO ids are far shorter).
pub const MAX_STATION_LEN: usize = 12;

/// Longest tenor a series may be written for.
pub const MAX_TENOR: i64 = 365 * 24 * 60 * 60;

/// A settlement index observation must be no older than this, measured
/// against the series expiry.
pub const MAX_INDEX_AGE: i64 = 24 * 60 * 60;
