// Central constants for authorization and input bounds.

/// The only user allowed to run `/sync`.
pub const OWNER_ID: u64 = 332262693626970112;

pub const DEFAULT_DIE_SIDES: i64 = 6;
pub const MIN_DIE_SIDES: i64 = 2;
pub const MAX_DIE_SIDES: i64 = 100_000;

pub const MIN_PURGE_COUNT: i64 = 1;
pub const MAX_PURGE_COUNT: i64 = 100;

/// Discord refuses to bulk-delete messages older than this.
pub const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;
/// Messages this close to the bulk-delete limit are deleted one by one; the age
/// is measured before the request reaches Discord.
pub const BULK_DELETE_MARGIN_SECS: i64 = 60;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01).
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

pub const GENERIC_FAILURE: &str = "Something went wrong while running this command.";
