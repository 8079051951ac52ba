/// Maximum display-name length accepted from the identity provider
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum username length accepted from the identity provider
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum URL length for identity photo links
pub const MAX_URL_LENGTH: usize = 256;

/// Maximum length for task names and descriptions
pub const MAX_TASK_TEXT_LENGTH: usize = 128;

/// Upper bound on tasks in one session (codec read bound)
pub const MAX_TASKS: usize = 64;

/// Upper bound on scratch cards in one session (codec read bound)
pub const MAX_SCRATCH_CARDS: usize = 16;

/// Coins granted when a session starts
pub const STARTING_COINS: u64 = 12_450;

/// Gems granted when a session starts
pub const STARTING_GEMS: u64 = 89;

/// Cost of one wheel spin
pub const WHEEL_SPIN_COST: u64 = 100;

/// Delay between starting a spin and its payout landing
pub const WHEEL_SETTLE_MS: u64 = 3_000;

/// Cost of a fresh batch of scratch cards
pub const SCRATCH_BATCH_COST: u64 = 300;

/// Cards per scratch batch
pub const SCRATCH_BATCH_SIZE: usize = 3;

/// Delay between revealing a card and its payout landing
pub const SCRATCH_SETTLE_MS: u64 = 300;

/// Smallest prize either feature can award
pub const PRIZE_MIN: u64 = 100;

/// Width of the uniform prize range (draws land in `PRIZE_MIN..PRIZE_MIN + PRIZE_SPREAD`)
pub const PRIZE_SPREAD: u64 = 1_000;

/// Prizes on the scratch batch every session starts with
pub const INITIAL_SCRATCH_PRIZES: [u64; SCRATCH_BATCH_SIZE] = [500, 1_000, 250];

/// Coin-reward bonus percent granted per VIP level
pub const VIP_BONUS_PERCENT_PER_LEVEL: u64 = 10;

/// Experience required to clear level 0
pub const VIP_EXP_BASE: u64 = 100;

/// Additional experience required per level above 0
pub const VIP_EXP_PER_LEVEL: u64 = 50;

/// Highest VIP level with its own tier metadata (higher levels reuse the last tier)
pub const VIP_MAX_TIER: u32 = 5;

/// Reject codes for ActionRejected events
pub const REJECT_UNAUTHENTICATED: u8 = 1;
pub const REJECT_INSUFFICIENT_COINS: u8 = 2;
pub const REJECT_WHEEL_BUSY: u8 = 3;
pub const REJECT_CARD_NOT_FOUND: u8 = 4;
pub const REJECT_CARD_ALREADY_REVEALED: u8 = 5;
pub const REJECT_TASK_NOT_FOUND: u8 = 6;
pub const REJECT_TASK_INCOMPLETE: u8 = 7;
pub const REJECT_TASK_ALREADY_CLAIMED: u8 = 8;
pub const REJECT_IDENTITY_INVALID: u8 = 9;
