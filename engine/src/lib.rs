//! Spinhall progression engine.
//!
//! This crate contains the deterministic session logic: the coin/gem economy,
//! VIP reward math, the wheel and scratch card state machines, the task
//! engine, and the deferred-settle queue that models delayed payouts.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engine; all timing arrives as
//!   `now_ms` arguments from the host.
//! - Do not use non-deterministic randomness; all draws come from the
//!   session-seeded [`PrizeRng`].
//! - Operations either fully apply or fully reject; a rejection leaves state
//!   untouched and is reported as an [`SessionEvent::ActionRejected`] event,
//!   never as an error or panic.
//!
//! The primary entrypoint is [`SessionEngine`].

pub mod catalog;
pub mod events;
pub mod rewards;
pub mod rng;
pub mod scheduler;

mod engine;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod integration_tests;

pub use catalog::{
    starting_tasks, task_spec, tier_for_level, LeaderboardEntry, SlotInfo, TaskSpec, VipTier,
    LEADERBOARD_SEED, SLOT_LOBBY, TASK_CATALOG, VIP_TIERS,
};
pub use engine::{SessionConfig, SessionEngine};
pub use events::SessionEvent;
pub use rewards::{apply_vip_bonus, grant_experience, vip_bonus_percent};
pub use rng::PrizeRng;
pub use scheduler::{PendingSettle, Settle, SettleQueue};
