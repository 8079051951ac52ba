//! Events emitted by session operations.
//!
//! Every mutating call on the engine returns a `Vec<SessionEvent>` describing
//! exactly what changed, in the order it changed. Rejected actions return a
//! single [`SessionEvent::ActionRejected`] and mutate nothing.

use serde::{Deserialize, Serialize};

/// One observable state change inside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A player identity was attached to the session.
    SignedIn { user_id: u64 },
    /// The session identity was cleared.
    SignedOut,
    /// The wheel started spinning; its payout lands at `settles_at_ms`.
    WheelSpinStarted { cost: u64, settles_at_ms: u64 },
    /// A wheel payout landed. `amount` is the base prize with the VIP bonus
    /// applied.
    WheelPayout { base_prize: u64, amount: u64 },
    /// A fresh batch of scratch cards replaced the previous one.
    BatchPurchased { cost: u64, card_ids: Vec<u64> },
    /// A card was revealed; its payout lands at `settles_at_ms`.
    CardRevealed { card_id: u64, settles_at_ms: u64 },
    /// A revealed card's payout landed. `amount` is the base prize with the
    /// VIP bonus applied.
    CardPayout {
        card_id: u64,
        base_prize: u64,
        amount: u64,
    },
    /// A counter task advanced without completing.
    TaskProgressed {
        task_id: u16,
        progress: u64,
        required: u64,
    },
    /// A task reached its requirement and became claimable.
    TaskCompleted { task_id: u16 },
    /// A completed task's reward was collected. `coins` carries the VIP
    /// bonus; `exp` is the raw reward.
    TaskClaimed { task_id: u16, coins: u64, exp: u64 },
    /// Accumulated experience crossed one or more level thresholds.
    VipLevelUp { level: u32 },
    /// Gems were credited outside the coin economy.
    GemsCredited { amount: u64, balance: u64 },
    /// Daily-cadence tasks were rolled back to their unclaimed state.
    DailyTasksReset { tasks_reset: u32 },
    /// An action was refused. The session state is unchanged.
    ActionRejected { code: u8 },
}
