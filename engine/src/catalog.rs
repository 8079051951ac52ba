//! Static session content: task definitions, the slot lobby, VIP tiers, and
//! the seeded leaderboard.
//!
//! Everything here is compile-time data. Tasks are instantiated into mutable
//! [`Task`] state per session; the rest is served to clients as-is.

use spinhall_types::{Task, TaskCadence, TaskKind};

/// Immutable definition a session's task list is built from.
#[derive(Clone, Copy, Debug)]
pub struct TaskSpec {
    pub id: u16,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: TaskKind,
    pub cadence: TaskCadence,
    pub required: u64,
    pub reward_coins: u64,
    pub reward_exp: u64,
}

impl TaskSpec {
    const fn new(
        id: u16,
        name: &'static str,
        description: &'static str,
        kind: TaskKind,
        cadence: TaskCadence,
        required: u64,
        reward_coins: u64,
        reward_exp: u64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            kind,
            cadence,
            required,
            reward_coins,
            reward_exp,
        }
    }

    /// Fresh per-session task state for this definition.
    pub fn instantiate(&self) -> Task {
        Task {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            cadence: self.cadence,
            progress: 0,
            required: self.required,
            reward_coins: self.reward_coins,
            reward_exp: self.reward_exp,
            completed: false,
            claimed: false,
        }
    }
}

/// Tasks every new session starts with.
pub const TASK_CATALOG: &[TaskSpec] = &[
    TaskSpec::new(
        1,
        "Daily Visit",
        "Sign in once today.",
        TaskKind::SignIn,
        TaskCadence::Daily,
        1,
        500,
        10,
    ),
    TaskSpec::new(
        2,
        "Wheel Warmup",
        "Spin the wheel 5 times today.",
        TaskKind::WheelSpin,
        TaskCadence::Daily,
        5,
        250,
        15,
    ),
    TaskSpec::new(
        3,
        "Wheel Master",
        "Spin the wheel 50 times.",
        TaskKind::WheelSpin,
        TaskCadence::Lifetime,
        50,
        2_000,
        60,
    ),
    TaskSpec::new(
        4,
        "Collector",
        "Reveal 9 scratch cards.",
        TaskKind::CardReveal,
        TaskCadence::Lifetime,
        9,
        750,
        25,
    ),
    TaskSpec::new(
        5,
        "High Roller",
        "Hold 10,000 coins at once.",
        TaskKind::CoinBalance,
        TaskCadence::Lifetime,
        10_000,
        1_000,
        50,
    ),
];

/// Look up a task definition by id.
pub fn task_spec(id: u16) -> Option<&'static TaskSpec> {
    TASK_CATALOG.iter().find(|spec| spec.id == id)
}

/// Instantiate the full catalog in declaration order.
pub fn starting_tasks() -> Vec<Task> {
    TASK_CATALOG.iter().map(TaskSpec::instantiate).collect()
}

/// Display metadata for one slot machine in the lobby.
#[derive(Clone, Copy, Debug)]
pub struct SlotInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub min_bet: u64,
}

impl SlotInfo {
    const fn new(name: &'static str, icon: &'static str, min_bet: u64) -> Self {
        Self {
            name,
            icon,
            min_bet,
        }
    }
}

/// Lobby contents in display order.
pub const SLOT_LOBBY: &[SlotInfo] = &[
    SlotInfo::new("Diamond Rush", "\u{1f48e}", 10),
    SlotInfo::new("Lucky Seven", "\u{1f340}", 50),
    SlotInfo::new("Fire Wins", "\u{1f525}", 100),
    SlotInfo::new("Golden Crown", "\u{1f451}", 25),
    SlotInfo::new("Magic Stars", "\u{2b50}", 75),
    SlotInfo::new("Treasure Hunt", "\u{1f3c6}", 150),
];

/// Display metadata for one VIP tier.
#[derive(Clone, Copy, Debug)]
pub struct VipTier {
    pub level: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

impl VipTier {
    const fn new(level: u32, name: &'static str, icon: &'static str) -> Self {
        Self { level, name, icon }
    }
}

/// Tier ladder in ascending level order.
pub const VIP_TIERS: &[VipTier] = &[
    VipTier::new(0, "Newcomer", "\u{1f331}"),
    VipTier::new(1, "Bronze", "\u{1f949}"),
    VipTier::new(2, "Silver", "\u{1f948}"),
    VipTier::new(3, "Gold", "\u{1f947}"),
    VipTier::new(4, "Platinum", "\u{1f48e}"),
    VipTier::new(5, "Legend", "\u{1f451}"),
];

/// Tier for a VIP level. Levels past the ladder stay at the top tier.
pub fn tier_for_level(level: u32) -> &'static VipTier {
    VIP_TIERS
        .iter()
        .rev()
        .find(|tier| tier.level <= level)
        .unwrap_or(&VIP_TIERS[0])
}

/// One row of the seeded leaderboard.
#[derive(Clone, Copy, Debug)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub coins: u64,
}

impl LeaderboardEntry {
    const fn new(rank: u32, name: &'static str, coins: u64) -> Self {
        Self { rank, name, coins }
    }
}

/// Static leaderboard rows in rank order.
pub const LEADERBOARD_SEED: &[LeaderboardEntry] = &[
    LeaderboardEntry::new(1, "CryptoKing", 125_400),
    LeaderboardEntry::new(2, "LuckyDice", 98_750),
    LeaderboardEntry::new(3, "SlotMaster", 87_320),
    LeaderboardEntry::new(4, "WinStreak", 76_890),
    LeaderboardEntry::new(5, "DiamondHand", 65_432),
];
