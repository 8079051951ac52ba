//! The session engine: owns all mutable session state and applies every
//! player action.
//!
//! Operations never fail. A call either applies fully, returning the events
//! it produced, or rejects without touching state, returning a single
//! [`SessionEvent::ActionRejected`]. Preconditions are checked in a fixed
//! order (identity, phase, funds) so a rejected call always reports the first
//! unmet one.

use spinhall_types::session::{
    INITIAL_SCRATCH_PRIZES, REJECT_CARD_ALREADY_REVEALED, REJECT_CARD_NOT_FOUND,
    REJECT_IDENTITY_INVALID, REJECT_INSUFFICIENT_COINS, REJECT_TASK_ALREADY_CLAIMED,
    REJECT_TASK_INCOMPLETE, REJECT_TASK_NOT_FOUND, REJECT_UNAUTHENTICATED, REJECT_WHEEL_BUSY,
    SCRATCH_BATCH_COST, SCRATCH_BATCH_SIZE, SCRATCH_SETTLE_MS, WHEEL_SETTLE_MS, WHEEL_SPIN_COST,
};
use spinhall_types::{
    PlayerEconomy, PlayerIdentity, ScratchCard, SessionSnapshot, SessionStats, Task, TaskCadence,
    TaskKind, WheelPhase,
};

use crate::catalog::starting_tasks;
use crate::events::SessionEvent;
use crate::rewards::{apply_vip_bonus, grant_experience, vip_bonus_percent};
use crate::rng::PrizeRng;
use crate::scheduler::{Settle, SettleQueue};

/// Configuration for a new session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    /// Seed for the session's prize RNG. Two sessions with the same seed and
    /// the same action script produce identical state.
    pub rng_seed: u64,
}

/// A single player's session.
///
/// All mutation flows through the methods here, one synchronous call at a
/// time. Time enters only through `now_ms` arguments and randomness only
/// through the seeded prize RNG, so a session replays from its seed and
/// action script.
#[derive(Clone, Debug)]
pub struct SessionEngine {
    economy: PlayerEconomy,
    stats: SessionStats,
    wheel: WheelPhase,
    cards: Vec<ScratchCard>,
    tasks: Vec<Task>,
    identity: Option<PlayerIdentity>,
    settles: SettleQueue,
    rng: PrizeRng,
    next_card_id: u64,
}

impl SessionEngine {
    /// Fresh session with starting balances, the catalog task list, and the
    /// fixed initial scratch batch.
    pub fn new(config: SessionConfig) -> Self {
        let cards = INITIAL_SCRATCH_PRIZES
            .iter()
            .enumerate()
            .map(|(i, prize)| ScratchCard::new(i as u64 + 1, *prize))
            .collect();
        let mut engine = Self {
            economy: PlayerEconomy::new(),
            stats: SessionStats::default(),
            wheel: WheelPhase::Idle,
            cards,
            tasks: starting_tasks(),
            identity: None,
            settles: SettleQueue::new(),
            rng: PrizeRng::new(config.rng_seed),
            next_card_id: INITIAL_SCRATCH_PRIZES.len() as u64 + 1,
        };
        // Balance watchers observe the starting balance.
        let mut events = Vec::new();
        engine.sync_balance_watch(&mut events);
        engine
    }

    pub fn economy(&self) -> &PlayerEconomy {
        &self.economy
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn wheel(&self) -> WheelPhase {
        self.wheel
    }

    pub fn cards(&self) -> &[ScratchCard] {
        &self.cards
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn identity(&self) -> Option<&PlayerIdentity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn pending_settles(&self) -> usize {
        self.settles.len()
    }

    /// Due time of the next scheduled payout, if any.
    pub fn next_settle_at(&self) -> Option<u64> {
        self.settles.next_due_at()
    }

    /// Attach an authenticated identity to the session.
    ///
    /// Counts as the qualifying action for sign-in tasks. Signing in while
    /// already signed in replaces the identity.
    pub fn sign_in(&mut self, identity: PlayerIdentity) -> Vec<SessionEvent> {
        if let Err(error) = identity.validate_invariants() {
            tracing::warn!(%error, "sign-in rejected");
            return rejection(REJECT_IDENTITY_INVALID);
        }
        let user_id = identity.user_id;
        self.identity = Some(identity);
        tracing::info!(user_id, "player signed in");

        let mut events = vec![SessionEvent::SignedIn { user_id }];
        self.bump_counter_tasks(TaskKind::SignIn, &mut events);
        events
    }

    /// Detach the identity. Paid actions reject until the next sign-in.
    pub fn sign_out(&mut self) -> Vec<SessionEvent> {
        if self.identity.is_none() {
            return rejection(REJECT_UNAUTHENTICATED);
        }
        self.identity = None;
        tracing::info!("player signed out");
        vec![SessionEvent::SignedOut]
    }

    /// Start a wheel spin.
    ///
    /// The cost is debited immediately; the payout lands through
    /// [`advance`](Self::advance) once the settle delay passes. The wheel
    /// refuses re-entry until then.
    pub fn spin_wheel(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        if self.identity.is_none() {
            return rejection(REJECT_UNAUTHENTICATED);
        }
        if self.wheel == WheelPhase::Spinning {
            return rejection(REJECT_WHEEL_BUSY);
        }
        if self.economy.coins < WHEEL_SPIN_COST {
            return rejection(REJECT_INSUFFICIENT_COINS);
        }

        self.economy.coins -= WHEEL_SPIN_COST;
        self.wheel = WheelPhase::Spinning;
        self.stats.spins += 1;
        let settles_at_ms = now_ms.saturating_add(WHEEL_SETTLE_MS);
        self.settles.schedule(settles_at_ms, Settle::WheelPayout);
        tracing::debug!(
            cost = WHEEL_SPIN_COST,
            settles_at_ms,
            coins = self.economy.coins,
            "wheel spin started"
        );

        let mut events = vec![SessionEvent::WheelSpinStarted {
            cost: WHEEL_SPIN_COST,
            settles_at_ms,
        }];
        self.bump_counter_tasks(TaskKind::WheelSpin, &mut events);
        events
    }

    /// Buy a fresh scratch batch, replacing whatever batch is active.
    ///
    /// Unrevealed cards in the old batch are discarded without compensation.
    /// Payouts already scheduled for revealed cards still land.
    pub fn purchase_card_batch(&mut self) -> Vec<SessionEvent> {
        if self.identity.is_none() {
            return rejection(REJECT_UNAUTHENTICATED);
        }
        if self.economy.coins < SCRATCH_BATCH_COST {
            return rejection(REJECT_INSUFFICIENT_COINS);
        }

        self.economy.coins -= SCRATCH_BATCH_COST;
        self.cards.clear();
        let mut card_ids = Vec::with_capacity(SCRATCH_BATCH_SIZE);
        for _ in 0..SCRATCH_BATCH_SIZE {
            let id = self.next_card_id;
            self.next_card_id += 1;
            self.cards.push(ScratchCard::new(id, self.rng.next_prize()));
            card_ids.push(id);
        }
        tracing::debug!(
            cost = SCRATCH_BATCH_COST,
            ?card_ids,
            coins = self.economy.coins,
            "scratch batch purchased"
        );

        vec![SessionEvent::BatchPurchased {
            cost: SCRATCH_BATCH_COST,
            card_ids,
        }]
    }

    /// Reveal one card.
    ///
    /// The card displays as revealed immediately; its payout is scheduled and
    /// lands through [`advance`](Self::advance). Revealing a revealed card
    /// rejects so a payout can never be scheduled twice for one card.
    pub fn reveal_card(&mut self, card_id: u64, now_ms: u64) -> Vec<SessionEvent> {
        if self.identity.is_none() {
            return rejection(REJECT_UNAUTHENTICATED);
        }
        let Some(card) = self.cards.iter_mut().find(|card| card.id == card_id) else {
            return rejection(REJECT_CARD_NOT_FOUND);
        };
        if card.revealed {
            return rejection(REJECT_CARD_ALREADY_REVEALED);
        }

        card.revealed = true;
        let base_prize = card.prize;
        self.stats.cards_revealed += 1;
        let settles_at_ms = now_ms.saturating_add(SCRATCH_SETTLE_MS);
        self.settles.schedule(
            settles_at_ms,
            Settle::CardPayout {
                card_id,
                base_prize,
            },
        );
        tracing::debug!(card_id, base_prize, settles_at_ms, "card revealed");

        let mut events = vec![SessionEvent::CardRevealed {
            card_id,
            settles_at_ms,
        }];
        self.bump_counter_tasks(TaskKind::CardReveal, &mut events);
        events
    }

    /// Collect a completed task's reward.
    ///
    /// The coin reward carries the VIP bonus at the level current when
    /// claimed; the experience reward feeds progression at face value.
    pub fn claim_task(&mut self, task_id: u16) -> Vec<SessionEvent> {
        if self.identity.is_none() {
            return rejection(REJECT_UNAUTHENTICATED);
        }
        let Some(index) = self.tasks.iter().position(|task| task.id == task_id) else {
            return rejection(REJECT_TASK_NOT_FOUND);
        };
        if !self.tasks[index].completed {
            return rejection(REJECT_TASK_INCOMPLETE);
        }
        if self.tasks[index].claimed {
            return rejection(REJECT_TASK_ALREADY_CLAIMED);
        }

        self.tasks[index].claimed = true;
        self.stats.tasks_claimed += 1;
        let reward_exp = self.tasks[index].reward_exp;
        let coins = apply_vip_bonus(self.tasks[index].reward_coins, self.economy.vip.level);
        tracing::info!(task_id, coins, exp = reward_exp, "task claimed");

        let mut events = vec![SessionEvent::TaskClaimed {
            task_id,
            coins,
            exp: reward_exp,
        }];
        self.credit_coins(coins, &mut events);
        self.grant_exp(reward_exp, &mut events);
        events
    }

    /// Resynchronize balance-watch tasks from the current coin balance.
    ///
    /// Runs internally after every credit; exposed for hosts that mirror an
    /// external balance in. Idempotent.
    pub fn sync_balance_tasks(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.sync_balance_watch(&mut events);
        events
    }

    /// Credit hard currency. Accrual only; nothing in the session spends
    /// gems.
    pub fn credit_gems(&mut self, amount: u64) -> Vec<SessionEvent> {
        self.economy.gems = self.economy.gems.saturating_add(amount);
        tracing::debug!(amount, balance = self.economy.gems, "gems credited");
        vec![SessionEvent::GemsCredited {
            amount,
            balance: self.economy.gems,
        }]
    }

    /// Rewind daily-cadence tasks to unclaimed zero progress.
    ///
    /// The engine defines what resets; deciding when a day rolls over is the
    /// host's concern.
    pub fn reset_daily_tasks(&mut self) -> Vec<SessionEvent> {
        let mut tasks_reset = 0u32;
        for task in &mut self.tasks {
            if task.cadence != TaskCadence::Daily {
                continue;
            }
            task.progress = 0;
            task.completed = false;
            task.claimed = false;
            tasks_reset += 1;
        }
        tracing::info!(tasks_reset, "daily tasks reset");

        let mut events = vec![SessionEvent::DailyTasksReset { tasks_reset }];
        // A daily balance watcher resynchronizes right away.
        self.sync_balance_watch(&mut events);
        events
    }

    /// Fire every settle due at `now_ms`.
    ///
    /// Payouts credit at the VIP level current when they land, not when the
    /// action started.
    pub fn advance(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for pending in self.settles.drain_due(now_ms) {
            match pending.settle {
                Settle::WheelPayout => {
                    let base_prize = self.rng.next_prize();
                    let amount = apply_vip_bonus(base_prize, self.economy.vip.level);
                    self.wheel = WheelPhase::Idle;
                    tracing::debug!(base_prize, amount, "wheel payout landed");
                    events.push(SessionEvent::WheelPayout { base_prize, amount });
                    self.credit_coins(amount, &mut events);
                }
                Settle::CardPayout {
                    card_id,
                    base_prize,
                } => {
                    let amount = apply_vip_bonus(base_prize, self.economy.vip.level);
                    tracing::debug!(card_id, base_prize, amount, "card payout landed");
                    events.push(SessionEvent::CardPayout {
                        card_id,
                        base_prize,
                        amount,
                    });
                    self.credit_coins(amount, &mut events);
                }
            }
        }
        events
    }

    /// Immutable view of the whole session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            economy: self.economy.clone(),
            stats: self.stats.clone(),
            wheel: self.wheel,
            cards: self.cards.clone(),
            tasks: self.tasks.clone(),
            identity: self.identity.clone(),
            pending_settles: self.settles.len() as u32,
            vip_bonus_percent: vip_bonus_percent(self.economy.vip.level),
            vip_exp_required: self.economy.vip.required_exp(),
        }
    }

    fn credit_coins(&mut self, amount: u64, events: &mut Vec<SessionEvent>) {
        self.economy.coins = self.economy.coins.saturating_add(amount);
        self.stats.coins_won = self.stats.coins_won.saturating_add(amount);
        self.sync_balance_watch(events);
    }

    fn bump_counter_tasks(&mut self, kind: TaskKind, events: &mut Vec<SessionEvent>) {
        for task in &mut self.tasks {
            if task.kind != kind || task.completed {
                continue;
            }
            task.progress = (task.progress + 1).min(task.required);
            events.push(SessionEvent::TaskProgressed {
                task_id: task.id,
                progress: task.progress,
                required: task.required,
            });
            if task.progress >= task.required {
                task.completed = true;
                events.push(SessionEvent::TaskCompleted { task_id: task.id });
            }
        }
    }

    // Progress is the high-water mark of min(coins, required), so a later
    // spend never rewinds it and completion stays one-way.
    fn sync_balance_watch(&mut self, events: &mut Vec<SessionEvent>) {
        let coins = self.economy.coins;
        for task in &mut self.tasks {
            if !task.kind.is_balance_watch() || task.completed {
                continue;
            }
            let watermark = coins.min(task.required);
            if watermark <= task.progress {
                continue;
            }
            task.progress = watermark;
            events.push(SessionEvent::TaskProgressed {
                task_id: task.id,
                progress: task.progress,
                required: task.required,
            });
            if task.progress >= task.required {
                task.completed = true;
                events.push(SessionEvent::TaskCompleted { task_id: task.id });
            }
        }
    }

    fn grant_exp(&mut self, gained: u64, events: &mut Vec<SessionEvent>) {
        if gained == 0 {
            return;
        }
        let levels = grant_experience(&mut self.economy.vip, gained);
        if levels > 0 {
            let level = self.economy.vip.level;
            tracing::info!(level, "vip level up");
            events.push(SessionEvent::VipLevelUp { level });
        }
    }
}

fn rejection(code: u8) -> Vec<SessionEvent> {
    tracing::trace!(code, "action rejected");
    vec![SessionEvent::ActionRejected { code }]
}
