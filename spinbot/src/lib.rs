//! Deterministic bot that plays a spinhall session.
//!
//! The bot owns a [`SessionEngine`], advances a synthetic clock one tick per
//! action, and draws weighted random actions from a seeded RNG. Two runs with
//! the same [`Config`] produce identical sessions and summaries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spinhall_engine::{SessionConfig, SessionEngine, SessionEvent};
use spinhall_types::session::WHEEL_SETTLE_MS;
use spinhall_types::{PlayerIdentity, SessionSnapshot};
use tracing::{debug, info};

/// Bot run configuration, from flags or a YAML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Seeds both the session's prize RNG and the bot's action choices.
    pub seed: u64,
    /// Actions to play before exiting.
    pub actions: u64,
    /// Milliseconds between actions, real and simulated.
    pub tick_ms: u64,
    /// Log level for the subscriber.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 42,
            actions: 50,
            tick_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

/// Counters accumulated over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub ticks: u64,
    pub spins: u64,
    pub batches: u64,
    pub reveals: u64,
    pub claims: u64,
    pub payouts: u64,
    pub rejects: u64,
    pub level_ups: u64,
}

/// Drives one session with weighted random actions.
pub struct Spinbot {
    engine: SessionEngine,
    rng: StdRng,
    now_ms: u64,
    tick_ms: u64,
    summary: Summary,
}

impl Spinbot {
    /// Build a bot and sign its synthetic identity in, ready to tick.
    pub fn new(config: &Config) -> Self {
        let mut engine = SessionEngine::new(SessionConfig {
            rng_seed: config.seed,
        });
        let events = engine.sign_in(bot_identity(config.seed));
        let mut bot = Self {
            engine,
            rng: StdRng::seed_from_u64(config.seed),
            now_ms: 0,
            tick_ms: config.tick_ms,
            summary: Summary::default(),
        };
        bot.observe(&events);
        bot
    }

    /// One action: advance the clock (at least 1ms), land due payouts, then
    /// play a weighted random move.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        self.now_ms += self.tick_ms.max(1);
        self.summary.ticks += 1;

        let mut events = self.engine.advance(self.now_ms);
        let roll = self.rng.gen_range(0..100u32);
        let action_events = match roll {
            0..=34 => self.engine.spin_wheel(self.now_ms),
            35..=59 => {
                let cards = self.engine.cards();
                let card_id = cards[self.rng.gen_range(0..cards.len())].id;
                self.engine.reveal_card(card_id, self.now_ms)
            }
            60..=74 => self.engine.purchase_card_batch(),
            75..=89 => {
                let claimable = self
                    .engine
                    .tasks()
                    .iter()
                    .find(|task| task.is_claimable())
                    .map(|task| task.id);
                let task_id = claimable.unwrap_or_else(|| self.rng.gen_range(1..=6));
                self.engine.claim_task(task_id)
            }
            90..=97 => self.engine.credit_gems(self.rng.gen_range(1..10)),
            _ => self.engine.reset_daily_tasks(),
        };
        events.extend(action_events);
        self.observe(&events);

        debug!(
            now_ms = self.now_ms,
            coins = self.engine.economy().coins,
            pending = self.engine.pending_settles(),
            "tick complete"
        );
        events
    }

    /// Wait out the longest settle delay so every pending payout lands, then
    /// return the run summary.
    pub fn finish(&mut self) -> Summary {
        self.now_ms = self.now_ms.saturating_add(WHEEL_SETTLE_MS);
        let events = self.engine.advance(self.now_ms);
        self.observe(&events);
        self.summary.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.engine.snapshot()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    fn observe(&mut self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::WheelSpinStarted { .. } => self.summary.spins += 1,
                SessionEvent::BatchPurchased { .. } => self.summary.batches += 1,
                SessionEvent::CardRevealed { .. } => self.summary.reveals += 1,
                SessionEvent::TaskClaimed { .. } => self.summary.claims += 1,
                SessionEvent::WheelPayout { .. } | SessionEvent::CardPayout { .. } => {
                    self.summary.payouts += 1
                }
                SessionEvent::VipLevelUp { level } => {
                    self.summary.level_ups += 1;
                    info!(level = *level, "bot leveled up");
                }
                SessionEvent::ActionRejected { .. } => self.summary.rejects += 1,
                _ => {}
            }
        }
    }
}

fn bot_identity(seed: u64) -> PlayerIdentity {
    PlayerIdentity {
        user_id: seed,
        first_name: "Spinbot".to_string(),
        last_name: None,
        username: Some(format!("spinbot_{}", seed)),
        photo_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_config_same_run() {
        let config = Config {
            seed: 9,
            actions: 200,
            tick_ms: 40,
            log_level: "info".to_string(),
        };
        let mut a = Spinbot::new(&config);
        let mut b = Spinbot::new(&config);
        for _ in 0..config.actions {
            a.tick();
            b.tick();
        }
        assert_eq!(a.finish(), b.finish());
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_run_keeps_session_consistent() {
        let config = Config {
            seed: 4,
            actions: 300,
            tick_ms: 25,
            log_level: "info".to_string(),
        };
        let mut bot = Spinbot::new(&config);
        for _ in 0..config.actions {
            bot.tick();
        }
        let summary = bot.finish();
        assert_eq!(summary.ticks, 300);
        assert!(summary.spins > 0);
        assert!(summary.payouts > 0);

        let snapshot = bot.snapshot();
        snapshot.economy.validate_invariants().unwrap();
        for task in &snapshot.tasks {
            task.validate_invariants().unwrap();
        }
        assert_eq!(snapshot.pending_settles, 0);
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.seed, config.seed);
        assert_eq!(parsed.actions, config.actions);
        assert_eq!(parsed.tick_ms, config.tick_ms);
    }
}
