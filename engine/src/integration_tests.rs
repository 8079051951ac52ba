//! Whole-session scenarios crossing every feature.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spinhall_types::session::{SCRATCH_SETTLE_MS, STARTING_COINS, WHEEL_SETTLE_MS};
use spinhall_types::WheelPhase;

use crate::mocks::{signed_in_engine, test_identity};
use crate::{SessionConfig, SessionEngine, SessionEvent};

#[test]
fn test_full_session_ledger_balances() {
    let mut engine = SessionEngine::new(SessionConfig { rng_seed: 7 });
    let mut events = Vec::new();
    let mut now_ms = 0u64;

    events.extend(engine.sign_in(test_identity()));
    events.extend(engine.claim_task(1));
    for _ in 0..5 {
        events.extend(engine.spin_wheel(now_ms));
        now_ms += WHEEL_SETTLE_MS;
        events.extend(engine.advance(now_ms));
    }
    events.extend(engine.claim_task(2));
    events.extend(engine.purchase_card_batch());
    let card_ids: Vec<u64> = engine.cards().iter().map(|card| card.id).collect();
    for card_id in card_ids {
        events.extend(engine.reveal_card(card_id, now_ms));
    }
    now_ms += SCRATCH_SETTLE_MS;
    events.extend(engine.advance(now_ms));
    events.extend(engine.claim_task(5));

    // A correctly scripted session never trips a reject.
    assert!(!events
        .iter()
        .any(|event| matches!(event, SessionEvent::ActionRejected { .. })));

    // Replaying the event stream's credits and debits lands exactly on the
    // closing balance.
    let mut credits = 0u64;
    let mut debits = 0u64;
    for event in &events {
        match event {
            SessionEvent::WheelPayout { amount, .. } => credits += *amount,
            SessionEvent::CardPayout { amount, .. } => credits += *amount,
            SessionEvent::TaskClaimed { coins, .. } => credits += *coins,
            SessionEvent::WheelSpinStarted { cost, .. } => debits += *cost,
            SessionEvent::BatchPurchased { cost, .. } => debits += *cost,
            _ => {}
        }
    }
    assert_eq!(engine.economy().coins, STARTING_COINS + credits - debits);
    assert_eq!(engine.stats().coins_won, credits);
    assert_eq!(engine.stats().spins, 5);
    assert_eq!(engine.stats().cards_revealed, 3);
    assert_eq!(engine.stats().tasks_claimed, 3);
    assert_eq!(engine.wheel(), WheelPhase::Idle);
    assert_eq!(engine.pending_settles(), 0);

    let claimed: Vec<u16> = engine
        .tasks()
        .iter()
        .filter(|task| task.claimed)
        .map(|task| task.id)
        .collect();
    assert_eq!(claimed, vec![1, 2, 5]);

    engine.economy().validate_invariants().unwrap();
    for task in engine.tasks() {
        task.validate_invariants().unwrap();
    }
}

#[test]
fn test_random_action_storm_preserves_invariants() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut engine = signed_in_engine(17);
    let mut now_ms = 0u64;

    for _ in 0..500 {
        now_ms += rng.gen_range(0..1_000);
        match rng.gen_range(0..8u8) {
            0 => {
                engine.spin_wheel(now_ms);
            }
            1 => {
                engine.purchase_card_batch();
            }
            2 => {
                // Mostly real cards, sometimes an unknown id.
                let card_id = if rng.gen_bool(0.8) {
                    let cards = engine.cards();
                    cards[rng.gen_range(0..cards.len())].id
                } else {
                    u64::MAX
                };
                engine.reveal_card(card_id, now_ms);
            }
            3 => {
                engine.claim_task(rng.gen_range(0..8));
            }
            4 => {
                engine.credit_gems(rng.gen_range(0..50));
            }
            5 => {
                engine.sync_balance_tasks();
            }
            6 => {
                engine.advance(now_ms);
            }
            _ => {
                engine.reset_daily_tasks();
            }
        }

        engine.economy().validate_invariants().unwrap();
        for task in engine.tasks() {
            task.validate_invariants().unwrap();
        }
    }

    // Settle everything outstanding; the wheel must come back to rest.
    engine.advance(u64::MAX);
    assert_eq!(engine.wheel(), WheelPhase::Idle);
    assert_eq!(engine.pending_settles(), 0);
}

#[test]
fn test_snapshot_serializes_for_clients() {
    let engine = signed_in_engine(1);
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    assert!(json.contains("\"coins\":12450"));
    assert!(json.contains("\"wheel\":\"Idle\""));
    assert!(json.contains("\"username\":\"sasha_spins\""));
}
