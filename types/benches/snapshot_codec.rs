use commonware_codec::{DecodeExt, Encode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spinhall_types::session::{
    PlayerEconomy, PlayerIdentity, ScratchCard, SessionSnapshot, SessionStats, Task, TaskCadence,
    TaskKind, WheelPhase,
};

fn setup_snapshot(tasks: usize, cards: usize) -> SessionSnapshot {
    let tasks = (0..tasks as u16)
        .map(|id| Task {
            id,
            name: format!("Task {id}"),
            description: "Benchmark fixture task".to_string(),
            kind: TaskKind::WheelSpin,
            cadence: TaskCadence::Lifetime,
            progress: u64::from(id),
            required: 50,
            reward_coins: 1_000,
            reward_exp: 25,
            completed: false,
            claimed: false,
        })
        .collect();
    let cards = (0..cards as u64)
        .map(|id| ScratchCard::new(id + 1, 500 + id * 10))
        .collect();

    SessionSnapshot {
        economy: PlayerEconomy::new(),
        stats: SessionStats {
            spins: 42,
            cards_revealed: 9,
            tasks_claimed: 3,
            coins_won: 12_000,
        },
        wheel: WheelPhase::Spinning,
        cards,
        tasks,
        identity: Some(PlayerIdentity {
            user_id: 99,
            first_name: "Bench".to_string(),
            last_name: Some("Marker".to_string()),
            username: Some("bench_marker".to_string()),
            photo_url: Some("https://example.com/avatar.png".to_string()),
        }),
        pending_settles: 2,
        vip_bonus_percent: 30,
        vip_exp_required: 250,
    }
}

fn snapshot_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_codec");
    for (tasks, cards) in [(5usize, 3usize), (32, 12)] {
        let snapshot = setup_snapshot(tasks, cards);
        let encoded = snapshot.encode();

        group.bench_function(BenchmarkId::new("encode", format!("{tasks}t{cards}c")), |b| {
            b.iter(|| black_box(snapshot.encode()))
        });

        group.bench_function(BenchmarkId::new("decode", format!("{tasks}t{cards}c")), |b| {
            b.iter(|| black_box(SessionSnapshot::decode(encoded.as_ref()).expect("decode")))
        });
    }
    group.finish();
}

criterion_group!(benches, snapshot_codec);
criterion_main!(benches);
