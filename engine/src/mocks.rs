//! Shared fixtures for tests and the spinbot.

use spinhall_types::PlayerIdentity;

use crate::{SessionConfig, SessionEngine};

/// A well-formed identity for driving sessions.
pub fn test_identity() -> PlayerIdentity {
    PlayerIdentity {
        user_id: 7_777_777,
        first_name: "Sasha".to_string(),
        last_name: Some("Ivanova".to_string()),
        username: Some("sasha_spins".to_string()),
        photo_url: None,
    }
}

/// Fresh engine with [`test_identity`] already signed in.
pub fn signed_in_engine(seed: u64) -> SessionEngine {
    let mut engine = SessionEngine::new(SessionConfig { rng_seed: seed });
    engine.sign_in(test_identity());
    engine
}
