//! Session state types for spinhall.
//!
//! Everything the progression engine persists or hands to a presentation layer
//! lives here: the coin/gem/VIP economy, tasks, scratch cards, the wheel phase,
//! player identity, and the aggregate [`SessionSnapshot`]. All types carry a
//! canonical binary encoding (`commonware-codec`) and, where they cross the
//! browser boundary, a JSON encoding (`serde`).

pub mod session;
pub use session::{
    PlayerEconomy, PlayerIdentity, ScratchCard, SessionSnapshot, SessionStats, Task, TaskCadence,
    TaskKind, VipStatus, WheelPhase,
};
