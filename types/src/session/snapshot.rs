use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};

use super::{
    PlayerEconomy, PlayerIdentity, ScratchCard, SessionStats, Task, WheelPhase, MAX_SCRATCH_CARDS,
    MAX_TASKS,
};

/// Immutable view of a whole session, rebuilt by the engine after every
/// operation. Presentation layers render from this and never mutate it.
///
/// `vip_bonus_percent` and `vip_exp_required` are derived from the economy at
/// construction so clients need no reward math of their own.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub economy: PlayerEconomy,
    pub stats: SessionStats,
    pub wheel: WheelPhase,
    pub cards: Vec<ScratchCard>,
    pub tasks: Vec<Task>,
    pub identity: Option<PlayerIdentity>,
    pub pending_settles: u32,
    pub vip_bonus_percent: u64,
    pub vip_exp_required: u64,
}

impl Write for SessionSnapshot {
    fn write(&self, writer: &mut impl BufMut) {
        self.economy.write(writer);
        self.stats.write(writer);
        self.wheel.write(writer);
        self.cards.write(writer);
        self.tasks.write(writer);
        self.identity.write(writer);
        self.pending_settles.write(writer);
        self.vip_bonus_percent.write(writer);
        self.vip_exp_required.write(writer);
    }
}

impl Read for SessionSnapshot {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            economy: PlayerEconomy::read(reader)?,
            stats: SessionStats::read(reader)?,
            wheel: WheelPhase::read(reader)?,
            cards: Vec::<ScratchCard>::read_range(reader, 0..=MAX_SCRATCH_CARDS)?,
            tasks: Vec::<Task>::read_range(reader, 0..=MAX_TASKS)?,
            identity: Option::<PlayerIdentity>::read(reader)?,
            pending_settles: u32::read(reader)?,
            vip_bonus_percent: u64::read(reader)?,
            vip_exp_required: u64::read(reader)?,
        })
    }
}

impl EncodeSize for SessionSnapshot {
    fn encode_size(&self) -> usize {
        self.economy.encode_size()
            + self.stats.encode_size()
            + self.wheel.encode_size()
            + self.cards.encode_size()
            + self.tasks.encode_size()
            + self.identity.encode_size()
            + self.pending_settles.encode_size()
            + self.vip_bonus_percent.encode_size()
            + self.vip_exp_required.encode_size()
    }
}
