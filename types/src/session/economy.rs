use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{STARTING_COINS, STARTING_GEMS, VIP_EXP_BASE, VIP_EXP_PER_LEVEL};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum EconomyInvariantError {
    #[error("experience at or above level threshold (got={got}, required={required})")]
    ExperienceAboveThreshold { got: u64, required: u64 },
}

/// VIP progression state.
///
/// `experience` is the progress toward the next level and stays below
/// [`VipStatus::required_exp`] at rest; level-up carries the remainder over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VipStatus {
    pub level: u32,
    pub experience: u64,
}

impl VipStatus {
    /// Experience required to clear the current level.
    pub fn required_exp(&self) -> u64 {
        VIP_EXP_BASE + u64::from(self.level) * VIP_EXP_PER_LEVEL
    }
}

/// Soft/hard currency balances plus VIP progression.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerEconomy {
    pub coins: u64,
    pub gems: u64,
    pub vip: VipStatus,
}

/// Lifetime counters for a session, display only.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub spins: u64,
    pub cards_revealed: u64,
    pub tasks_claimed: u64,
    pub coins_won: u64,
}

impl PlayerEconomy {
    pub fn new() -> Self {
        Self {
            coins: STARTING_COINS,
            gems: STARTING_GEMS,
            vip: VipStatus {
                level: 0,
                experience: 0,
            },
        }
    }

    pub fn validate_invariants(&self) -> Result<(), EconomyInvariantError> {
        let required = self.vip.required_exp();
        if self.vip.experience >= required {
            return Err(EconomyInvariantError::ExperienceAboveThreshold {
                got: self.vip.experience,
                required,
            });
        }
        Ok(())
    }
}

impl Write for VipStatus {
    fn write(&self, writer: &mut impl BufMut) {
        self.level.write(writer);
        self.experience.write(writer);
    }
}

impl Read for VipStatus {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            level: u32::read(reader)?,
            experience: u64::read(reader)?,
        })
    }
}

impl EncodeSize for VipStatus {
    fn encode_size(&self) -> usize {
        self.level.encode_size() + self.experience.encode_size()
    }
}

impl Write for PlayerEconomy {
    fn write(&self, writer: &mut impl BufMut) {
        self.coins.write(writer);
        self.gems.write(writer);
        self.vip.write(writer);
    }
}

impl Read for PlayerEconomy {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            coins: u64::read(reader)?,
            gems: u64::read(reader)?,
            vip: VipStatus::read(reader)?,
        })
    }
}

impl EncodeSize for PlayerEconomy {
    fn encode_size(&self) -> usize {
        self.coins.encode_size() + self.gems.encode_size() + self.vip.encode_size()
    }
}

impl Write for SessionStats {
    fn write(&self, writer: &mut impl BufMut) {
        self.spins.write(writer);
        self.cards_revealed.write(writer);
        self.tasks_claimed.write(writer);
        self.coins_won.write(writer);
    }
}

impl Read for SessionStats {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            spins: u64::read(reader)?,
            cards_revealed: u64::read(reader)?,
            tasks_claimed: u64::read(reader)?,
            coins_won: u64::read(reader)?,
        })
    }
}

impl EncodeSize for SessionStats {
    fn encode_size(&self) -> usize {
        self.spins.encode_size()
            + self.cards_revealed.encode_size()
            + self.tasks_claimed.encode_size()
            + self.coins_won.encode_size()
    }
}
