use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum ScratchInvariantError {
    #[error("scratch prize must be positive (id={id})")]
    PrizeZero { id: u64 },
}

/// One scratch card. The prize is fixed at purchase; `revealed` flips at most
/// once and the payout lands a beat after the flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchCard {
    pub id: u64,
    pub prize: u64,
    pub revealed: bool,
}

impl ScratchCard {
    pub fn new(id: u64, prize: u64) -> Self {
        Self {
            id,
            prize,
            revealed: false,
        }
    }

    pub fn validate_invariants(&self) -> Result<(), ScratchInvariantError> {
        if self.prize == 0 {
            return Err(ScratchInvariantError::PrizeZero { id: self.id });
        }
        Ok(())
    }
}

impl Write for ScratchCard {
    fn write(&self, writer: &mut impl BufMut) {
        self.id.write(writer);
        self.prize.write(writer);
        self.revealed.write(writer);
    }
}

impl Read for ScratchCard {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            id: u64::read(reader)?,
            prize: u64::read(reader)?,
            revealed: bool::read(reader)?,
        })
    }
}

impl EncodeSize for ScratchCard {
    fn encode_size(&self) -> usize {
        self.id.encode_size() + self.prize.encode_size() + self.revealed.encode_size()
    }
}
