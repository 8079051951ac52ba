use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{read_string, string_encode_size, write_string, MAX_TASK_TEXT_LENGTH};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum TaskInvariantError {
    #[error("task requirement must be positive (id={id})")]
    RequiredZero { id: u16 },
    #[error("task name too long (len={len}, max={max})")]
    NameTooLong { len: usize, max: usize },
    #[error("task description too long (len={len}, max={max})")]
    DescriptionTooLong { len: usize, max: usize },
    #[error("task progress above requirement (got={got}, max={max})")]
    ProgressAboveRequired { got: u64, max: u64 },
    #[error("task claimed while incomplete (id={id})")]
    ClaimedWhileIncomplete { id: u16 },
}

/// What drives a task's progress.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Counts sign-ins.
    SignIn = 0,
    /// Counts wheel spins.
    WheelSpin = 1,
    /// Counts scratch card reveals.
    CardReveal = 2,
    /// Tracks the coin balance high-water mark.
    CoinBalance = 3,
}

impl TaskKind {
    /// Whether progress is a ratchet over the coin balance rather than an
    /// action counter.
    pub fn is_balance_watch(&self) -> bool {
        matches!(self, TaskKind::CoinBalance)
    }
}

impl TryFrom<u8> for TaskKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskKind::SignIn),
            1 => Ok(TaskKind::WheelSpin),
            2 => Ok(TaskKind::CardReveal),
            3 => Ok(TaskKind::CoinBalance),
            _ => Err(()),
        }
    }
}

impl Write for TaskKind {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for TaskKind {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        TaskKind::try_from(value).map_err(|_| Error::InvalidEnum(value))
    }
}

impl EncodeSize for TaskKind {
    fn encode_size(&self) -> usize {
        u8::SIZE
    }
}

/// Whether a task rewinds on the daily reset.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCadence {
    Daily = 0,
    Lifetime = 1,
}

impl TryFrom<u8> for TaskCadence {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskCadence::Daily),
            1 => Ok(TaskCadence::Lifetime),
            _ => Err(()),
        }
    }
}

impl Write for TaskCadence {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for TaskCadence {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        TaskCadence::try_from(value).map_err(|_| Error::InvalidEnum(value))
    }
}

impl EncodeSize for TaskCadence {
    fn encode_size(&self) -> usize {
        u8::SIZE
    }
}

/// One task with its progress and claim state.
///
/// `completed` is derived from `progress >= required` and is re-stamped by the
/// engine whenever progress moves; `claimed` flips at most once and only after
/// `completed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u16,
    pub name: String,
    pub description: String,
    pub kind: TaskKind,
    pub cadence: TaskCadence,
    pub progress: u64,
    pub required: u64,
    pub reward_coins: u64,
    pub reward_exp: u64,
    pub completed: bool,
    pub claimed: bool,
}

impl Task {
    /// Whether the reward is currently claimable.
    pub fn is_claimable(&self) -> bool {
        self.completed && !self.claimed
    }

    pub fn validate_invariants(&self) -> Result<(), TaskInvariantError> {
        if self.required == 0 {
            return Err(TaskInvariantError::RequiredZero { id: self.id });
        }
        if self.name.len() > MAX_TASK_TEXT_LENGTH {
            return Err(TaskInvariantError::NameTooLong {
                len: self.name.len(),
                max: MAX_TASK_TEXT_LENGTH,
            });
        }
        if self.description.len() > MAX_TASK_TEXT_LENGTH {
            return Err(TaskInvariantError::DescriptionTooLong {
                len: self.description.len(),
                max: MAX_TASK_TEXT_LENGTH,
            });
        }
        if self.progress > self.required {
            return Err(TaskInvariantError::ProgressAboveRequired {
                got: self.progress,
                max: self.required,
            });
        }
        if self.claimed && !self.completed {
            return Err(TaskInvariantError::ClaimedWhileIncomplete { id: self.id });
        }
        Ok(())
    }
}

impl Write for Task {
    fn write(&self, writer: &mut impl BufMut) {
        self.id.write(writer);
        write_string(&self.name, writer);
        write_string(&self.description, writer);
        self.kind.write(writer);
        self.cadence.write(writer);
        self.progress.write(writer);
        self.required.write(writer);
        self.reward_coins.write(writer);
        self.reward_exp.write(writer);
        self.completed.write(writer);
        self.claimed.write(writer);
    }
}

impl Read for Task {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            id: u16::read(reader)?,
            name: read_string(reader, MAX_TASK_TEXT_LENGTH)?,
            description: read_string(reader, MAX_TASK_TEXT_LENGTH)?,
            kind: TaskKind::read(reader)?,
            cadence: TaskCadence::read(reader)?,
            progress: u64::read(reader)?,
            required: u64::read(reader)?,
            reward_coins: u64::read(reader)?,
            reward_exp: u64::read(reader)?,
            completed: bool::read(reader)?,
            claimed: bool::read(reader)?,
        })
    }
}

impl EncodeSize for Task {
    fn encode_size(&self) -> usize {
        self.id.encode_size()
            + string_encode_size(&self.name)
            + string_encode_size(&self.description)
            + self.kind.encode_size()
            + self.cadence.encode_size()
            + self.progress.encode_size()
            + self.required.encode_size()
            + self.reward_coins.encode_size()
            + self.reward_exp.encode_size()
            + self.completed.encode_size()
            + self.claimed.encode_size()
    }
}
