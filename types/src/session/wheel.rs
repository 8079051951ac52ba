use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};

/// Wheel state machine. One spin may be in flight at a time; the payout
/// scheduled when `Spinning` begins returns the wheel to `Idle`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WheelPhase {
    #[default]
    Idle = 0,
    Spinning = 1,
}

impl TryFrom<u8> for WheelPhase {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WheelPhase::Idle),
            1 => Ok(WheelPhase::Spinning),
            _ => Err(()),
        }
    }
}

impl Write for WheelPhase {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for WheelPhase {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        WheelPhase::try_from(value).map_err(|_| Error::InvalidEnum(value))
    }
}

impl EncodeSize for WheelPhase {
    fn encode_size(&self) -> usize {
        u8::SIZE
    }
}
