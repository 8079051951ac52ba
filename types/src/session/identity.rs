use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{
    opt_string_encode_size, read_opt_string, read_string, string_encode_size, write_opt_string,
    write_string, MAX_NAME_LENGTH, MAX_URL_LENGTH, MAX_USERNAME_LENGTH,
};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum IdentityInvariantError {
    #[error("first name too long (len={len}, max={max})")]
    FirstNameTooLong { len: usize, max: usize },
    #[error("last name too long (len={len}, max={max})")]
    LastNameTooLong { len: usize, max: usize },
    #[error("username too long (len={len}, max={max})")]
    UsernameTooLong { len: usize, max: usize },
    #[error("photo url too long (len={len}, max={max})")]
    PhotoUrlTooLong { len: usize, max: usize },
}

/// Authenticated player data handed over by the external identity provider.
/// The engine treats the fields as opaque display data; only its presence
/// gates paid actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub user_id: u64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo_url: Option<String>,
}

impl PlayerIdentity {
    pub fn validate_invariants(&self) -> Result<(), IdentityInvariantError> {
        if self.first_name.len() > MAX_NAME_LENGTH {
            return Err(IdentityInvariantError::FirstNameTooLong {
                len: self.first_name.len(),
                max: MAX_NAME_LENGTH,
            });
        }
        if let Some(last_name) = &self.last_name {
            if last_name.len() > MAX_NAME_LENGTH {
                return Err(IdentityInvariantError::LastNameTooLong {
                    len: last_name.len(),
                    max: MAX_NAME_LENGTH,
                });
            }
        }
        if let Some(username) = &self.username {
            if username.len() > MAX_USERNAME_LENGTH {
                return Err(IdentityInvariantError::UsernameTooLong {
                    len: username.len(),
                    max: MAX_USERNAME_LENGTH,
                });
            }
        }
        if let Some(photo_url) = &self.photo_url {
            if photo_url.len() > MAX_URL_LENGTH {
                return Err(IdentityInvariantError::PhotoUrlTooLong {
                    len: photo_url.len(),
                    max: MAX_URL_LENGTH,
                });
            }
        }
        Ok(())
    }
}

impl Write for PlayerIdentity {
    fn write(&self, writer: &mut impl BufMut) {
        self.user_id.write(writer);
        write_string(&self.first_name, writer);
        write_opt_string(&self.last_name, writer);
        write_opt_string(&self.username, writer);
        write_opt_string(&self.photo_url, writer);
    }
}

impl Read for PlayerIdentity {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            user_id: u64::read(reader)?,
            first_name: read_string(reader, MAX_NAME_LENGTH)?,
            last_name: read_opt_string(reader, MAX_NAME_LENGTH)?,
            username: read_opt_string(reader, MAX_USERNAME_LENGTH)?,
            photo_url: read_opt_string(reader, MAX_URL_LENGTH)?,
        })
    }
}

impl EncodeSize for PlayerIdentity {
    fn encode_size(&self) -> usize {
        self.user_id.encode_size()
            + string_encode_size(&self.first_name)
            + opt_string_encode_size(&self.last_name)
            + opt_string_encode_size(&self.username)
            + opt_string_encode_size(&self.photo_url)
    }
}
