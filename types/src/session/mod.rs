//! Session domain types.
//!
//! Defines economy/task/scratch/wheel/identity state and constants used by the
//! progression engine and clients.

mod codec;
mod constants;
mod economy;
mod identity;
mod scratch;
mod snapshot;
mod task;
mod wheel;

pub use codec::{
    opt_string_encode_size, read_opt_string, read_string, string_encode_size, write_opt_string,
    write_string,
};
pub use constants::*;
pub use economy::*;
pub use identity::*;
pub use scratch::*;
pub use snapshot::*;
pub use task::*;
pub use wheel::*;
