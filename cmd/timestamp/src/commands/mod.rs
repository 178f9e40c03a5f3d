//! CLI commands module.

mod decode;
mod encode;
mod util;

pub use decode::DecodeCommand;
pub use encode::{EncodeCommand, NowCommand};

pub(crate) use util::*;
