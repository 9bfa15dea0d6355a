// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling: splitting raw messages and parsing headers.

mod message;
mod pattern;

pub use message::CommitMessage;
pub use pattern::{type_token, Header, HeaderPattern};
