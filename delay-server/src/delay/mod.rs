//! Next-departure queries.
//!
//! Ties the domain encoders to the two providers: the legacy station board
//! for the command and list paths, and the connections API for the summary
//! path.

mod command;
mod error;
mod service;

pub use command::Command;
pub use error::DelayError;
pub use service::DelayService;
