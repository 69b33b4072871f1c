//! Application layer: simulators, commands and the session
//!
//! This layer orchestrates domain logic and produces statuses for display.

pub mod command;
pub mod error;
pub mod error_ext;
pub mod services;
pub mod session;
pub mod status;

pub use command::{Command, TreeAction};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{Response, Session};
pub use status::{Report, Status, StatusKind};
