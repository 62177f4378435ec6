//! HR slice: the employee / role / department workflows behind the
//! interactive tracker.

pub mod action;
pub mod error;
pub mod handlers;
pub mod prompt;
pub mod seed;
pub mod session;
pub mod store;
pub mod table;

pub use action::Action;
pub use error::{HrError, HrResult};
pub use handlers::Outcome;
pub use prompt::{Prompter, TerminalPrompter};
pub use seed::{SeededHr, seed_hr_demo};
pub use session::Session;
pub use store::{Choice, DbStore, HrStore};
pub use table::Table;
