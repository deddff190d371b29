pub use config::*;
pub use entry_ledger::*;
pub use raffle::*;
pub use request_tracker::*;
pub use treasury::*;

pub mod config;
pub mod entry_ledger;
pub mod raffle;
pub mod request_tracker;
pub mod treasury;
