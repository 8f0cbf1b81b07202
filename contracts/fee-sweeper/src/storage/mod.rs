pub mod config;
pub mod ledger;
pub mod route;

pub use config::*;
pub use ledger::*;
pub use route::*;
