pub mod contract;
pub mod entrypoints;
pub mod msg;
pub mod state;

pub mod storage;

pub use fee_sweeper_common::error::ContractError;
pub use storage::*;

#[cfg(test)]
mod tests;
