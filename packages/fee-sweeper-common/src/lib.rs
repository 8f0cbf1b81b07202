pub mod amm;
pub mod asset;
pub mod error;
pub mod ledger;
