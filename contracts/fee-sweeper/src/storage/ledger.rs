use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, OverflowError, Uint128};
use fee_sweeper_common::asset::Asset;

/// Per-batch accumulation of swept amounts keyed by symbol. Reset at the start of
/// every sweep, read by the final conversion pass.
#[cw_serde]
pub struct AccumulationLedger {
    pub depositor: Addr,
    pub entries: Vec<Asset>,
}

impl AccumulationLedger {
    pub fn new(depositor: Addr) -> Self {
        Self {
            depositor,
            entries: vec![],
        }
    }

    /// Adds `amount` to the entry for `symbol`, creating it on first touch.
    pub fn credit(&mut self, symbol: &str, amount: Uint128) -> Result<(), OverflowError> {
        match self.entries.iter_mut().find(|entry| entry.symbol == symbol) {
            Some(entry) => entry.amount = entry.amount.checked_add(amount)?,
            None => self.entries.push(Asset::new(symbol, amount)),
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
