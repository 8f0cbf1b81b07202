use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use fee_sweeper_common::{amm::AmmContract, ledger::LedgerContract};

pub const DEFAULT_TARGET_THRESHOLD: Uint128 = Uint128::new(500_000000);

/// What happens to an accumulated balance whose final conversion is skipped or fails.
#[cw_serde]
#[derive(Default, Copy)]
pub enum FailurePolicy {
    /// Leave the funds in custody, they ride along with the next batch.
    #[default]
    Retain,
    /// Send this batch's amount back to the depositor.
    Refund,
}

/// Which amount the final conversion forecasts, checks and swaps.
#[cw_serde]
#[derive(Default, Copy)]
pub enum SlippageBase {
    /// The whole custody balance of the asset, leftovers of earlier batches included.
    #[default]
    Accumulated,
    /// Only the amount accumulated by the current batch.
    Incremental,
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub receiver: Addr,
    pub target_asset: String,
    pub amm: Addr,
    pub ledger: Addr,
    pub lp_ledger: Addr,
    pub plain_threshold: Uint128,
    pub lp_threshold: Uint128,
    pub target_threshold: Uint128,
    pub failure_policy: FailurePolicy,
    pub slippage_base: SlippageBase,
}

impl Config {
    pub fn amm(&self) -> AmmContract {
        AmmContract(self.amm.clone())
    }

    pub fn ledger(&self) -> LedgerContract {
        LedgerContract(self.ledger.clone())
    }

    pub fn lp_ledger(&self) -> LedgerContract {
        LedgerContract(self.lp_ledger.clone())
    }

    pub fn is_target(&self, symbol: &str) -> bool {
        self.target_asset == symbol
    }
}
