use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use fee_sweeper_common::asset::Asset;

use crate::{AccumulationLedger, Config, FailurePolicy, Route, RouteMap, SlippageBase};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Option<Addr>,
    pub receiver: Addr,
    pub target_asset: String,
    pub amm: Addr,
    pub ledger: Addr,
    /// Ledger holding pool shares, the token ledger when absent.
    pub lp_ledger: Option<Addr>,
    pub target_threshold: Option<Uint128>,
    pub failure_policy: Option<FailurePolicy>,
    pub slippage_base: Option<SlippageBase>,
}

#[cw_serde]
pub struct AssetThreshold {
    pub symbol: String,
    pub threshold: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetTargetAsset {
        symbol: String,
    },
    SetReceiver {
        receiver: Addr,
    },
    SetThresholds {
        plain: Option<Uint128>,
        lp: Option<Uint128>,
    },
    SetTargetThreshold {
        threshold: Uint128,
    },
    SetAssetThresholds {
        plain: Vec<AssetThreshold>,
        lp: Vec<AssetThreshold>,
    },
    SetConversionPolicy {
        failure_policy: Option<FailurePolicy>,
        slippage_base: Option<SlippageBase>,
    },
    ChangeOwner {
        owner: Addr,
    },
    SweepTokens {
        items: Vec<Asset>,
        routes: RouteMap,
    },
    SweepLpTokens {
        items: Vec<Asset>,
        routes: RouteMap,
    },
    /// Follow-up stages the contract dispatches to itself.
    Continue(Continuation),
}

#[cw_serde]
pub enum Continuation {
    /// Approve and withdraw one accepted pool share, then queue `CreditLedger`.
    Unwind { item: Asset },
    /// Credit what the withdrawal actually paid out.
    CreditLedger {
        symbol_a: String,
        symbol_b: String,
        balance_a_before: Uint128,
        balance_b_before: Uint128,
    },
    /// Final pass over the accumulation ledger.
    ConvertAccumulated { routes: RouteMap },
    /// Convert one ledger entry into the target asset.
    ConvertToTarget {
        symbol: String,
        amount: Uint128,
        route: Route,
    },
    /// Drop the batch state once every conversion has settled.
    ClearBatch {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(Addr)]
    Owner {},

    #[returns(Addr)]
    Receiver {},

    #[returns(String)]
    TargetAsset {},

    #[returns(ThresholdsResponse)]
    Thresholds {},

    #[returns(AssetThresholdResponse)]
    AssetThreshold { symbol: String },

    #[returns(Option<AccumulationLedger>)]
    Ledger {},
}

#[cw_serde]
pub struct ThresholdsResponse {
    pub plain: Uint128,
    pub lp: Uint128,
    pub target: Uint128,
}

#[cw_serde]
pub struct AssetThresholdResponse {
    pub symbol: String,
    pub plain: Option<Uint128>,
    pub lp: Option<Uint128>,
}

#[cw_serde]
pub struct MigrateMsg {}
