use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{wasm_execute, Addr, CosmosMsg, QuerierWrapper, StdResult, Timestamp, Uint128};

use crate::error::ContractError;

#[cw_serde]
pub enum ExecuteMsg {
    SwapExactTokensForTokens {
        path: Vec<String>,
        amount_in: Uint128,
        amount_out_min: Uint128,
        to: Addr,
        deadline: Timestamp,
    },
    RemoveLiquidity {
        symbol_a: String,
        symbol_b: String,
        liquidity_remove: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: Addr,
        deadline: Timestamp,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AmountsOutResponse)]
    AmountsOut { amount_in: Uint128, path: Vec<String> },

    #[returns(ReservesResponse)]
    Reserves { symbol_pair: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply { symbol_pair: String },
}

#[cw_serde]
pub struct AmountsOutResponse {
    /// One entry per path position, the first is the input amount.
    pub amounts: Vec<Uint128>,
}

#[cw_serde]
pub struct ReservesResponse {
    pub symbol_pair: String,
    pub symbol_a: String,
    pub symbol_b: String,
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub symbol_pair: String,
    pub total_supply: Uint128,
}

/// Thin handle over the AMM contract address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmmContract(pub Addr);

impl AmmContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn amounts_out(
        &self,
        querier: &QuerierWrapper,
        amount_in: Uint128,
        path: &[String],
    ) -> StdResult<Vec<Uint128>> {
        let res: AmountsOutResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::AmountsOut {
                amount_in,
                path: path.to_vec(),
            },
        )?;
        Ok(res.amounts)
    }

    /// Reserves of `symbol_pair`, rejecting an answer for a different pair.
    pub fn reserves(
        &self,
        querier: &QuerierWrapper,
        symbol_pair: &str,
    ) -> Result<ReservesResponse, ContractError> {
        let res: ReservesResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::Reserves {
                symbol_pair: symbol_pair.to_string(),
            },
        )?;
        if res.symbol_pair != symbol_pair {
            return Err(ContractError::PairMismatch {
                expected: symbol_pair.to_string(),
                actual: res.symbol_pair,
            });
        }
        Ok(res)
    }

    pub fn total_supply(
        &self,
        querier: &QuerierWrapper,
        symbol_pair: &str,
    ) -> Result<Uint128, ContractError> {
        let res: TotalSupplyResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::TotalSupply {
                symbol_pair: symbol_pair.to_string(),
            },
        )?;
        if res.symbol_pair != symbol_pair {
            return Err(ContractError::PairMismatch {
                expected: symbol_pair.to_string(),
                actual: res.symbol_pair,
            });
        }
        Ok(res.total_supply)
    }

    pub fn swap_exact_tokens_for_tokens(
        &self,
        path: Vec<String>,
        amount_in: Uint128,
        amount_out_min: Uint128,
        to: &Addr,
        deadline: Timestamp,
    ) -> StdResult<CosmosMsg> {
        Ok(wasm_execute(
            &self.0,
            &ExecuteMsg::SwapExactTokensForTokens {
                path,
                amount_in,
                amount_out_min,
                to: to.clone(),
                deadline,
            },
            vec![],
        )?
        .into())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &self,
        symbol_a: &str,
        symbol_b: &str,
        liquidity_remove: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: &Addr,
        deadline: Timestamp,
    ) -> StdResult<CosmosMsg> {
        Ok(wasm_execute(
            &self.0,
            &ExecuteMsg::RemoveLiquidity {
                symbol_a: symbol_a.to_string(),
                symbol_b: symbol_b.to_string(),
                liquidity_remove,
                amount_a_min,
                amount_b_min,
                to: to.clone(),
                deadline,
            },
            vec![],
        )?
        .into())
    }
}
