use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{wasm_execute, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128};

/// Messages understood by the multi-token balance ledger. The LP-share ledger speaks
/// the same interface.
#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        to: Addr,
        symbol: String,
        amount: Uint128,
    },
    TransferFrom {
        from: Addr,
        to: Addr,
        symbol: String,
        amount: Uint128,
    },
    Approve {
        spender: Addr,
        symbol: String,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { owner: Addr, symbol: String },

    #[returns(Option<TokenInfoResponse>)]
    TokenInfo { symbol: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub owner: Addr,
    pub symbol: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

/// Thin handle over a ledger contract address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerContract(pub Addr);

impl LedgerContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn balance(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        symbol: &str,
    ) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::Balance {
                owner: owner.clone(),
                symbol: symbol.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    pub fn token_info(
        &self,
        querier: &QuerierWrapper,
        symbol: &str,
    ) -> StdResult<Option<TokenInfoResponse>> {
        querier.query_wasm_smart(
            &self.0,
            &QueryMsg::TokenInfo {
                symbol: symbol.to_string(),
            },
        )
    }

    pub fn transfer(
        &self,
        msgs: &mut Vec<CosmosMsg>,
        to: &Addr,
        symbol: &str,
        amount: Uint128,
    ) -> StdResult<()> {
        if !amount.is_zero() {
            msgs.push(
                wasm_execute(
                    &self.0,
                    &ExecuteMsg::Transfer {
                        to: to.clone(),
                        symbol: symbol.to_string(),
                        amount,
                    },
                    vec![],
                )?
                .into(),
            );
        }
        Ok(())
    }

    pub fn transfer_from(
        &self,
        msgs: &mut Vec<CosmosMsg>,
        from: &Addr,
        to: &Addr,
        symbol: &str,
        amount: Uint128,
    ) -> StdResult<()> {
        if !amount.is_zero() {
            msgs.push(
                wasm_execute(
                    &self.0,
                    &ExecuteMsg::TransferFrom {
                        from: from.clone(),
                        to: to.clone(),
                        symbol: symbol.to_string(),
                        amount,
                    },
                    vec![],
                )?
                .into(),
            );
        }
        Ok(())
    }

    pub fn approve(
        &self,
        msgs: &mut Vec<CosmosMsg>,
        spender: &Addr,
        symbol: &str,
        amount: Uint128,
    ) -> StdResult<()> {
        msgs.push(
            wasm_execute(
                &self.0,
                &ExecuteMsg::Approve {
                    spender: spender.clone(),
                    symbol: symbol.to_string(),
                    amount,
                },
                vec![],
            )?
            .into(),
        );
        Ok(())
    }
}
