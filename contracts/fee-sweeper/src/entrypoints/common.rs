use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Env, Event, MessageInfo, Timestamp, Uint128, WasmMsg,
};
use fee_sweeper_common::error::ContractError;

use crate::{msg::ExecuteMsg, msg::Continuation, Config};

/// Seconds an AMM call stays valid after the block it was issued in.
pub const AMM_DEADLINE_SECONDS: u64 = 3;

pub const SWAP_RESULT_EVENT: &str = "swap_result";

pub fn only_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn only_self(env: &Env, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn amm_deadline(env: &Env) -> Timestamp {
    env.block.time.plus_seconds(AMM_DEADLINE_SECONDS)
}

/// Builds the message that runs `continuation` as a separate execution of this contract.
pub fn continuation_msg(
    contract: &Addr,
    continuation: Continuation,
) -> Result<CosmosMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(&ExecuteMsg::Continue(continuation))?,
        funds: vec![],
    }
    .into())
}

/// Audit record for one deposit item or one accumulated-asset conversion.
pub fn swap_result_event(symbol: &str, amount: Uint128, result: bool, is_lp_token: bool) -> Event {
    Event::new(SWAP_RESULT_EVENT).add_attributes(vec![
        ("symbol", symbol.to_string()),
        ("amount", amount.to_string()),
        ("result", result.to_string()),
        ("is_lp_token", is_lp_token.to_string()),
    ])
}
