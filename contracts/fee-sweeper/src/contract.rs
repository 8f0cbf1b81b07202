#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use fee_sweeper_common::error::ContractError;

use crate::msg::{Continuation, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::entrypoints::*;

use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:fee-sweeper";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// reply kinds, the batch position of the item travels in the upper bits of the id
pub const UNWIND_REPLY_ID: u64 = 1;
pub const CONVERT_REPLY_ID: u64 = 2;
const REPLY_KIND_BITS: u32 = 8;

pub fn reply_id(kind: u64, index: u64) -> u64 {
    (index << REPLY_KIND_BITS) | kind
}

fn split_reply_id(id: u64) -> (u64, u64) {
    (id & ((1 << REPLY_KIND_BITS) - 1), id >> REPLY_KIND_BITS)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let res = initialize(deps.branch(), info, msg)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetTargetAsset { symbol } => set_target_asset(deps, info, symbol),
        ExecuteMsg::SetReceiver { receiver } => set_receiver(deps, info, receiver),
        ExecuteMsg::SetThresholds { plain, lp } => set_thresholds(deps, info, plain, lp),
        ExecuteMsg::SetTargetThreshold { threshold } => {
            set_target_threshold(deps, info, threshold)
        }
        ExecuteMsg::SetAssetThresholds { plain, lp } => {
            set_asset_thresholds(deps, info, plain, lp)
        }
        ExecuteMsg::SetConversionPolicy {
            failure_policy,
            slippage_base,
        } => set_conversion_policy(deps, info, failure_policy, slippage_base),
        ExecuteMsg::ChangeOwner { owner } => change_owner(deps, info, owner),
        ExecuteMsg::SweepTokens { items, routes } => sweep_tokens(deps, env, info, items, routes),
        ExecuteMsg::SweepLpTokens { items, routes } => {
            sweep_lp_tokens(deps, env, info, items, routes)
        }
        ExecuteMsg::Continue(continuation) => {
            only_self(&env, &info)?;
            match continuation {
                Continuation::Unwind { item } => unwind(deps, env, item),
                Continuation::CreditLedger {
                    symbol_a,
                    symbol_b,
                    balance_a_before,
                    balance_b_before,
                } => credit_ledger(
                    deps,
                    env,
                    symbol_a,
                    symbol_b,
                    balance_a_before,
                    balance_b_before,
                ),
                Continuation::ConvertAccumulated { routes } => {
                    convert_accumulated(deps, env, routes)
                }
                Continuation::ConvertToTarget {
                    symbol,
                    amount,
                    route,
                } => convert_to_target(deps, env, symbol, amount, route),
                Continuation::ClearBatch {} => clear_batch(deps),
            }
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&get_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&get_config(deps)?.owner),
        QueryMsg::Receiver {} => to_json_binary(&get_config(deps)?.receiver),
        QueryMsg::TargetAsset {} => to_json_binary(&get_config(deps)?.target_asset),
        QueryMsg::Thresholds {} => to_json_binary(&get_thresholds(deps)?),
        QueryMsg::AssetThreshold { symbol } => {
            to_json_binary(&get_asset_threshold(deps, symbol)?)
        }
        QueryMsg::Ledger {} => to_json_binary(&get_ledger(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let original_version =
        cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("new_version", original_version.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    let (kind, index) = split_reply_id(reply.id);
    // continuations are dispatched with reply_on_error only
    let error = match reply.result.into_result() {
        Ok(_) => return Err(ContractError::UnrecognizedReplyId { id: reply.id }),
        Err(error) => error,
    };
    match kind {
        UNWIND_REPLY_ID => reply::unwind_failed(deps, index, error),
        CONVERT_REPLY_ID => reply::convert_failed(deps, index, error),
        _ => Err(ContractError::UnrecognizedReplyId { id: reply.id }),
    }
}
