use cosmwasm_std::{
    attr, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, SubMsg, Uint128,
};
use fee_sweeper_common::{asset::Asset, error::ContractError};

use crate::{
    contract::{reply_id, UNWIND_REPLY_ID},
    msg::{AssetThreshold, Continuation, InstantiateMsg},
    state::{CONFIG, LEDGER, LP_THRESHOLDS, PLAIN_THRESHOLDS, UNWIND_QUEUE},
    validate_routes, AccumulationLedger, Config, FailurePolicy, RouteMap, SlippageBase,
    DEFAULT_TARGET_THRESHOLD,
};

use super::{
    check_lp_threshold, check_plain_threshold, continuation_msg, only_owner, swap_result_event,
};

/// Stores the configuration once.
///
/// # Errors
/// - Reverts the call when a configuration already exists or the target asset is blank.
pub fn initialize(
    deps: DepsMut,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }
    if msg.target_asset.trim().is_empty() {
        return Err(ContractError::TargetAssetNotConfigured {});
    }

    let config = Config {
        owner: msg.owner.unwrap_or(info.sender),
        receiver: msg.receiver,
        target_asset: msg.target_asset,
        amm: msg.amm,
        lp_ledger: msg.lp_ledger.unwrap_or_else(|| msg.ledger.clone()),
        ledger: msg.ledger,
        plain_threshold: Uint128::zero(),
        lp_threshold: Uint128::zero(),
        target_threshold: msg
            .target_threshold
            .filter(|threshold| !threshold.is_zero())
            .unwrap_or(DEFAULT_TARGET_THRESHOLD),
        failure_policy: msg.failure_policy.unwrap_or_default(),
        slippage_base: msg.slippage_base.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "initialize"),
        attr("owner", config.owner.as_str()),
        attr("receiver", config.receiver.as_str()),
        attr("target_asset", config.target_asset),
    ]))
}

/// Allows the owner to change the asset everything is converted into.
///
/// # Errors
/// - Reverts the call when the caller is not the owner or the ledger does not know `symbol`.
pub fn set_target_asset(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    let token_info = config.ledger().token_info(&deps.querier, &symbol)?;
    if !token_info.map_or(false, |token| token.symbol == symbol) {
        return Err(ContractError::TargetAssetNotFound { symbol });
    }

    let old_target_asset = std::mem::replace(&mut config.target_asset, symbol);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_target_asset"),
        attr("old_target_asset", old_target_asset),
        attr("new_target_asset", config.target_asset),
    ]))
}

pub fn set_receiver(
    deps: DepsMut,
    info: MessageInfo,
    receiver: Addr,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    config.receiver = receiver;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_receiver"),
        attr("receiver", config.receiver.as_str()),
    ]))
}

/// Allows the owner to adjust the global thresholds. A missing or zero value keeps the
/// current one.
pub fn set_thresholds(
    deps: DepsMut,
    info: MessageInfo,
    plain: Option<Uint128>,
    lp: Option<Uint128>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    if let Some(plain) = plain.filter(|value| !value.is_zero()) {
        config.plain_threshold = plain;
    }
    if let Some(lp) = lp.filter(|value| !value.is_zero()) {
        config.lp_threshold = lp;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_thresholds"),
        attr("plain_threshold", config.plain_threshold.to_string()),
        attr("lp_threshold", config.lp_threshold.to_string()),
    ]))
}

pub fn set_target_threshold(
    deps: DepsMut,
    info: MessageInfo,
    threshold: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    if threshold.is_zero() {
        return Err(ContractError::InvalidThreshold {});
    }
    config.target_threshold = threshold;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_target_threshold"),
        attr("target_threshold", threshold.to_string()),
    ]))
}

/// Allows the owner to override thresholds per asset. A zero threshold removes the
/// override so the global value applies again.
pub fn set_asset_thresholds(
    deps: DepsMut,
    info: MessageInfo,
    plain: Vec<AssetThreshold>,
    lp: Vec<AssetThreshold>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    for (map, overrides) in [(PLAIN_THRESHOLDS, &plain), (LP_THRESHOLDS, &lp)] {
        for AssetThreshold { symbol, threshold } in overrides {
            if threshold.is_zero() {
                map.remove(deps.storage, symbol);
            } else {
                map.save(deps.storage, symbol, threshold)?;
            }
        }
    }

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_asset_thresholds"),
        attr("plain_overrides", plain.len().to_string()),
        attr("lp_overrides", lp.len().to_string()),
    ]))
}

pub fn set_conversion_policy(
    deps: DepsMut,
    info: MessageInfo,
    failure_policy: Option<FailurePolicy>,
    slippage_base: Option<SlippageBase>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    if let Some(failure_policy) = failure_policy {
        config.failure_policy = failure_policy;
    }
    if let Some(slippage_base) = slippage_base {
        config.slippage_base = slippage_base;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_conversion_policy"),
        attr("failure_policy", format!("{:?}", config.failure_policy)),
        attr("slippage_base", format!("{:?}", config.slippage_base)),
    ]))
}

/// Allows the owner to hand the contract over.
///
/// # Errors
/// - Reverts the call when the caller is not the owner.
pub fn change_owner(deps: DepsMut, info: MessageInfo, owner: Addr) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;

    config.owner = owner;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "change_owner"),
        attr("old_owner", info.sender.as_str()),
        attr("new_owner", config.owner.as_str()),
    ]))
}

/// Sweeps plain tokens from the owner and converts them into the target asset.
///
/// Every item is gated on its forecast first. Rejected items only produce a failed
/// `swap_result` event and stay with the owner. Accepted items are pulled into custody,
/// then the final conversion pass runs as a follow-up.
///
/// # Errors
/// - Reverts the call when the caller is not the owner, the batch is empty, a route is
///   missing or malformed, a route expects a zero price, or a required threshold is not
///   configured.
pub fn sweep_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    items: Vec<Asset>,
    routes: RouteMap,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;
    if items.is_empty() {
        return Err(ContractError::EmptyBatch {});
    }
    validate_routes(&routes)?;

    let mut ledger = AccumulationLedger::new(info.sender.clone());
    let mut msgs: Vec<CosmosMsg> = vec![];
    let mut events: Vec<Event> = vec![];
    let token_ledger = config.ledger();
    let mut accepted = 0usize;

    for item in &items {
        if !check_plain_threshold(deps.as_ref(), &config, &routes, item)? {
            events.push(swap_result_event(&item.symbol, item.amount, false, false));
            continue;
        }

        ledger.credit(&item.symbol, item.amount)?;
        token_ledger.transfer_from(
            &mut msgs,
            &info.sender,
            &env.contract.address,
            &item.symbol,
            item.amount,
        )?;
        accepted += 1;
    }
    LEDGER.save(deps.storage, &ledger)?;

    msgs.push(continuation_msg(
        &env.contract.address,
        Continuation::ConvertAccumulated { routes },
    )?);

    Ok(Response::new()
        .add_messages(msgs)
        .add_events(events)
        .add_attributes(vec![
            attr("action", "sweep_tokens"),
            attr("items", items.len().to_string()),
            attr("accepted", accepted.to_string()),
        ]))
}

/// Sweeps pool shares from the owner, withdraws their liquidity and converts the
/// underlying tokens into the target asset.
///
/// Each accepted share is pulled into custody and unwound by its own follow-up, which
/// fails in isolation. The final conversion pass runs after all of them.
///
/// # Errors
/// - Reverts the call when the caller is not the owner, the batch is empty, a symbol or
///   route is malformed or missing, a route expects a zero price, or a required
///   threshold is not configured.
pub fn sweep_lp_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    items: Vec<Asset>,
    routes: RouteMap,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_owner(&config, &info)?;
    if items.is_empty() {
        return Err(ContractError::EmptyBatch {});
    }
    validate_routes(&routes)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    let mut sub_msgs: Vec<SubMsg> = vec![];
    let mut events: Vec<Event> = vec![];
    let mut unwind_queue: Vec<Asset> = vec![];
    let lp_ledger = config.lp_ledger();

    for item in &items {
        if !check_lp_threshold(deps.as_ref(), &config, &routes, item)? {
            events.push(swap_result_event(&item.symbol, item.amount, false, true));
            continue;
        }

        lp_ledger.transfer_from(
            &mut msgs,
            &info.sender,
            &env.contract.address,
            &item.symbol,
            item.amount,
        )?;
        // the share must be in custody before its unwind runs
        sub_msgs.extend(msgs.drain(..).map(SubMsg::new));

        let index = unwind_queue.len() as u64;
        sub_msgs.push(SubMsg::reply_on_error(
            continuation_msg(
                &env.contract.address,
                Continuation::Unwind { item: item.clone() },
            )?,
            reply_id(UNWIND_REPLY_ID, index),
        ));
        unwind_queue.push(item.clone());
    }

    LEDGER.save(deps.storage, &AccumulationLedger::new(info.sender.clone()))?;
    UNWIND_QUEUE.save(deps.storage, &unwind_queue)?;

    sub_msgs.push(SubMsg::new(continuation_msg(
        &env.contract.address,
        Continuation::ConvertAccumulated { routes },
    )?));

    Ok(Response::new()
        .add_submessages(sub_msgs)
        .add_events(events)
        .add_attributes(vec![
            attr("action", "sweep_lp_tokens"),
            attr("items", items.len().to_string()),
            attr("accepted", unwind_queue.len().to_string()),
        ]))
}
