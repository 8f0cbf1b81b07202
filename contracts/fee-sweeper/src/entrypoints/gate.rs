use cosmwasm_std::{Deps, QuerierWrapper, Storage, Uint128, Uint256};
use fee_sweeper_common::{
    amm::AmmContract,
    asset::{pair_tokens, pair_symbol, Asset},
    error::ContractError,
};

use crate::{
    route_for,
    state::{LP_THRESHOLDS, PLAIN_THRESHOLDS},
    Config, RouteMap,
};

/// Output the AMM would pay at the end of `path` for `amount_in`, without trading.
pub fn forecast(
    querier: &QuerierWrapper,
    amm: &AmmContract,
    amount_in: Uint128,
    path: &[String],
) -> Result<Uint128, ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidRoute {
            reason: format!("path {:?} has less than 2 symbols", path),
        });
    }

    let amounts = amm.amounts_out(querier, amount_in, path)?;
    amounts
        .get(path.len() - 1)
        .copied()
        .ok_or_else(|| ContractError::InvalidRoute {
            reason: format!("no quote for the end of path {:?}", path),
        })
}

/// `amount * reserve / total_supply`, multiplied wide and floored on narrowing.
pub fn pro_rata_share(
    amount: Uint128,
    reserve: Uint128,
    total_supply: Uint128,
) -> Result<Uint128, ContractError> {
    let share = amount
        .full_mul(reserve)
        .checked_div(Uint256::from(total_supply))?;
    Ok(Uint128::try_from(share)?)
}

pub fn plain_threshold(
    storage: &dyn Storage,
    config: &Config,
    symbol: &str,
) -> Result<Uint128, ContractError> {
    let threshold = PLAIN_THRESHOLDS
        .may_load(storage, symbol)?
        .filter(|threshold| !threshold.is_zero())
        .unwrap_or(config.plain_threshold);
    if threshold.is_zero() {
        return Err(ContractError::ThresholdNotConfigured {
            kind: "Common".to_string(),
            symbol: symbol.to_string(),
        });
    }
    Ok(threshold)
}

pub fn lp_threshold(
    storage: &dyn Storage,
    config: &Config,
    symbol: &str,
) -> Result<Uint128, ContractError> {
    let threshold = LP_THRESHOLDS
        .may_load(storage, symbol)?
        .filter(|threshold| !threshold.is_zero())
        .unwrap_or(config.lp_threshold);
    if threshold.is_zero() {
        return Err(ContractError::ThresholdNotConfigured {
            kind: "Lp".to_string(),
            symbol: symbol.to_string(),
        });
    }
    Ok(threshold)
}

/// Value of `amount` of `symbol` in target units: the amount itself for the target
/// asset, otherwise the forecast along the configured route.
fn target_value(
    deps: Deps,
    config: &Config,
    routes: &RouteMap,
    symbol: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    if config.is_target(symbol) {
        return Ok(amount);
    }

    let path = route_for(routes, symbol)?.resolve(symbol)?;
    if amount.is_zero() {
        return Ok(Uint128::zero());
    }
    forecast(&deps.querier, &config.amm(), amount, &path)
}

/// Plain-token gate: the forecast of the deposit must reach the asset's threshold.
pub fn check_plain_threshold(
    deps: Deps,
    config: &Config,
    routes: &RouteMap,
    item: &Asset,
) -> Result<bool, ContractError> {
    let threshold = plain_threshold(deps.storage, config, &item.symbol)?;
    let value = target_value(deps, config, routes, &item.symbol, item.amount)?;
    Ok(value >= threshold)
}

/// LP-token gate: both underlying sides of the pool share must independently reach
/// their thresholds. Only queries, nothing is withdrawn.
pub fn check_lp_threshold(
    deps: Deps,
    config: &Config,
    routes: &RouteMap,
    item: &Asset,
) -> Result<bool, ContractError> {
    let (token_a, token_b) = pair_tokens(&item.symbol)?;
    let pair = pair_symbol(&token_a, &token_b)?;

    let amm = config.amm();
    let total_supply = amm.total_supply(&deps.querier, &pair)?;
    let reserves = amm.reserves(&deps.querier, &pair)?;

    let mut accepted = true;
    for (symbol, reserve) in [
        (&reserves.symbol_a, reserves.reserve_a),
        (&reserves.symbol_b, reserves.reserve_b),
    ] {
        let threshold = lp_threshold(deps.storage, config, symbol)?;
        let share = pro_rata_share(item.amount, reserve, total_supply)?;
        let value = target_value(deps, config, routes, symbol, share)?;
        accepted &= value >= threshold;
    }

    Ok(accepted)
}
