use cosmwasm_std::Deps;

use crate::{
    msg::{AssetThresholdResponse, ThresholdsResponse},
    state::{CONFIG, LEDGER, LP_THRESHOLDS, PLAIN_THRESHOLDS},
    AccumulationLedger, Config, ContractError,
};

pub fn get_config(deps: Deps) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

pub fn get_thresholds(deps: Deps) -> Result<ThresholdsResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ThresholdsResponse {
        plain: config.plain_threshold,
        lp: config.lp_threshold,
        target: config.target_threshold,
    })
}

/// Per-asset overrides only, `None` where the global threshold applies.
pub fn get_asset_threshold(
    deps: Deps,
    symbol: String,
) -> Result<AssetThresholdResponse, ContractError> {
    let plain = PLAIN_THRESHOLDS.may_load(deps.storage, &symbol)?;
    let lp = LP_THRESHOLDS.may_load(deps.storage, &symbol)?;
    Ok(AssetThresholdResponse { symbol, plain, lp })
}

pub fn get_ledger(deps: Deps) -> Result<Option<AccumulationLedger>, ContractError> {
    Ok(LEDGER.may_load(deps.storage)?)
}
