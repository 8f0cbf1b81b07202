use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Marker in front of a pool-share symbol, e.g. `ALP ELF-USDT`.
pub const PAIR_PREFIX: &str = "ALP";
pub const PAIR_SEPARATOR: char = '-';

/// One unit of work in a sweep: a token symbol and the amount to sweep.
/// For LP sweeps the symbol is the pool-share symbol.
#[cw_serde]
pub struct Asset {
    pub symbol: String,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(symbol: impl Into<String>, amount: impl Into<Uint128>) -> Self {
        Self {
            symbol: symbol.into(),
            amount: amount.into(),
        }
    }
}

/// Strips the pool-share marker, `ALP ELF-USDT` becomes `ELF-USDT`.
/// Symbols without the marker are only trimmed.
pub fn extract_pair(symbol: &str) -> Result<String, ContractError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ContractError::InvalidRoute {
            reason: "symbol blank".to_string(),
        });
    }

    Ok(symbol
        .strip_prefix(PAIR_PREFIX)
        .unwrap_or(symbol)
        .trim()
        .to_string())
}

/// Splits a pair into its two constituents in ascending order.
pub fn split_pair(pair: &str) -> Result<(String, String), ContractError> {
    if pair.matches(PAIR_SEPARATOR).count() != 1 {
        return Err(ContractError::InvalidRoute {
            reason: format!("invalid token pair {}", pair),
        });
    }

    let (a, b) = pair
        .split_once(PAIR_SEPARATOR)
        .ok_or_else(|| ContractError::InvalidRoute {
            reason: format!("invalid token pair {}", pair),
        })?;
    sort_symbols(a, b)
}

/// Splits a (possibly prefixed) pool-share symbol into its two underlying symbols.
pub fn pair_tokens(symbol: &str) -> Result<(String, String), ContractError> {
    split_pair(&extract_pair(symbol)?)
}

pub fn sort_symbols(a: &str, b: &str) -> Result<(String, String), ContractError> {
    if a.is_empty() || b.is_empty() {
        return Err(ContractError::InvalidRoute {
            reason: "invalid symbols for sorting".to_string(),
        });
    }
    if a <= b {
        Ok((a.to_string(), b.to_string()))
    } else {
        Ok((b.to_string(), a.to_string()))
    }
}

/// Canonical pair symbol, the same pair never has two spellings.
pub fn pair_symbol(a: &str, b: &str) -> Result<String, ContractError> {
    let (a, b) = sort_symbols(a, b)?;
    Ok(format!("{}{}{}", a, PAIR_SEPARATOR, b))
}

/// Canonical pool-share symbol, `ALP` followed by the pair.
pub fn lp_symbol(a: &str, b: &str) -> Result<String, ContractError> {
    Ok(format!("{} {}", PAIR_PREFIX, pair_symbol(a, b)?))
}
