use cosmwasm_std::Uint128;
use cw_storage_plus::{Item, Map};
use fee_sweeper_common::asset::Asset;

use crate::{AccumulationLedger, Config};

pub const CONFIG: Item<Config> = Item::new("config");

/// Per-asset overrides of the plain-token threshold.
pub const PLAIN_THRESHOLDS: Map<&str, Uint128> = Map::new("plain_thresholds");

/// Per-asset overrides of the LP-token threshold, keyed by underlying symbol.
pub const LP_THRESHOLDS: Map<&str, Uint128> = Map::new("lp_thresholds");

pub const LEDGER: Item<AccumulationLedger> = Item::new("ledger");

/// Pool shares accepted by the running LP sweep, indexed by batch position.
pub const UNWIND_QUEUE: Item<Vec<Asset>> = Item::new("unwind_queue");
