mod conversion;
mod sweep_lp_tokens;
