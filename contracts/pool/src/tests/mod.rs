mod initialize;
mod reserve_stable_rate;
mod reserve_status;
mod set_reserve_factor;
mod update_reserve_rates;
