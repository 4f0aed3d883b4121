use soroban_sdk::Env;

/// Returns (current_time, elapsed_time)
pub fn get_elapsed_time(env: &Env, last_update_timestamp: u64) -> (u64, u64) {
    let current_time = env.ledger().timestamp();

    (
        current_time,
        current_time.saturating_sub(last_update_timestamp),
    )
}
