use crate::types::TokenConfig;
use soroban_sdk::{Address, Env, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenConfig,
    TotalSupply,
    Owner(u32),
    Balance(Address),
    IsPaused,
}

// Admin and TokenConfig are written by the constructor, so reads never miss.
pub fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn read_config(env: &Env) -> TokenConfig {
    env.storage().instance().get(&DataKey::TokenConfig).unwrap()
}

pub fn write_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::TokenConfig, config);
}

pub fn read_total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn read_balance(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, owner: &Address, balance: u32) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(owner.clone()), &balance);
}

pub fn read_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner(token_id))
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsPaused)
        .unwrap_or(false)
}
