use crate::types::ItemInfo;
use soroban_sdk::{Address, Env, String, Vec, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    BaseUri,
    IsPaused,
    ItemIds,
    Item(u32),
    Balance(Address, u32),
}

pub fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn read_base_uri(env: &Env) -> String {
    env.storage().instance().get(&DataKey::BaseUri).unwrap()
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsPaused)
        .unwrap_or(false)
}

pub fn read_item(env: &Env, id: u32) -> Option<ItemInfo> {
    env.storage().instance().get(&DataKey::Item(id))
}

pub fn write_item(env: &Env, id: u32, item: &ItemInfo) {
    env.storage().instance().set(&DataKey::Item(id), item);
}

pub fn read_item_ids(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::ItemIds)
        .unwrap_or(Vec::new(env))
}

pub fn push_item_id(env: &Env, id: u32) {
    let mut ids = read_item_ids(env);
    ids.push_back(id);
    env.storage().instance().set(&DataKey::ItemIds, &ids);
}

pub fn read_balance(env: &Env, owner: &Address, id: u32) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(owner.clone(), id))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, owner: &Address, id: u32, balance: u32) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(owner.clone(), id), &balance);
}
