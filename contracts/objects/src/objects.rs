use crate::error::ContractError;
use crate::events;
use crate::storage::{self, DataKey};
use crate::types::{BASE_URI, DEFAULT_ITEMS, ItemInfo, NEW_ITEM_MAX_SUPPLY, NEW_ITEM_SEED};
use soroban_sdk::{Address, Bytes, Env, String, Vec, contract, contractimpl, log};

/// Multi item token. Every item id has its own supply counter and ceiling.
#[contract]
pub struct Objects;

#[contractimpl]
impl Objects {
    /// Registers the default catalogue and mints each item's seed supply to
    /// `admin`.
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::BaseUri, &String::from_str(&env, BASE_URI));
        env.storage().instance().set(&DataKey::IsPaused, &false);

        for (id, seed, max_supply) in DEFAULT_ITEMS {
            storage::write_item(
                &env,
                id,
                &ItemInfo {
                    supply: seed,
                    max_supply,
                },
            );
            storage::push_item_id(&env, id);
            storage::write_balance(&env, &admin, id, seed);
            events::emit_transfer_single(&env, admin.clone(), None, admin.clone(), id, seed);
        }
    }

    /// Mints `amount` units of item `id` to `caller` and returns the new
    /// supply of that item.
    ///
    /// An id without an item yet gets one with `NEW_ITEM_SEED` units minted
    /// to the admin and a `NEW_ITEM_MAX_SUPPLY` ceiling, then the mint
    /// proceeds against it. Rejected without any state change if the
    /// contract is paused or the item's ceiling would be exceeded.
    pub fn create(
        env: Env,
        caller: Address,
        id: u32,
        amount: u32,
        data: Bytes,
    ) -> Result<u32, ContractError> {
        caller.require_auth();

        if storage::is_paused(&env) {
            return Err(ContractError::ContractPaused);
        }
        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }
        let existing = storage::read_item(&env, id);
        let is_new = existing.is_none();
        let mut item = existing.unwrap_or(ItemInfo {
            supply: NEW_ITEM_SEED,
            max_supply: NEW_ITEM_MAX_SUPPLY,
        });
        let supply = item
            .supply
            .checked_add(amount)
            .filter(|supply| *supply <= item.max_supply)
            .ok_or(ContractError::ExceedsSupply)?;
        let base_uri = storage::read_base_uri(&env);
        let uri =
            token_metadata::token_uri(&env, &base_uri, id).ok_or(ContractError::InvalidUri)?;

        if is_new {
            let admin = storage::read_admin(&env);
            storage::push_item_id(&env, id);
            let admin_balance = storage::read_balance(&env, &admin, id);
            storage::write_balance(&env, &admin, id, admin_balance + NEW_ITEM_SEED);
            log!(&env, "item seeded", id, NEW_ITEM_SEED);
            events::emit_transfer_single(&env, admin.clone(), None, admin, id, NEW_ITEM_SEED);
        }

        item.supply = supply;
        storage::write_item(&env, id, &item);
        let balance = storage::read_balance(&env, &caller, id);
        storage::write_balance(&env, &caller, id, balance + amount);

        log!(&env, "created", id, amount, data.len());
        events::emit_transfer_single(&env, caller.clone(), None, caller, id, amount);
        events::emit_permanent_uri(&env, uri, id);

        Ok(supply)
    }

    /// Registers a new item type with no units minted yet.
    pub fn add_item(env: Env, id: u32, max_supply: u32) -> Result<(), ContractError> {
        storage::read_admin(&env).require_auth();

        if storage::read_item(&env, id).is_some() {
            return Err(ContractError::ItemAlreadyExists);
        }
        if max_supply == 0 {
            return Err(ContractError::InvalidAmount);
        }

        storage::write_item(
            &env,
            id,
            &ItemInfo {
                supply: 0,
                max_supply,
            },
        );
        storage::push_item_id(&env, id);
        log!(&env, "item added", id, max_supply);

        Ok(())
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        id: u32,
        amount: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();

        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }
        let from_balance = storage::read_balance(&env, &from, id);
        if from_balance < amount {
            return Err(ContractError::InsufficientBalance);
        }

        storage::write_balance(&env, &from, id, from_balance - amount);
        let to_balance = storage::read_balance(&env, &to, id);
        storage::write_balance(&env, &to, id, to_balance + amount);

        events::emit_transfer_single(&env, from.clone(), Some(from), to, id, amount);

        Ok(())
    }

    pub fn uri(env: Env, id: u32) -> Result<String, ContractError> {
        if storage::read_item(&env, id).is_none() {
            return Err(ContractError::NonexistentToken);
        }
        let base_uri = storage::read_base_uri(&env);
        token_metadata::token_uri(&env, &base_uri, id).ok_or(ContractError::InvalidUri)
    }

    /// Units of `id` minted so far, 0 for unknown items.
    pub fn supply(env: Env, id: u32) -> u32 {
        storage::read_item(&env, id)
            .map(|item| item.supply)
            .unwrap_or(0)
    }

    pub fn max_supply(env: Env, id: u32) -> Result<u32, ContractError> {
        storage::read_item(&env, id)
            .map(|item| item.max_supply)
            .ok_or(ContractError::NonexistentToken)
    }

    pub fn item_ids(env: Env) -> Vec<u32> {
        storage::read_item_ids(&env)
    }

    pub fn balance_of(env: Env, owner: Address, id: u32) -> u32 {
        storage::read_balance(&env, &owner, id)
    }

    pub fn balance_of_batch(
        env: Env,
        owners: Vec<Address>,
        ids: Vec<u32>,
    ) -> Result<Vec<u32>, ContractError> {
        if owners.len() != ids.len() {
            return Err(ContractError::LengthMismatch);
        }

        let mut balances = Vec::new(&env);
        for (owner, id) in owners.iter().zip(ids.iter()) {
            balances.push_back(storage::read_balance(&env, &owner, id));
        }
        Ok(balances)
    }

    pub fn admin(env: Env) -> Address {
        storage::read_admin(&env)
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn set_paused(env: Env, paused: bool) {
        storage::read_admin(&env).require_auth();
        env.storage().instance().set(&DataKey::IsPaused, &paused);
        log!(&env, "pause changed", paused);
        events::emit_pause_changed(&env, paused);
    }
}
