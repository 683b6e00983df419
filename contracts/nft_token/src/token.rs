use crate::error::ContractError;
use crate::events;
use crate::storage::{self, DataKey};
use crate::types::{DEFAULT_NAME, DEFAULT_SYMBOL, MAX_SUPPLY, TokenConfig};
use soroban_sdk::{Address, Env, String, contract, contractimpl, log, panic_with_error};

/// Single collection token with sequential ids starting at 1.
#[contract]
pub struct NftToken;

#[contractimpl]
impl NftToken {
    pub fn __constructor(env: Env, admin: Address, base_uri: String) {
        if !token_metadata::is_valid_base_uri(&base_uri) {
            panic_with_error!(&env, ContractError::InvalidUri);
        }

        let config = TokenConfig {
            name: String::from_str(&env, DEFAULT_NAME),
            symbol: String::from_str(&env, DEFAULT_SYMBOL),
            base_uri,
            max_supply: MAX_SUPPLY,
        };

        env.storage().instance().set(&DataKey::Admin, &admin);
        storage::write_config(&env, &config);
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);
        env.storage().instance().set(&DataKey::IsPaused, &false);
    }

    /// Mints the next token to `caller`.
    pub fn mint(env: Env, caller: Address) -> Result<u32, ContractError> {
        caller.require_auth();
        Self::mint_next(&env, caller)
    }

    /// Mints the next token to `to`. Only the admin may pick the recipient.
    pub fn mint_to(env: Env, to: Address) -> Result<u32, ContractError> {
        storage::read_admin(&env).require_auth();
        Self::mint_next(&env, to)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();

        let owner =
            storage::read_owner(&env, token_id).ok_or(ContractError::NonexistentToken)?;
        if owner != from {
            return Err(ContractError::NotOwner);
        }

        env.storage().instance().set(&DataKey::Owner(token_id), &to);
        storage::write_balance(&env, &from, storage::read_balance(&env, &from) - 1);
        storage::write_balance(&env, &to, storage::read_balance(&env, &to) + 1);

        events::emit_transfer(&env, Some(from), to, token_id);

        Ok(())
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, ContractError> {
        if storage::read_owner(&env, token_id).is_none() {
            return Err(ContractError::NonexistentToken);
        }
        let config = storage::read_config(&env);
        token_metadata::token_uri(&env, &config.base_uri, token_id)
            .ok_or(ContractError::InvalidUri)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ContractError> {
        storage::read_owner(&env, token_id).ok_or(ContractError::NonexistentToken)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        storage::read_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u32 {
        storage::read_total_supply(&env)
    }

    pub fn max_supply(env: Env) -> u32 {
        storage::read_config(&env).max_supply
    }

    pub fn name(env: Env) -> String {
        storage::read_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::read_config(&env).symbol
    }

    pub fn base_uri(env: Env) -> String {
        storage::read_config(&env).base_uri
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

    pub fn set_base_uri(env: Env, base_uri: String) -> Result<(), ContractError> {
        storage::read_admin(&env).require_auth();
        if !token_metadata::is_valid_base_uri(&base_uri) {
            return Err(ContractError::InvalidUri);
        }
        let mut config = storage::read_config(&env);
        config.base_uri = base_uri;
        storage::write_config(&env, &config);
        Ok(())
    }

    // All checks run before the first write so a rejected mint leaves no trace.
    fn mint_next(env: &Env, to: Address) -> Result<u32, ContractError> {
        if storage::is_paused(env) {
            return Err(ContractError::ContractPaused);
        }

        let max_supply = storage::read_config(env).max_supply;
        let total_supply = storage::read_total_supply(env);
        if total_supply >= max_supply {
            return Err(ContractError::MaxSupplyExceeded);
        }

        let token_id = total_supply + 1;
        env.storage().instance().set(&DataKey::Owner(token_id), &to);
        storage::write_balance(env, &to, storage::read_balance(env, &to) + 1);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &token_id);

        log!(env, "minted", token_id, to);
        events::emit_transfer(env, None, to, token_id);

        Ok(token_id)
    }
}
