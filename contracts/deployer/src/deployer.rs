use crate::error::DeployerError;
use crate::events;
use crate::storage::DataKey;
use crate::types::{ContractKind, Deployment};
use soroban_sdk::{Address, BytesN, Env, String, contract, contractimpl, log};

/// Instantiates token contracts from uploaded WASM and keeps a record of
/// every address it produced.
#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::DeploymentCount, &0u32);
    }

    /// Deploys an `NftToken` owned by the admin with `base_uri` as its
    /// metadata prefix.
    pub fn deploy_nft_token(
        env: Env,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
        base_uri: String,
    ) -> Address {
        let admin = Self::admin(env.clone());
        admin.require_auth();

        let address = env
            .deployer()
            .with_address(admin.clone(), salt)
            .deploy_v2(wasm_hash, (admin, base_uri));

        Self::record(&env, ContractKind::NftToken, address.clone());
        address
    }

    /// Deploys an `Objects` contract owned by the admin.
    pub fn deploy_objects(env: Env, wasm_hash: BytesN<32>, salt: BytesN<32>) -> Address {
        let admin = Self::admin(env.clone());
        admin.require_auth();

        let address = env
            .deployer()
            .with_address(admin.clone(), salt)
            .deploy_v2(wasm_hash, (admin,));

        Self::record(&env, ContractKind::Objects, address.clone());
        address
    }

    pub fn deployment_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::DeploymentCount)
            .unwrap_or(0)
    }

    pub fn deployment(env: Env, id: u32) -> Result<Deployment, DeployerError> {
        env.storage()
            .instance()
            .get(&DataKey::Deployment(id))
            .ok_or(DeployerError::DeploymentNotFound)
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = Self::admin(env.clone());
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &new_admin);
        events::emit_admin_changed(&env, admin, new_admin);
    }

    pub(crate) fn record(env: &Env, kind: ContractKind, address: Address) {
        let id = Self::deployment_count(env.clone());
        let deployment = Deployment {
            kind,
            address: address.clone(),
            deployed_at: env.ledger().timestamp(),
        };

        env.storage()
            .instance()
            .set(&DataKey::Deployment(id), &deployment);
        env.storage()
            .instance()
            .set(&DataKey::DeploymentCount, &(id + 1));

        log!(env, "deployed", address);
        events::emit_deployed(env, kind, address, id);
    }
}
