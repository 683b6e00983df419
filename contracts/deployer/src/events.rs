use crate::types::ContractKind;
use soroban_sdk::{Address, Env, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct Deployed {
    #[topic]
    pub kind: ContractKind,
    pub address: Address,
    pub id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AdminChanged {
    pub previous: Address,
    pub admin: Address,
}

pub fn emit_deployed(env: &Env, kind: ContractKind, address: Address, id: u32) {
    Deployed { kind, address, id }.publish(env);
}

pub fn emit_admin_changed(env: &Env, previous: Address, admin: Address) {
    AdminChanged { previous, admin }.publish(env);
}
