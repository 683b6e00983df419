use soroban_sdk::{Address, contracttype};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ContractKind {
    NftToken,
    Objects,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Deployment {
    pub kind: ContractKind,
    pub address: Address,
    pub deployed_at: u64,
}
