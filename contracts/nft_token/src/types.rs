use soroban_sdk::{String, contracttype};

/// Hard ceiling on the number of tokens the collection can ever hold.
pub const MAX_SUPPLY: u32 = 20;

pub const DEFAULT_NAME: &str = "NFTToken";
pub const DEFAULT_SYMBOL: &str = "NFT";

#[derive(Clone, Debug)]
#[contracttype]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u32,
}
