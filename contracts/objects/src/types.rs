use soroban_sdk::contracttype;

pub const BASE_URI: &str =
    "https://ipfs.moralis.io:2053/ipfs/QmbCUjN57GbsPsQhcqjNwSf2DDbRthqy5DYKbqPSwwTBX6/metadata/";

/// Item types minted to the admin at construction: `(id, seed supply, ceiling)`.
pub const DEFAULT_ITEMS: [(u32, u32, u32); 4] =
    [(0, 99, 100), (1, 100, 100), (2, 1, 10), (3, 1, 10)];

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ItemInfo {
    pub supply: u32,
    pub max_supply: u32,
}

/// Seed supply, minted to the admin, of an item id first seen by `create`.
pub const NEW_ITEM_SEED: u32 = 1;
/// Ceiling of an item id first seen by `create`.
pub const NEW_ITEM_MAX_SUPPLY: u32 = 10;
