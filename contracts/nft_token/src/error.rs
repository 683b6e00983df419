use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NonexistentToken = 1,
    ContractPaused = 2,
    MaxSupplyExceeded = 3,
    NotOwner = 4,
    InvalidUri = 5,
}
