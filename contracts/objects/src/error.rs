use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NonexistentToken = 1,
    ContractPaused = 2,
    ExceedsSupply = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    LengthMismatch = 6,
    ItemAlreadyExists = 7,
    InvalidUri = 8,
}
