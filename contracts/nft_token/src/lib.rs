#![no_std]
pub mod error;
pub mod events;
pub mod storage;
pub mod token;
pub mod types;

pub use crate::token::NftToken;
