#![no_std]
pub mod deployer;
pub mod error;
pub mod events;
pub mod storage;
pub mod types;

pub use crate::deployer::Deployer;

#[cfg(all(test, feature = "testwasms"))]
mod test_wasm;
