#![no_std]
pub mod error;
pub mod events;
pub mod objects;
pub mod storage;
pub mod types;

pub use crate::objects::Objects;
