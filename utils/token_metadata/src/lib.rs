//! Metadata URI helpers shared by the token contracts.
//!
//! Soroban `String`s cannot be concatenated on the host, so URIs are
//! assembled in a fixed stack buffer and copied back into a host string.
#![no_std]

use soroban_sdk::{Env, String};

/// Longest base URI a contract will accept.
pub const MAX_BASE_URI_LEN: u32 = 200;

const SUFFIX: &[u8] = b".json";
const MAX_ID_DIGITS: usize = 10;
const BUF_LEN: usize = MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS + SUFFIX.len();

pub fn is_valid_base_uri(base_uri: &String) -> bool {
    base_uri.len() <= MAX_BASE_URI_LEN
}

/// Returns `<base_uri><id>.json`, or `None` when the base URI is too long.
pub fn token_uri(env: &Env, base_uri: &String, id: u32) -> Option<String> {
    if !is_valid_base_uri(base_uri) {
        return None;
    }

    let base_len = base_uri.len() as usize;
    let mut buf = [0u8; BUF_LEN];
    base_uri.copy_into_slice(&mut buf[..base_len]);

    let mut end = base_len + write_decimal(&mut buf[base_len..], id);
    buf[end..end + SUFFIX.len()].copy_from_slice(SUFFIX);
    end += SUFFIX.len();

    Some(String::from_bytes(env, &buf[..end]))
}

fn write_decimal(out: &mut [u8], mut value: u32) -> usize {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (value % 10) as u8;
        value /= 10;
        len += 1;
        if value == 0 {
            break;
        }
    }
    for (i, digit) in digits[..len].iter().rev().enumerate() {
        out[i] = *digit;
    }
    len
}
