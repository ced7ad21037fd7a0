// css/mod.rs from rustdvd (c) 2025 NinjaCheetah & Contributors
// https://github.com/NinjaCheetah/rustdvd
//
// Root for the CSS modules: the ciphers, the key material tables, and the
// key-exchange record types used while authenticating and unscrambling a disc.

pub mod crypto;
pub mod keys;
pub mod sector;
mod playerkeys;
mod tables;

use thiserror::Error;

pub use playerkeys::get_player_key;

/// Length in bytes of all CSS key material (player, bus, disc, and title keys).
pub const KEY_SIZE: usize = 5;
/// Length in bytes of the nonce exchanged during drive/host authentication.
pub const CHALLENGE_SIZE: usize = 10;
/// Size in bytes of one raw MPEG-PS sector.
pub const SECTOR_SIZE: usize = 2048;
/// Bytes at the start of each sector (pack/system header) that are never scrambled.
pub const SECTOR_HEADER_SIZE: usize = 128;

#[derive(Debug, Error)]
pub enum CSSError {
    #[error("response data is {size} bytes but must be exactly {expected}")]
    InvalidSize { size: usize, expected: usize },
    #[error("no known player key decrypts the disc key block (verifier slot {0})")]
    KeyNotFound(String),
    #[error("response data is not in a valid format")]
    IO(#[from] std::io::Error),
}
