//! Build-time helpers for an RP2040 boot chain: `gen-imghdr` writes the
//! application image header checked by the bootloader, `mkasm` turns a binary
//! blob into assembly so it can be linked into the bootloader itself.

use std::env::VarError;

pub mod asm;
pub mod config;
pub mod error;
pub mod header;

pub use config::{AddressSource, AsmConfig, HeaderConfig};
pub use error::Error;

/// Installs `env_logger`, quiet unless `RUST_LOG` asks for more.
pub fn init_logger() {
    if let Err(VarError::NotPresent) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "warn");
    }
    // A second call keeps the logger that is already installed.
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();
}
