#![no_std]

pub mod asm;
pub mod header;
pub mod literal;
pub mod map;

pub use header::{checksum, Header, ImageTooLarge, DEFAULT_LOAD_ADDRESS, HEADER_SIZE};
pub use literal::{parse_u32, LiteralError};

pub static DEFAULT_SECTION: &str = ".app_bin";
