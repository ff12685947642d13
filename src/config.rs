use std::path::PathBuf;

use picoimg_lib::{DEFAULT_LOAD_ADDRESS, DEFAULT_SECTION};

/// Where the load address written into the header comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSource {
    Fixed(u32),
    /// Linker map file scanned for the section's address.
    MapFile(PathBuf),
}

impl Default for AddressSource {
    fn default() -> Self {
        AddressSource::Fixed(DEFAULT_LOAD_ADDRESS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub address: AddressSource,
    pub section: String,
}

impl HeaderConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            address: AddressSource::default(),
            section: DEFAULT_SECTION.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}
