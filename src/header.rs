use std::fs;
use std::path::Path;

use log::{debug, info};
use picoimg_lib::map::find_section_address;
use picoimg_lib::Header;

use crate::config::{AddressSource, HeaderConfig};
use crate::error::{Error, Result};

/// Writes the header describing `config.input` to `config.output`.
pub fn encode(config: &HeaderConfig) -> Result<Header> {
    let image = fs::read(&config.input).map_err(|source| Error::InputRead {
        path: config.input.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}.", image.len(), config.input.display());

    let load_address = resolve_address(&config.address, &config.section)?;

    let header = Header::for_image(load_address, &image).map_err(|e| Error::ImageTooLarge {
        path: config.input.clone(),
        len: e.0,
    })?;
    debug!(
        "Header: load address {:#010x}, size {}, crc {:#010x}.",
        header.load_address, header.size, header.crc
    );

    fs::write(&config.output, header.to_bytes()).map_err(|source| Error::OutputWrite {
        path: config.output.clone(),
        source,
    })?;
    Ok(header)
}

pub fn resolve_address(source: &AddressSource, section: &str) -> Result<u32> {
    match source {
        AddressSource::Fixed(address) => Ok(*address),
        AddressSource::MapFile(map) => scan_map(map, section),
    }
}

fn scan_map(map: &Path, section: &str) -> Result<u32> {
    let text = fs::read_to_string(map).map_err(|source| Error::MapRead {
        path: map.to_owned(),
        source,
    })?;

    match find_section_address(text.lines(), section) {
        Some(Ok(address)) => {
            info!("Section {} is at {:#x} in {}.", section, address, map.display());
            Ok(address)
        }
        Some(Err(source)) => Err(Error::MapAddressInvalid {
            section: section.to_owned(),
            map: map.to_owned(),
            source,
        }),
        None => Err(Error::MapSectionNotFound {
            section: section.to_owned(),
            map: map.to_owned(),
        }),
    }
}
