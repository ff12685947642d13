//! Application image header, as laid out in front of the image in flash.
//!
//! Three little-endian words: load address, image size and the CRC-32 of the
//! image bytes.

use core::fmt;

use crc::{Crc, CRC_32_ISO_HDLC};

static ISO_HDLC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

pub const HEADER_SIZE: usize = 12;

pub const DEFAULT_LOAD_ADDRESS: u32 = 0x1000_4000;

/// CRC-32 as computed by zlib, so `checksum(&[]) == 0`.
pub fn checksum(msg: &[u8]) -> u32 {
    ISO_HDLC.checksum(msg)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub load_address: u32,
    pub size: u32,
    pub crc: u32,
}

/// The image does not fit the 32-bit size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTooLarge(pub usize);

impl fmt::Display for ImageTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image of {} bytes exceeds the 32-bit size field", self.0)
    }
}

impl core::error::Error for ImageTooLarge {}

impl Header {
    pub fn for_image(load_address: u32, image: &[u8]) -> Result<Self, ImageTooLarge> {
        let size = u32::try_from(image.len()).map_err(|_| ImageTooLarge(image.len()))?;
        Ok(Self {
            load_address,
            size,
            crc: checksum(image),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.load_address.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.size.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.crc.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let word = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self {
            load_address: word(0),
            size: word(4),
            crc: word(8),
        }
    }

    /// Reads a header from the start of `bytes`, ignoring anything after it
    /// (the bootloader pads its copy out to a full flash page).
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let head: &[u8; HEADER_SIZE] = bytes.get(..HEADER_SIZE)?.try_into().ok()?;
        Some(Self::from_bytes(head))
    }

    /// Whether `image` is the image this header describes.
    pub fn matches(&self, image: &[u8]) -> bool {
        image.len() == self.size as usize && checksum(image) == self.crc
    }
}
