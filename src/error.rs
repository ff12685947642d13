use std::io;
use std::path::PathBuf;

use picoimg_lib::LiteralError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open input file '{}'", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read map file '{}'", path.display())]
    MapRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not find section {section} in {}", map.display())]
    MapSectionNotFound { section: String, map: PathBuf },
    #[error("Invalid address for section {section} in {}", map.display())]
    MapAddressInvalid {
        section: String,
        map: PathBuf,
        #[source]
        source: LiteralError,
    },
    #[error("Input file '{}' is {len} bytes, too large for the image header", path.display())]
    ImageTooLarge { path: PathBuf, len: usize },
    #[error("Could not open output file '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
