use std::path::PathBuf;

use clap::Parser;
use picoimg::{AddressSource, HeaderConfig};
use picoimg_lib::{parse_u32, DEFAULT_SECTION};

/// Generate the header the bootloader checks an application image against.
#[derive(Parser)]
#[command(name = "gen-imghdr", version)]
struct Cli {
    /// Input application binary (binary)
    ifile: PathBuf,
    /// Output header file (binary)
    ofile: PathBuf,
    /// Load address of the application image
    #[arg(short, long, value_parser = parse_u32, default_value = "0x10004000")]
    addr: u32,
    /// Map file to scan for application image section
    #[arg(short, long)]
    map: Option<PathBuf>,
    /// Section name to look for in map file
    #[arg(short, long, default_value = DEFAULT_SECTION)]
    section: String,
}

impl From<Cli> for HeaderConfig {
    fn from(cli: Cli) -> Self {
        let address = match cli.map {
            Some(map) => AddressSource::MapFile(map),
            None => AddressSource::Fixed(cli.addr),
        };
        HeaderConfig {
            input: cli.ifile,
            output: cli.ofile,
            address,
            section: cli.section,
        }
    }
}

fn main() -> anyhow::Result<()> {
    picoimg::init_logger();

    let config = HeaderConfig::from(Cli::parse());
    let header = picoimg::header::encode(&config)?;

    if let AddressSource::MapFile(map) = &config.address {
        println!(
            "found address {:#x} for {} in {}",
            header.load_address,
            config.section,
            map.display()
        );
    }
    Ok(())
}
