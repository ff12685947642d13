use std::path::PathBuf;

use clap::Parser;
use picoimg::AsmConfig;

/// Convert a binary blob into `.byte` directives for the assembler.
#[derive(Parser)]
#[command(name = "mkasm", version)]
struct Cli {
    /// Input file (binary)
    ifile: PathBuf,
    /// Output file (assembly)
    ofile: PathBuf,
}

fn main() -> anyhow::Result<()> {
    picoimg::init_logger();

    let cli = Cli::parse();
    picoimg::asm::emit(&AsmConfig {
        input: cli.ifile,
        output: cli.ofile,
    })?;
    Ok(())
}
