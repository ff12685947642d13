use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use log::{debug, trace};
use picoimg_lib::asm::{byte_lines, Preamble};

use crate::config::AsmConfig;
use crate::error::{Error, Result};

/// Writes `config.input` out as `.byte` directives in `config.output`.
pub fn emit(config: &AsmConfig) -> Result<()> {
    let data = fs::read(&config.input).map_err(|source| Error::InputRead {
        path: config.input.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}.", data.len(), config.input.display());

    let output_error = |source| Error::OutputWrite {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(output_error)?;
    let source = config.input.to_string_lossy();
    write_document(BufWriter::new(file), &source, &data).map_err(output_error)
}

fn write_document<W: Write>(mut out: W, source: &str, data: &[u8]) -> io::Result<()> {
    write!(out, "{}", Preamble { source })?;
    for (i, line) in byte_lines(data).enumerate() {
        write!(out, "{}", line)?;
        trace!("line {}: {} bytes", i, line.0.len());
    }
    out.flush()
}
