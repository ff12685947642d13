//! GNU assembler rendering of binary blobs for the RP2040 boot stage.

use core::fmt;

pub const BYTES_PER_LINE: usize = 16;

pub static CPU: &str = "cortex-m0plus";

pub static SECTION: &str = ".boot3";

/// Comment naming the source blob followed by the target and section directives.
pub struct Preamble<'a> {
    pub source: &'a str,
}

impl fmt::Display for Preamble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// ASM-ified version of: {}", self.source)?;
        writeln!(f)?;
        writeln!(f, ".cpu {}", CPU)?;
        writeln!(f, ".thumb")?;
        writeln!(f)?;
        writeln!(f, ".section {}, \"ax\"", SECTION)?;
        writeln!(f)
    }
}

/// One `.byte` directive, newline included.
pub struct ByteLine<'a>(pub &'a [u8]);

impl fmt::Display for ByteLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".byte ")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{:02x}", byte)?;
        }
        writeln!(f)
    }
}

pub fn byte_lines(data: &[u8]) -> impl Iterator<Item = ByteLine<'_>> {
    data.chunks(BYTES_PER_LINE).map(ByteLine)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String, ToString};

    use super::*;

    fn render(data: &[u8]) -> String {
        byte_lines(data).map(|line| line.to_string()).collect()
    }

    #[test]
    fn preamble() {
        assert_eq!(
            Preamble { source: "build/boot3.bin" }.to_string(),
            "// ASM-ified version of: build/boot3.bin\n\n.cpu cortex-m0plus\n.thumb\n\n.section .boot3, \"ax\"\n\n"
        );
    }

    #[test]
    fn seventeen_bytes_make_two_lines() {
        let data: [u8; 17] = core::array::from_fn(|i| i as u8);
        assert_eq!(
            render(&data),
            ".byte 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f\n\
             .byte 0x10\n"
        );
    }

    #[test]
    fn line_counts() {
        assert_eq!(byte_lines(&[]).count(), 0);
        assert_eq!(byte_lines(&[0xaa]).count(), 1);
        assert_eq!(byte_lines(&[0u8; 16]).count(), 1);
        assert_eq!(byte_lines(&[0u8; 33]).count(), 3);
    }

    #[test]
    fn tokens_are_lowercase_two_digit_hex() {
        let data = [0xAB, 0x0F, 0xFF, 0x00, 0x7e];
        let line = ByteLine(&data).to_string();
        assert_eq!(line, ".byte 0xab, 0x0f, 0xff, 0x00, 0x7e\n");
        for token in line.trim_end().trim_start_matches(".byte ").split(", ") {
            assert_eq!(token.len(), 4);
            assert!(token.starts_with("0x"));
            assert!(token[2..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }
}
