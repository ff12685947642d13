//! Section lookup in linker map files.
//!
//! A section qualifies on the first line that starts with its name and carries at
//! least one more whitespace separated token, the section's address. GNU ld
//! moves the address of long section names onto the next line; such name-only
//! lines are skipped.

use crate::literal::{parse_u32, LiteralError};

/// Address given for `section` on `line`, if the line describes it.
pub fn section_address(line: &str, section: &str) -> Option<Result<u32, LiteralError>> {
    if !line.starts_with(section) {
        return None;
    }
    let mut tokens = line.split_whitespace();
    tokens.next()?;
    tokens.next().map(parse_u32)
}

/// Scans `lines` in order, the first qualifying line wins.
pub fn find_section_address<'a, I>(lines: I, section: &str) -> Option<Result<u32, LiteralError>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find_map(|line| section_address(line, section))
}
