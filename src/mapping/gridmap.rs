//! Grid-mapfile output
//!
//! Each mapping is written as one line: the quoted distinguished name, a
//! space, then the bare account name.

use crate::mapping::Mapping;
use std::fmt;
use std::io::{self, Write};

/// Display adapter rendering a mapping as a grid-mapfile line (no newline)
pub struct GridMapEntry<'a>(pub &'a Mapping);

impl fmt::Display for GridMapEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.0.dn, self.0.user)
    }
}

/// Write mappings in grid-mapfile format, returning the number of lines
pub fn write_gridmap<'a, W, I>(out: &mut W, mappings: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Mapping>,
{
    let mut count = 0;
    for mapping in mappings {
        writeln!(out, "{}", GridMapEntry(mapping))?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
