//! Writing sorted values and the verbose diagnostics report

use crate::error::{SortContext, SortResult};
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write `values` one per line, without a newline after the last one
pub fn write_values<W: Write + ?Sized>(out: &mut W, values: &[i32]) -> io::Result<()> {
    write!(out, "{}", values.iter().format("\n"))
}

/// Write `values` to a newly created file at `path`
pub fn write_values_to_file(path: &str, values: &[i32]) -> SortResult<()> {
    let mut output = BufWriter::new(File::create(path).with_file_context(path)?);
    write_values(&mut output, values)?;
    output.flush()?;
    Ok(())
}

/// Diagnostics printed in verbose mode.
///
/// The layout is fixed: the file name, the values in input order, the bytes reserved for
/// them, the sorted values and finally the comparison count.
pub struct VerboseReport<'a, W: Write + ?Sized> {
    out: &'a mut W,
}

impl<'a, W: Write + ?Sized> VerboseReport<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn opened(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "File opened read: {path}")
    }

    pub fn unordered(&mut self, values: &[i32]) -> io::Result<()> {
        write!(self.out, "Unordered:")?;
        for value in values {
            write!(self.out, "\n{value}")?;
        }
        Ok(())
    }

    pub fn allocated(&mut self, bytes: usize) -> io::Result<()> {
        write!(self.out, "\n\nMemory allocated: {bytes} bytes\n\n")
    }

    pub fn ordered(&mut self) -> io::Result<()> {
        writeln!(self.out, "Ordered:")
    }

    pub fn comparisons(&mut self, comparisons: u64) -> io::Result<()> {
        write!(self.out, "\n\nComparisons: {comparisons}")
    }
}
