use std::io::Write;

use crate::{ctype::CType, error::ReportError};

/// Writes a single `'<name>':<size>,` entry.
pub fn write_line<W: Write>(w: &mut W, t: CType) -> Result<(), ReportError> {
    writeln!(w, "'{}':{},", t, t.size())?;
    Ok(())
}

pub fn write_report<W: Write>(w: &mut W) -> Result<(), ReportError> {
    for t in CType::ALL {
        write_line(w, t)?;
    }
    w.flush()?;
    Ok(())
}
