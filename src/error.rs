use std::fmt::Formatter;
use std::io;

#[derive(Debug)]
pub enum ReportError {
    Write(io::Error),
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Write(e)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Write(e) => write!(f, "cannot write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Write(e) => Some(e),
        }
    }
}
