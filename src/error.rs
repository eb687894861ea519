use std::fmt;

#[derive(Debug)]
pub enum LatticeError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::Io(e) => write!(f, "IO error: {}", e),
            LatticeError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LatticeError {}

impl From<std::io::Error> for LatticeError {
    fn from(err: std::io::Error) -> Self {
        LatticeError::Io(err)
    }
}

impl From<String> for LatticeError {
    fn from(err: String) -> Self {
        LatticeError::Parse(err)
    }
}

impl From<&str> for LatticeError {
    fn from(err: &str) -> Self {
        LatticeError::Parse(err.to_string())
    }
}
