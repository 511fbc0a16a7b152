use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Authenticated,
    InvalidCredentials,
    ResolutionFailed,
    ConnectionError,
}

impl Outcome {
    pub fn passed(self) -> bool {
        matches!(self, Outcome::Authenticated)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Authenticated => "authenticated",
            Outcome::InvalidCredentials => "invalid credentials",
            Outcome::ResolutionFailed => "base DN resolution failed",
            Outcome::ConnectionError => "connection error",
        };
        f.write_str(label)
    }
}

/// Result of a single verification attempt.
#[derive(Debug)]
pub struct Verification {
    pub outcome: Outcome,
    pub diagnostic: Option<String>,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}
