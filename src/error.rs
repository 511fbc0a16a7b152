use ldap3::LdapError;
use thiserror::Error;

use crate::outcome::Outcome;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to determine the directory base DN")]
    BaseDnResolution,
    #[error("directory rejected the bind: {0}")]
    BindRejected(String),
    #[error("LDAP exchange failed: {0}")]
    Ldap(#[from] LdapError),
}

impl Error {
    pub fn outcome(&self) -> Outcome {
        use Error::*;
        match self {
            BaseDnResolution => Outcome::ResolutionFailed,
            BindRejected(_) => Outcome::InvalidCredentials,
            Ldap(_) => Outcome::ConnectionError,
        }
    }
}
