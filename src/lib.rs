//! LDAP login checking with automatic base DN discovery.

pub use authenticator::LdapAuthenticator;
pub use discovery::{BaseDn, BaseDnLocator, RootMetadata};
pub use error::Error;
pub use outcome::{Outcome, Verification};

mod authenticator;
mod connection;
mod discovery;
mod error;
mod outcome;
