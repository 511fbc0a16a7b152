use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// Increase logs verbosity (Error (default), Warn, Info, Debug, Trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub log_level: u8,
    /// URI of the LDAP server to authenticate against.
    #[arg(short = 'l', long)]
    pub ldap_server: String,
    /// Email of the account to verify.
    #[arg(short = 'e', long)]
    pub email: String,
    /// Password of the account to verify.
    #[arg(short = 'p', long)]
    pub password: String,
    /// Organization the account belongs to (adds an o= component to the bind DN).
    #[arg(short = 'o', long)]
    pub organization: Option<String>,
    /// Name of the organizational unit holding user entries.
    #[arg(long, default_value = "Users")]
    pub users_ou: String,
    /// Never guess a base DN from the server address when the root DSE is unusable.
    #[arg(short = 'F', long)]
    pub no_fallback: bool,
}

impl Options {
    pub fn log_level(&self) -> LevelFilter {
        use LevelFilter::*;
        match self.log_level {
            0 => Error,
            1 => Warn,
            2 => Info,
            3 => Debug,
            _ => Trace,
        }
    }
}
