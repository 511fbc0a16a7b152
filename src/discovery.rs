use std::collections::HashMap;

use lazy_static::lazy_static;
use ldap3::{Ldap, LdapError, Scope, SearchEntry};
use regex::Regex;

use crate::connection;

// Inspected in priority order, first attribute present wins.
const ROOT_DSE_ATTRIBUTES: [&str; 3] = [
    "namingContexts",
    "defaultNamingContext",
    "rootDomainNamingContext",
];

lazy_static! {
    static ref HOST_REGEX: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://([^/:?]+)").unwrap();
}

/// Root naming context under which user entries live.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseDn {
    pub dn: String,
    /// Guessed from the server address instead of read from the root DSE.
    /// Such a DN was never confirmed by the directory itself.
    pub via_fallback: bool,
}

/// What the root DSE probe yielded, before any fallback is considered.
#[derive(Debug)]
pub enum RootMetadata {
    Found(String),
    Absent,
    Unreachable(LdapError),
}

pub struct BaseDnLocator {
    address: String,
    use_fallback: bool,
}

impl BaseDnLocator {
    pub fn new(address: String, use_fallback: bool) -> Self {
        Self {
            address,
            use_fallback,
        }
    }

    pub async fn locate(&self) -> Option<BaseDn> {
        match self.probe().await {
            RootMetadata::Found(dn) => Some(BaseDn {
                dn,
                via_fallback: false,
            }),
            RootMetadata::Absent => {
                log::warn!("Directory root DSE exposes no naming context");
                self.fallback()
            }
            RootMetadata::Unreachable(err) => {
                log::error!("Cannot read the directory root DSE: {}", err);
                self.fallback()
            }
        }
    }

    /// Asks the directory for its root naming context, anonymously.
    pub async fn probe(&self) -> RootMetadata {
        match self.fetch().await {
            Ok(Some(dn)) => RootMetadata::Found(dn),
            Ok(None) => RootMetadata::Absent,
            Err(err) => RootMetadata::Unreachable(err),
        }
    }

    async fn fetch(&self) -> Result<Option<String>, LdapError> {
        let mut ldap = connection::open(&self.address).await?;
        let queried = query_naming_context(&mut ldap).await;
        let _ = ldap.unbind().await;

        queried
    }

    fn fallback(&self) -> Option<BaseDn> {
        if !self.use_fallback {
            return None;
        }
        let dn = derive_from_address(&self.address)?;
        log::warn!(
            "Falling back to unverified base DN {} derived from the server address",
            dn
        );

        Some(BaseDn {
            dn,
            via_fallback: true,
        })
    }
}

async fn query_naming_context(ldap: &mut Ldap) -> Result<Option<String>, LdapError> {
    ldap.simple_bind("", "").await?.success()?;
    let (entries, _res) = ldap
        .search("", Scope::Base, "(objectClass=*)", ROOT_DSE_ATTRIBUTES)
        .await?
        .success()?;

    Ok(entries
        .into_iter()
        .next()
        .and_then(|entry| select_naming_context(&SearchEntry::construct(entry).attrs)))
}

fn select_naming_context(attrs: &HashMap<String, Vec<String>>) -> Option<String> {
    ROOT_DSE_ATTRIBUTES
        .iter()
        .find_map(|attribute| attrs.get(*attribute)?.first().cloned())
}

fn derive_from_address(address: &str) -> Option<String> {
    let captures = HOST_REGEX.captures(address)?;
    let mut labels = captures
        .get(1)?
        .as_str()
        .split('.')
        .filter(|label| !label.is_empty());
    let org = labels.next()?;
    let domain = labels.next()?;

    Some(format!("dc={},dc={}", domain, org))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{derive_from_address, select_naming_context};

    fn attrs(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn naming_context_priority() {
        // All three attributes present, the first value of namingContexts wins.
        assert_eq!(
            select_naming_context(&attrs(&[
                ("namingContexts", &["dc=first,dc=org", "dc=second,dc=org"]),
                ("defaultNamingContext", &["dc=default,dc=org"]),
                ("rootDomainNamingContext", &["dc=root,dc=org"]),
            ])),
            Some("dc=first,dc=org".to_owned())
        );

        assert_eq!(
            select_naming_context(&attrs(&[
                ("defaultNamingContext", &["dc=default,dc=org"]),
                ("rootDomainNamingContext", &["dc=root,dc=org"]),
            ])),
            Some("dc=default,dc=org".to_owned())
        );

        assert_eq!(
            select_naming_context(&attrs(&[(
                "rootDomainNamingContext",
                &["dc=root,dc=org"]
            )])),
            Some("dc=root,dc=org".to_owned())
        );
    }

    #[test]
    fn naming_context_absent() {
        assert_eq!(select_naming_context(&attrs(&[])), None);
        assert_eq!(
            select_naming_context(&attrs(&[("vendorName", &["Acme Directory"])])),
            None
        );
        // An attribute present without any value doesn't mask the next one.
        assert_eq!(
            select_naming_context(&attrs(&[
                ("namingContexts", &[]),
                ("defaultNamingContext", &["dc=default,dc=org"]),
            ])),
            Some("dc=default,dc=org".to_owned())
        );
    }

    #[test]
    fn address_fallback() {
        assert_eq!(
            derive_from_address("ldap://corp.example.com"),
            Some("dc=example,dc=corp".to_owned())
        );
        assert_eq!(
            derive_from_address("ldaps://corp.example.com:636"),
            Some("dc=example,dc=corp".to_owned())
        );
        assert_eq!(
            derive_from_address("ldap://corp.example"),
            Some("dc=example,dc=corp".to_owned())
        );
    }

    #[test]
    fn address_fallback_rejected() {
        assert_eq!(derive_from_address("ldap://localhost"), None);
        assert_eq!(derive_from_address("ldap://localhost:389"), None);
        assert_eq!(derive_from_address("corp.example.com"), None);
        assert_eq!(derive_from_address("ldap://"), None);
        assert_eq!(derive_from_address(""), None);
    }
}
