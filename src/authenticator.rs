use ldap3::dn_escape;

use crate::connection;
use crate::discovery::{BaseDn, BaseDnLocator};
use crate::error::Error;
use crate::outcome::{Outcome, Verification};

pub struct LdapAuthenticator {
    address: String,
    base_dn: Option<BaseDn>,
    users_ou: String,
}

impl LdapAuthenticator {
    /// Resolves the base DN eagerly. The result, fallback included, is
    /// reused by every subsequent `verify` call on this instance.
    pub async fn new(address: String, users_ou: String, use_fallback: bool) -> Self {
        let base_dn = BaseDnLocator::new(address.clone(), use_fallback)
            .locate()
            .await;

        Self {
            address,
            base_dn,
            users_ou,
        }
    }

    pub fn base_dn(&self) -> Option<&BaseDn> {
        self.base_dn.as_ref()
    }

    pub async fn verify(
        &self,
        email: &str,
        password: &str,
        organization: Option<&str>,
    ) -> Verification {
        match self.bind(email, password, organization).await {
            Ok(()) => Verification {
                outcome: Outcome::Authenticated,
                diagnostic: None,
            },
            Err(err) => Verification {
                outcome: err.outcome(),
                diagnostic: Some(err.to_string()),
            },
        }
    }

    async fn bind(
        &self,
        email: &str,
        password: &str,
        organization: Option<&str>,
    ) -> Result<(), Error> {
        let base_dn = self.base_dn.as_ref().ok_or(Error::BaseDnResolution)?;
        let user_dn = construct_user_dn(email, &base_dn.dn, organization, &self.users_ou);

        let mut ldap = connection::open(&self.address).await?;
        let bound = ldap.simple_bind(&user_dn, password).await;
        let _ = ldap.unbind().await;

        let result = bound?;
        classify_bind(result.rc, result.text)
    }
}

fn construct_user_dn(
    email: &str,
    base_dn: &str,
    organization: Option<&str>,
    users_ou: &str,
) -> String {
    let local = match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    };

    match organization {
        Some(organization) if !organization.is_empty() => format!(
            "uid={},ou={},o={},{}",
            dn_escape(local),
            users_ou,
            dn_escape(organization),
            base_dn
        ),
        _ => format!("uid={},ou={},{}", dn_escape(local), users_ou, base_dn),
    }
}

// A non-zero result code is a rejection, explicit or not. Transport errors
// never reach this point.
fn classify_bind(rc: u32, text: String) -> Result<(), Error> {
    if rc == 0 {
        Ok(())
    } else if text.is_empty() {
        Err(Error::BindRejected(format!("result code {}", rc)))
    } else {
        Err(Error::BindRejected(text))
    }
}
