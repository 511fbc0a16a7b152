use std::time::Duration;

use ldap3::{Ldap, LdapConnAsync, LdapConnSettings, LdapError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Every exchange with the directory happens over a TLS-upgraded connection.
pub(crate) async fn open(address: &str) -> Result<Ldap, LdapError> {
    let settings = LdapConnSettings::new()
        .set_conn_timeout(CONNECT_TIMEOUT)
        .set_starttls(true);
    let (conn, ldap) = LdapConnAsync::with_settings(settings, address).await?;
    ldap3::drive!(conn);

    Ok(ldap)
}
