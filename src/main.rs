use clap::Parser;

use bindcheck::LdapAuthenticator;
use options::Options;

mod options;

#[tokio::main]
async fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.log_level())
        .init();

    let authenticator = LdapAuthenticator::new(
        options.ldap_server,
        options.users_ou,
        !options.no_fallback,
    )
    .await;
    match authenticator.base_dn() {
        Some(base_dn) if base_dn.via_fallback => {
            log::warn!("Using unverified base DN {} guessed from the server address", base_dn.dn)
        }
        Some(base_dn) => log::info!("Using base DN {}", base_dn.dn),
        None => log::error!("Cannot determine the directory base DN"),
    }

    let verification = authenticator
        .verify(&options.email, &options.password, options.organization.as_deref())
        .await;
    if let Some(diagnostic) = &verification.diagnostic {
        log::info!("{}", diagnostic);
    }

    if verification.passed() {
        println!("Login successful.");
    } else {
        println!("Login failed ({}).", verification.outcome);
        std::process::exit(1);
    }
}
