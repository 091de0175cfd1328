//! Login and logout commands.

use mangust_client::{ApiClient, ClientConfig, api::Credentials};

use super::{CliError, session_path, store_session};

/// Log in and persist the session snapshot.
///
/// # Errors
///
/// Returns an error if the request fails or the session cannot be stored.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;

    let session = client
        .login(&Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    store_session(&session)?;
    println!(
        "logged in as {} <{}> ({})",
        session.user.name, session.user.email, session.user.role
    );
    Ok(())
}

/// Delete the stored session snapshot.
///
/// # Errors
///
/// Returns an error if the store cannot be removed.
pub fn logout() -> Result<(), CliError> {
    let path = session_path();
    match std::fs::remove_file(&path) {
        Ok(()) => {
            println!("logged out");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("no stored session");
            Ok(())
        }
        Err(e) => Err(CliError::SessionStore(e)),
    }
}
