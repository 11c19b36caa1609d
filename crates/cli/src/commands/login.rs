//! Simulated sign-in.

use pixalara_storefront::AppError;
use pixalara_storefront::auth;

/// Sign in as `email`, wait out the redirect delay and report the target.
///
/// # Errors
///
/// Returns an error if the email is invalid.
#[allow(clippy::print_stdout)]
pub async fn login(email: &str) -> Result<(), AppError> {
    let redirect = auth::login(email)?;
    println!("{}", redirect.message);

    tokio::time::sleep(redirect.delay).await;
    println!("Redirecting to {}", redirect.target);
    Ok(())
}
