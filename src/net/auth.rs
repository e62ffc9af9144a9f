//! Login flow on top of [`ApiClient`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, RequestOptions, Transport};
use super::error::ApiError;
use super::types::{LoginRequest, TokenResponse, User};
use crate::state::storage::Storage;

/// Exchange credentials for a token, fetch the profile, and persist both.
///
/// The `/login` call is anonymous, so a 401 there is reported to the caller
/// instead of firing the session-expiry redirect.
///
/// # Errors
///
/// Returns the API error from either request (rejected credentials carry
/// the backend's `detail`), [`ApiError::Shape`] when a request resolves
/// without a body, or
/// [`ApiError::Session`] when the session cannot be stored.
pub async fn sign_in<S: Storage, T: Transport>(
    api: &ApiClient<S, T>,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let request = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    let token: TokenResponse = api
        .call_json("/login", RequestOptions::post_json(&request)?.anonymous())
        .await?
        .ok_or_else(|| ApiError::Shape("login returned no token".to_owned()))?;

    // `/me` needs the bearer header, so the token goes in first.
    api.session().set_token(&token.access_token)?;

    let user = match api.call_json::<User>("/me", RequestOptions::get()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            clear_partial(api);
            return Err(ApiError::Shape("profile request returned no body".to_owned()));
        }
        Err(e) => {
            clear_partial(api);
            return Err(e);
        }
    };

    api.session().establish(&token.access_token, &user)?;
    leptos::logging::log!("signed in as {}", user.username);
    Ok(user)
}

fn clear_partial<S: Storage, T: Transport>(api: &ApiClient<S, T>) {
    if let Err(e) = api.session().clear() {
        leptos::logging::error!("failed to clear partial session: {e}");
    }
}
