//! Async actions for the login flow.

use crate::api::{AuthApi, Transport};
use crate::auth::{AuthIntent, AuthStore};

/// Ask the server to send a login OTP to `email`.
pub async fn send_login_otp<T: Transport>(store: &AuthStore, api: &AuthApi<T>, email: &str) {
    match api.send_login_otp(email).await {
        Ok(()) => {
            tracing::info!("login otp requested");
            store.dispatch(AuthIntent::OtpSent);
        }
        Err(err) => {
            tracing::warn!(error = %err, "otp request failed");
            store.dispatch(AuthIntent::Failed(err.to_string()));
        }
    }
}

/// Exchange an email + OTP pair for a session.
pub async fn signin<T: Transport>(store: &AuthStore, api: &AuthApi<T>, email: &str, otp: &str) {
    store.dispatch(AuthIntent::SigninPending);
    match api.signin(email, otp).await {
        Ok(response) => {
            tracing::info!("signin succeeded");
            store.dispatch(AuthIntent::SigninFulfilled {
                jwt: response.jwt,
                role: response.role,
            });
        }
        Err(err) => {
            tracing::warn!(error = %err, "signin failed");
            store.dispatch(AuthIntent::SigninRejected(err.to_string()));
        }
    }
}

/// Drop the session locally. No server call is involved.
pub fn sign_out(store: &AuthStore) {
    store.dispatch(AuthIntent::SignOut);
}
