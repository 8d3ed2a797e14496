use crate::store::Intent;

/// Events that can change [`AuthState`](crate::auth::AuthState).
#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    /// The server accepted an OTP request for the given address.
    OtpSent,

    SigninPending,
    SigninFulfilled { jwt: String, role: Option<String> },
    SigninRejected(String),

    Failed(String),
    SignOut,
    ClearError,
}

impl Intent for AuthIntent {}
