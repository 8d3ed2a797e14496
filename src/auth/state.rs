use crate::store::StoreState;

/// Session state for the login flow.
///
/// Never persisted; a page reload starts from the empty state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub jwt: Option<String>,
    pub role: Option<String>,
    pub otp_sent: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for AuthState {}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.jwt.is_some()
    }
}
