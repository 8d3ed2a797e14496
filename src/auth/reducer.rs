use crate::auth::intent::AuthIntent;
use crate::auth::state::AuthState;
use crate::store::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(mut state: AuthState, intent: AuthIntent) -> AuthState {
        match intent {
            AuthIntent::OtpSent => {
                state.otp_sent = true;
                state.error = None;
                state
            }
            AuthIntent::SigninPending => {
                state.loading = true;
                state.error = None;
                state
            }
            AuthIntent::SigninFulfilled { jwt, role } => {
                state.loading = false;
                state.jwt = Some(jwt);
                state.role = role;
                state
            }
            AuthIntent::SigninRejected(message) => {
                state.loading = false;
                state.error = Some(message);
                state
            }
            AuthIntent::Failed(message) => {
                state.error = Some(message);
                state
            }
            AuthIntent::SignOut => AuthState::default(),
            AuthIntent::ClearError => {
                state.error = None;
                state
            }
        }
    }
}
