//! Authentication store and the OTP resend countdown.

mod actions;
mod intent;
mod otp;
mod reducer;
mod state;

pub use actions::{send_login_otp, sign_out, signin};
pub use intent::AuthIntent;
pub use otp::{OtpCountdown, RESEND_COOLDOWN_SECS};
pub use reducer::AuthReducer;
pub use state::AuthState;

/// Store alias used by views and actions.
pub type AuthStore = crate::store::Store<AuthReducer>;
