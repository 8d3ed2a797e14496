//! Client core for the Nosso Closet multi-vendor storefront.
//!
//! This crate is everything a view layer needs short of rendering: typed
//! bindings for the platform's REST API, per-resource stores driven by
//! pure reducers, async actions with a pending/fulfilled/rejected
//! lifecycle, and the OTP resend countdown used by the login screen.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Api (Transport) ──→ Intent ──→ Reducer ──→ State ──→ View
//!    ↑                                                     │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! Network effects live in the action functions; reducers are pure and
//! the store serializes their application. Responses to superseded
//! fetches are discarded via a monotonic ticket check, so a slow page
//! load can never overwrite a newer one.

pub mod api;
pub mod auth;
pub mod config;
pub mod model;
pub mod orders;
pub mod store;
pub mod suppliers;
