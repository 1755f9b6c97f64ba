//! Read-only view of the platform authentication state.
//!
//! The landing page never signs anyone in or out; it only asks "is someone
//! signed in right now?" and adjusts its greeting and call-to-action targets.

use leptos::prelude::*;

/// The signed-in user, as supplied by the host application's auth layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    /// Display name used in the personalized greeting.
    pub name: String,
}

/// Returns the current user when the host application provided one via
/// context. The standalone landing bundle provides none, so the page falls
/// back to the unauthenticated presentation.
pub fn use_current_user() -> Option<CurrentUser> {
    use_context::<CurrentUser>()
}
