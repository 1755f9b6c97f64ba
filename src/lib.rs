//! # novopath-landing
//!
//! Marketing landing page for the NovoPath healthcare platform, built as a
//! Leptos 0.8 client-side rendered WASM app.
//!
//! The page is almost entirely static presentation. The only dynamic
//! behavior is:
//!
//! - a one-shot "reveal on scroll" latch per section ([`reveal`]),
//! - a scroll-position threshold for the sticky header ([`scroll`]),
//! - a greeting/CTA branch on the optional current user ([`auth`]).
//!
//! Routing, authentication, and everything behind the declared link targets
//! ([`routes`]) belong to the host application; this crate only renders.

pub mod auth;
pub mod components;
pub mod data;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod scroll;
pub mod sections;

use leptos::prelude::*;
use pages::WelcomePage;

/// Application root. The welcome page is the only view this crate owns.
#[component]
pub fn App() -> impl IntoView {
    view! { <WelcomePage /> }
}
