//! Decorative SVG glyphs.
//!
//! A single [`Icon`] component renders inline SVG from a path constant;
//! the brand mark gets its own component because it carries a gradient.
//! All glyphs are opaque leaves: parameterless apart from sizing, no state.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value).
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels.
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// NovoPath brand mark: gradient tile with a pulse trace.
#[component]
pub fn NovoPathLogo() -> impl IntoView {
    view! {
        <svg
            class="brand-logo"
            width="36"
            height="36"
            viewBox="0 0 36 36"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <defs>
                <linearGradient id="brand-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#3b82f6" />
                    <stop offset="100%" stop-color="#14b8a6" />
                </linearGradient>
            </defs>
            <rect x="2" y="2" width="32" height="32" rx="9" fill="url(#brand-gradient)" />
            <path
                d="M8 18h6l3-7 4 14 3-7h4"
                fill="none"
                stroke="#fff"
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

// Path data uses a 256x256 viewBox, filled with currentColor.

/// Five-pointed star (testimonial ratings, stats band).
pub const ICON_STAR: &str = "M128 24l29.4 62.6 65.6 8.4-48.4 45.6 12.6 64.4L128 173.6 68.8 205l12.6-64.4L33 95l65.6-8.4L128 24Z";

/// Calendar (scheduling feature).
pub const ICON_CALENDAR: &str = "M208 32h-24v-8a8 8 0 0 0-16 0v8H88v-8a8 8 0 0 0-16 0v8H48a16 16 0 0 0-16 16v160a16 16 0 0 0 16 16h160a16 16 0 0 0 16-16V48a16 16 0 0 0-16-16Zm0 176H48V96h160v112Zm0-128H48V48h24v8a8 8 0 0 0 16 0v-8h80v8a8 8 0 0 0 16 0v-8h24v32Z";

/// Document with text lines (health records feature).
pub const ICON_DOCUMENT: &str = "M213.7 82.3l-56-56A8 8 0 0 0 152 24H56a16 16 0 0 0-16 16v176a16 16 0 0 0 16 16h144a16 16 0 0 0 16-16V88a8 8 0 0 0-2.3-5.7ZM160 51.3 188.7 80H160ZM200 216H56V40h88v48a8 8 0 0 0 8 8h48v120Zm-40-80a8 8 0 0 1-8 8h-48a8 8 0 0 1 0-16h48a8 8 0 0 1 8 8Zm0 32a8 8 0 0 1-8 8h-48a8 8 0 0 1 0-16h48a8 8 0 0 1 8 8Z";

/// Sparkles (AI assistance feature).
pub const ICON_SPARKLES: &str = "M196 136l-45.3-16.7L134 74a8 8 0 0 0-15 0l-16.7 45.3L57 136a8 8 0 0 0 0 15l45.3 16.7L119 213a8 8 0 0 0 15 0l16.7-45.3L196 151a8 8 0 0 0 0-15ZM84 48 64 40 56 20a6 6 0 0 0-11.2 0L36.8 40l-20 8a6 6 0 0 0 0 11.2l20 8 8 20a6 6 0 0 0 11.2 0l8-20 20-8A6 6 0 0 0 84 48Zm136 40-16-6.4-6.4-16a6 6 0 0 0-11.2 0l-6.4 16-16 6.4a6 6 0 0 0 0 11.2l16 6.4 6.4 16a6 6 0 0 0 11.2 0l6.4-16 16-6.4a6 6 0 0 0 0-11.2Z";

/// Right-pointing arrow (call-to-action buttons).
pub const ICON_ARROW_RIGHT: &str = "M221.7 133.7l-72 72a8 8 0 0 1-11.3-11.3L196.7 136H40a8 8 0 0 1 0-16h156.7l-58.4-58.3a8 8 0 0 1 11.3-11.3l72 72a8 8 0 0 1 0 11.3Z";

/// Briefcase (provider stat).
pub const ICON_BRIEFCASE: &str = "M216 64h-40v-8a24 24 0 0 0-24-24h-48a24 24 0 0 0-24 24v8H40a16 16 0 0 0-16 16v120a16 16 0 0 0 16 16h176a16 16 0 0 0 16-16V80a16 16 0 0 0-16-16ZM96 56a8 8 0 0 1 8-8h48a8 8 0 0 1 8 8v8H96Zm120 144H40V80h176Z";

/// Two people (consultations feature, patient stat).
pub const ICON_USER_GROUP: &str = "M117.2 156.8a64 64 0 1 0-58.4 0A96.2 96.2 0 0 0 8 208a8 8 0 0 0 16 0 80 80 0 0 1 128 0 8 8 0 0 0 16 0 96.2 96.2 0 0 0-50.8-51.2ZM40 96a48 48 0 1 1 48 48 48 48 0 0 1-48-48Zm208 112a8 8 0 0 1-16 0 80.1 80.1 0 0 0-45.8-72.3 8 8 0 0 1 6.6-14.6A96.1 96.1 0 0 1 248 208Zm-60-66.6a8 8 0 0 1-9.8-5.6 8 8 0 0 1 5.6-9.8 48 48 0 0 0 0-92.9 8 8 0 1 1 4.2-15.4 64 64 0 0 1 0 123.7Z";

/// Check mark in a circle (audience checklists).
pub const ICON_CHECK_CIRCLE: &str = "M128 24A104 104 0 1 0 232 128 104.1 104.1 0 0 0 128 24Zm0 192a88 88 0 1 1 88-88 88.1 88.1 0 0 1-88 88Zm45.7-117.7a8 8 0 0 1 0 11.3l-56 56a8 8 0 0 1-11.3 0l-24-24a8 8 0 0 1 11.3-11.3L112 148.7l50.3-50.4a8 8 0 0 1 11.4 0Z";

/// Graduation cap (specialties stat).
pub const ICON_ACADEMIC_CAP: &str = "M251.8 88.9l-120-64a8 8 0 0 0-7.6 0l-120 64a8 8 0 0 0 0 14.2L32 120.4V176a8 8 0 0 0 16 0v-47l16 8.5V184a8 8 0 0 0 3.1 6.3C69.3 192.1 94.4 208 128 208s58.7-15.9 60.9-17.7A8 8 0 0 0 192 184v-46.5l59.8-31.9a8 8 0 0 0 0-16.7ZM128 41.1 231 96l-103 54.9L25 96ZM176 179.5c-8.4 5.1-26.1 12.5-48 12.5s-39.6-7.4-48-12.5v-33.1l44.2 23.6a8 8 0 0 0 7.6 0L176 146.4Z";
