use crate::components::icons::NovoPathLogo;
use leptos::prelude::*;

fn copyright_line(year: u32) -> String {
    format!("© {year} NovoPath Medical. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <NovoPathLogo />
                    <span class="footer-title">"NovoPath"</span>
                </div>
                <p class="footer-copyright">{copyright_line(year)}</p>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Privacy Policy"</a>
                    <a href="#" class="footer-link">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_interpolates_the_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 NovoPath Medical. All rights reserved."
        );
    }
}
