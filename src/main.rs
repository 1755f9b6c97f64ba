use leptos::prelude::*;
use novopath_landing::App;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&JsValue::from_str(concat!(
        "novopath-landing v",
        env!("CARGO_PKG_VERSION")
    )));
    leptos::mount::mount_to_body(|| view! { <App /> });
}
