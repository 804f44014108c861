mod app;
mod bridge;
mod components;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <app::App/> });
}
