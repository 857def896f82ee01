// Pixel2Test landing page (Leptos 0.8, CSR)

mod components;
mod config;
mod content;
mod sections;
mod theme;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Resolve and apply the stored theme before anything renders.
    let initial_theme = theme::load();
    theme::apply(initial_theme);
    log::debug!("mounting with {} theme", initial_theme.as_str());

    leptos::mount::mount_to_body(move || view! { <App initial_theme=initial_theme/> });
}

#[component]
fn App(initial_theme: theme::ThemePreference) -> impl IntoView {
    view! {
        <Nav initial_theme=initial_theme/>
        <main>
            <Hero/>
            <Features/>
            <HowItWorks/>
        </main>
        <Footer/>
    }
}
