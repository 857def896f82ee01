use leptos::prelude::*;

use crate::components::Button;
use crate::config;

/// Hero: headline, tagline, and the call to action.
#[component]
pub fn Hero() -> impl IntoView {
    // Whole-page navigation; browser-level failures are not ours to handle.
    let launch_app = move |_: ()| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(config::app_url());
        }
    };

    view! {
        <section id="home" class="hero">
            <div class="container">
                <h2 class="hero-title">"AI-Powered Test Case Generation"</h2>
                <p class="hero-description">
                    "Upload a form image and let our AI generate test cases automatically. "
                    "Reduce manual efforts and enhance efficiency!"
                </p>
                <div class="hero-actions">
                    <Button class="btn-primary" on_click=launch_app>
                        "Get Started"
                    </Button>
                </div>
            </div>
        </section>
    }
}
