use leptos::prelude::*;

use crate::components::{ICON_MOON, ICON_SUN, Icon};
use crate::theme::{self, ThemePreference};

/// Page header: in-page navigation, centered brand, logo, and the theme
/// toggle. The toggle owns the preference signal; every flip goes through
/// `theme::toggle` so the document class and storage stay in sync.
#[component]
pub fn Nav(initial_theme: ThemePreference) -> impl IntoView {
    let (preference, set_preference) = signal(initial_theme);

    let toggle_theme = move |_| {
        set_preference.set(theme::toggle(preference.get_untracked()));
    };

    view! {
        <header class="nav">
            <div class="nav-inner">
                <nav class="nav-links">
                    <a href="#home" class="nav-link">"Home"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
                <h1 class="nav-brand">"Pixel2Test.ai"</h1>
                <div class="nav-controls">
                    <img src="assets/logo.svg" alt="Pixel2Test logo" class="nav-logo"/>
                    <button class="theme-toggle" title="Toggle light/dark mode" on:click=toggle_theme>
                        {move || {
                            if preference.get().is_dark() {
                                view! { <Icon path=ICON_SUN size="18" class="theme-icon"/> }
                            } else {
                                view! { <Icon path=ICON_MOON size="18" class="theme-icon"/> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
