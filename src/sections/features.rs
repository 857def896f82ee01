use leptos::prelude::*;

use crate::components::Card;
use crate::content::KEY_FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <h3 class="section-title">"Key Features"</h3>
                <div class="card-grid">
                    {KEY_FEATURES.iter().map(|copy| view! { <Card copy=copy/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
