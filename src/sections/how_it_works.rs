use leptos::prelude::*;

use crate::components::Card;
use crate::content::HOW_IT_WORKS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <div class="container">
                <h3 class="section-title">"How It Works"</h3>
                <div class="card-grid">
                    {HOW_IT_WORKS.iter().map(|copy| view! { <Card copy=copy/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
