use crate::content::CardCopy;
use leptos::prelude::*;

/// Uniform card used by both feature grids.
#[component]
pub fn Card(copy: &'static CardCopy) -> impl IntoView {
    view! {
        <article class="card">
            <h4 class="card-title">{copy.title}</h4>
            <p class="card-description">{copy.description}</p>
        </article>
    }
}
