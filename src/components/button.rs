use leptos::prelude::*;

/// Base style every button on the page shares.
const BASE_CLASS: &str = "btn";

/// Clickable control that merges caller classes with the base style and
/// forwards activation to the supplied callback.
#[component]
pub fn Button(
    children: Children,
    #[prop(into)] on_click: Callback<()>,
    /// Extra CSS classes appended to the base style.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let combined_class = if class.is_empty() {
        BASE_CLASS.to_string()
    } else {
        format!("{BASE_CLASS} {class}")
    };

    view! {
        <button class=combined_class on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}
