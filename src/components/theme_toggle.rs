use leptos::prelude::*;

#[component]
pub fn ThemeToggle(dark_mode: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="theme-toggle">
            <button
                class="theme-btn"
                on:click=move |_| dark_mode.update(|d| *d = !*d)
            >
                {move || if dark_mode.get() { "Light Mode" } else { "Dark Mode" }}
            </button>
        </div>
    }
}
