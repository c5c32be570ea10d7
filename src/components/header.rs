//! Hero header with the post search box.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Header(search: RwSignal<String>) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        search.set(input.value());
    };

    view! {
        <header class="hero">
            <h1 class="hero-title">"Black & White Hub"</h1>
            <p class="hero-tagline">
                "An interactive productivity & knowledge hub."
            </p>
            <input
                type="text"
                class="search-input"
                placeholder="Search posts..."
                prop:value=move || search.get()
                on:input=on_input
            />
        </header>
    }
}
