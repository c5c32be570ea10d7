//! Post creation form.
//!
//! The draft fields live in the parent so a successful submission can clear
//! them; validation itself happens in the submit callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn PostForm(
    title: RwSignal<String>,
    description: RwSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let title_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        title.set(input.value());
    };

    let description_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        description.set(input.value());
    };

    view! {
        <section class="post-form-section">
            <h2 class="section-title">"Add Your Post"</h2>
            <div class="post-form">
                <input
                    type="text"
                    class="form-input"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=title_input
                />
                <input
                    type="text"
                    class="form-input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=description_input
                />
                <button
                    class="form-submit"
                    on:click=move |_| on_submit.run(())
                >
                    "Add"
                </button>
            </div>
        </section>
    }
}
