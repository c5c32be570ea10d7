use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <div class="footer-links">
                <a href="#">"Twitter"</a>
                <a href="#">"GitHub"</a>
                <a href="#">"LinkedIn"</a>
            </div>
            <p class="footer-copy">"© 2025 Black & White Hub"</p>
        </footer>
    }
}
