use leptos::prelude::*;

#[component]
pub fn Stats(
    post_count: Signal<usize>,
    project_count: Signal<usize>,
    testimonial_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <section class="stats-section">
            <h2 class="section-title">"Statistics"</h2>
            <div class="stats-row">
                <div class="stat">
                    <p class="stat-value">{move || project_count.get()}</p>
                    <p class="stat-label">"Projects"</p>
                </div>
                <div class="stat">
                    <p class="stat-value">{move || post_count.get()}</p>
                    <p class="stat-label">"Posts"</p>
                </div>
                <div class="stat">
                    <p class="stat-value">{move || testimonial_count.get()}</p>
                    <p class="stat-label">"Testimonials"</p>
                </div>
            </div>
        </section>
    }
}
