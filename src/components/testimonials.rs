//! Expandable testimonial list.

use leptos::prelude::*;

/// A static quote entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub feedback: String,
}

/// Next expansion state after selecting testimonial `index`.
///
/// Clicking the open entry closes it; clicking any other entry opens it and
/// closes whatever was open. At most one entry is ever expanded.
pub fn toggle(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn Testimonials(
    testimonials: Signal<Vec<Testimonial>>,
    expanded: RwSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <section class="testimonials-section">
            <h2 class="section-title">"Testimonials"</h2>
            <div class="testimonial-list">
                {move || {
                    testimonials
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, t)| {
                            let name = t.name;
                            let feedback = t.feedback;
                            view! {
                                <div
                                    class="card testimonial-card"
                                    on:click=move |_| expanded.update(|e| *e = toggle(*e, i))
                                >
                                    <p class="testimonial-name">{name}</p>
                                    {move || {
                                        if expanded.get() == Some(i) {
                                            view! {
                                                <p class="testimonial-feedback">
                                                    {feedback.clone()}
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <p class="testimonial-hint">"Click to expand"</p>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_from_collapsed() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let state = toggle(None, 1);
        assert_eq!(toggle(state, 1), None);
    }

    #[test]
    fn test_toggle_replaces_previous() {
        let state = toggle(None, 0);
        assert_eq!(toggle(state, 2), Some(2));
    }
}
