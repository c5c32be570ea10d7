//! Searchable post list.

use leptos::prelude::*;

use crate::storage::posts::{self, Post};

#[component]
pub fn PostList(posts: Signal<Vec<Post>>, search: Signal<String>) -> impl IntoView {
    // Recomputed from the full list on every keystroke; nothing is cached.
    let visible = Memo::new(move |_| posts::filter(&posts.get(), &search.get()));

    view! {
        <section class="post-grid">
            {move || {
                let matches = visible.get();
                if matches.is_empty() {
                    view! { <p class="post-empty">"No posts found."</p> }.into_any()
                } else {
                    matches
                        .into_iter()
                        .map(|post| {
                            view! {
                                <div class="card post-card">
                                    <h2 class="post-title">{post.title}</h2>
                                    <p class="post-date">{post.date}</p>
                                    <p class="post-body">{post.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
