use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::components::project_gallery::{ProjectFilter, ProjectGallery};
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;
use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::storage::{self, posts};

#[component]
pub fn App() -> impl IntoView {
    // Load persisted posts, falling back to sample content when nothing
    // valid was stored. Read once here; every mutation writes back.
    let stored = posts::load();
    if stored.is_none() {
        leptos::logging::log!("no stored posts, starting from sample content");
    }
    let posts = RwSignal::new(stored.unwrap_or_else(content::sample_posts));

    let projects = RwSignal::new(content::sample_projects());
    let testimonials = RwSignal::new(content::testimonials());

    // UI state
    let search = RwSignal::new(String::new());
    let project_filter = RwSignal::new(ProjectFilter::All);
    let draft_title = RwSignal::new(String::new());
    let draft_description = RwSignal::new(String::new());
    let expanded_testimonial = RwSignal::new(None::<usize>);
    let dark_mode = RwSignal::new(true);

    let on_submit = Callback::new(move |_: ()| {
        let title = draft_title.get_untracked();
        let description = draft_description.get_untracked();
        let mut accepted = false;

        posts.update(|list| {
            // Rejected drafts leave the list and the form fields untouched.
            if posts::submit(list, &title, &description, storage::today()).is_some() {
                posts::save(list);
                accepted = true;
            }
        });

        if accepted {
            draft_title.set(String::new());
            draft_description.set(String::new());
        }
    });

    let post_count = Signal::derive(move || posts.get().len());
    let project_count = Signal::derive(move || projects.get().len());
    let testimonial_count = Signal::derive(move || testimonials.get().len());

    view! {
        <div class="app" class:light=move || !dark_mode.get()>
            <ThemeToggle dark_mode=dark_mode />
            <Header search=search />
            <PostForm
                title=draft_title
                description=draft_description
                on_submit=on_submit
            />
            <PostList posts=posts.into() search=search.into() />
            <ProjectGallery projects=projects.into() filter=project_filter />
            <Testimonials
                testimonials=testimonials.into()
                expanded=expanded_testimonial
            />
            <Stats
                post_count=post_count
                project_count=project_count
                testimonial_count=testimonial_count
            />
            <Footer />
        </div>
    }
}
