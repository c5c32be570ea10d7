//! Project gallery with category filter buttons.

use leptos::prelude::*;

/// A static portfolio entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
}

/// Gallery filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    WebDesign,
    UiUx,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::WebDesign, Self::UiUx];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::WebDesign => "Web Design",
            Self::UiUx => "UI/UX",
        }
    }

    /// Projects passing this filter, in their original order.
    ///
    /// `All` is the identity; a concrete selection requires an exact
    /// category match, so projects with an unrecognized category simply
    /// never appear under it.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects
            .iter()
            .filter(|p| matches!(self, Self::All) || p.category == self.label())
            .cloned()
            .collect()
    }
}

#[component]
pub fn ProjectGallery(
    projects: Signal<Vec<Project>>,
    filter: RwSignal<ProjectFilter>,
) -> impl IntoView {
    let visible = Memo::new(move |_| filter.get().apply(&projects.get()));

    view! {
        <section class="projects-section">
            <h2 class="section-title">"Projects"</h2>
            <div class="filter-row">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="filter-btn"
                                class:filter-active=move || filter.get() == f
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <div class="card project-card">
                                    <h3 class="project-title">{p.title}</h3>
                                    <p class="project-body">{p.description}</p>
                                    <p class="project-tag">{p.category}</p>
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
    use crate::content::sample_projects;

    #[test]
    fn test_all_is_identity() {
        let projects = sample_projects();
        assert_eq!(ProjectFilter::All.apply(&projects), projects);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let projects = sample_projects();
        let matches = ProjectFilter::UiUx.apply(&projects);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "E-commerce UI");
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let projects = sample_projects();
        let matches = ProjectFilter::WebDesign.apply(&projects);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].title, "Portfolio Redesign");
        assert_eq!(matches[1].title, "Landing Page");
    }

    #[test]
    fn test_unknown_category_never_matches() {
        let projects = vec![Project {
            title: "Brand Refresh".to_string(),
            category: "Branding".to_string(),
            description: "Logo and identity work.".to_string(),
        }];

        assert!(ProjectFilter::WebDesign.apply(&projects).is_empty());
        assert!(ProjectFilter::UiUx.apply(&projects).is_empty());
        assert_eq!(ProjectFilter::All.apply(&projects).len(), 1);
    }
}
