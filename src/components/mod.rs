pub mod footer;
pub mod header;
pub mod post_form;
pub mod post_list;
pub mod project_gallery;
pub mod stats;
pub mod testimonials;
pub mod theme_toggle;
