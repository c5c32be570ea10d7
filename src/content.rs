//! Built-in sample content shown before any user data exists.

use crate::components::project_gallery::Project;
use crate::components::testimonials::Testimonial;
use crate::storage::posts::Post;

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Minimalist Design".to_string(),
            description: "Exploring the elegance of black & white in modern web design."
                .to_string(),
            date: "Sep 8, 2025".to_string(),
        },
        Post {
            title: "Typography Matters".to_string(),
            description: "How fonts and spacing can create visual harmony.".to_string(),
            date: "Sep 7, 2025".to_string(),
        },
        Post {
            title: "Responsive Layouts".to_string(),
            description: "Designs that look perfect on every device.".to_string(),
            date: "Sep 6, 2025".to_string(),
        },
        Post {
            title: "Subtle Interactions".to_string(),
            description: "Adding life with hover effects and micro-animations.".to_string(),
            date: "Sep 5, 2025".to_string(),
        },
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Portfolio Redesign".to_string(),
            category: "Web Design".to_string(),
            description: "Transforming a cluttered portfolio into a sleek black & white experience."
                .to_string(),
        },
        Project {
            title: "E-commerce UI".to_string(),
            category: "UI/UX".to_string(),
            description: "Modern and clean product pages with subtle hover effects.".to_string(),
        },
        Project {
            title: "Landing Page".to_string(),
            category: "Web Design".to_string(),
            description: "Eye-catching one-page design with smooth scrolling interactions."
                .to_string(),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Alice Johnson".to_string(),
            feedback: "This blog's design is clean and easy to navigate. Love it!".to_string(),
        },
        Testimonial {
            name: "Mark Lee".to_string(),
            feedback: "Minimalism at its best. Typography is excellent.".to_string(),
        },
        Testimonial {
            name: "Sophia Chen".to_string(),
            feedback: "Responsive layouts make reading a pleasure on any device.".to_string(),
        },
    ]
}
