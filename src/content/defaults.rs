//! Seed data for the content store.
//!
//! These functions feed both the serde `default` attributes and the
//! `Default` derive on `ContentState`, so a fresh store and a store whose
//! persisted blob is missing a field agree on the same literals.

use super::types::{BlogPost, CompanyInfo, ContactSubmission, Project, SiteLink, SocialLinks, WebInfo};
use crate::utils::date;
use std::collections::BTreeMap;

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-commerce Platform".into(),
            description: "A fully responsive e-commerce platform with product filtering, user authentication, and payment processing.".into(),
            image: "/path/to/ecommerce.jpg".into(),
            date: "2024-02-15".into(),
            tags: vec![
                "Vue.js".into(),
                "Firebase".into(),
                "Stripe".into(),
                "Responsive Design".into(),
            ],
            category: "Web Development".into(),
            features: vec![
                "User authentication and profiles".into(),
                "Product search and filtering".into(),
                "Shopping cart functionality".into(),
                "Payment processing with Stripe".into(),
                "Order history tracking".into(),
            ],
            github_link: "https://github.com/username/ecommerce-platform".into(),
            demo_link: "https://ecommerce-demo.example.com".into(),
            is_featured: true,
            view_count: 0,
        },
        Project {
            id: 2,
            title: "Task Management App".into(),
            description: "A productivity application for managing tasks, projects, and team collaboration with real-time updates.".into(),
            image: "/path/to/task-app.jpg".into(),
            date: "2023-11-10".into(),
            tags: vec![
                "Vue.js".into(),
                "Pinia".into(),
                "Firebase".into(),
                "Real-time".into(),
            ],
            category: "Productivity".into(),
            features: vec![
                "Drag-and-drop task organization".into(),
                "Team collaboration features".into(),
                "Task priority and status tracking".into(),
                "Due date notifications".into(),
                "Project progress analytics".into(),
            ],
            github_link: "https://github.com/username/task-management".into(),
            demo_link: "https://task-app.example.com".into(),
            is_featured: true,
            view_count: 0,
        },
        Project {
            id: 3,
            title: "Weather Dashboard".into(),
            description: "A weather application that provides current conditions, forecasts, and historical weather data for locations worldwide.".into(),
            image: "/path/to/weather.jpg".into(),
            date: "2023-09-05".into(),
            tags: vec![
                "Vue.js".into(),
                "API Integration".into(),
                "Data Visualization".into(),
            ],
            category: "Utility".into(),
            features: vec![
                "Location-based weather forecasts".into(),
                "Interactive weather maps".into(),
                "7-day forecast predictions".into(),
                "Historical weather data charts".into(),
                "Weather alert notifications".into(),
            ],
            github_link: "https://github.com/username/weather-dashboard".into(),
            demo_link: "https://weather-app.example.com".into(),
            is_featured: false,
            view_count: 0,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Getting Started with Vue 3 Composition API".into(),
            content: "The Composition API is a set of function-based APIs that allow flexible composition of component logic...".into(),
            excerpt: "Learn how to leverage the power of Vue 3 Composition API to create more maintainable and scalable applications.".into(),
            date: "2023-12-05".into(),
            author: "John Doe".into(),
            tags: vec![
                "Vue.js".into(),
                "JavaScript".into(),
                "Web Development".into(),
            ],
            image_url: "/path/to/vue-composition.jpg".into(),
            published: true,
            comments: Vec::new(),
        },
        BlogPost {
            id: 2,
            title: "Building Reactive UIs with NaiveUI".into(),
            content: "NaiveUI is a Vue 3 component library that provides a rich set of components and features...".into(),
            excerpt: "Discover how to build beautiful and responsive user interfaces using the NaiveUI library for Vue 3.".into(),
            date: "2024-01-20".into(),
            author: "Jane Smith".into(),
            tags: vec!["UI Design".into(), "Components".into(), "Frontend".into()],
            image_url: "/path/to/ui-libraries.jpg".into(),
            published: true,
            comments: Vec::new(),
        },
    ]
}

pub fn contact_submissions() -> Vec<ContactSubmission> {
    Vec::new()
}

pub fn web_info() -> WebInfo {
    WebInfo {
        title: "Vue Portfolio".into(),
        description: "A modern portfolio website built with Vue 3, Pinia, and NaiveUI".into(),
        author: "Your Name".into(),
        copyright_year: date::current_year(),
        social_links: SocialLinks {
            github: "https://github.com/yourusername".into(),
            linkedin: "https://linkedin.com/in/yourprofile".into(),
            twitter: "https://twitter.com/yourhandle".into(),
            email: "your.email@example.com".into(),
        },
        logo_url: "/logo.png".into(),
        nav_links: vec![
            SiteLink::new("Home", "/"),
            SiteLink::new("Projects", "/projects"),
            SiteLink::new("Contact", "/contact"),
        ],
        footer_links: vec![
            SiteLink::new("Privacy Policy", "/privacy"),
            SiteLink::new("Terms of Service", "/terms"),
            SiteLink::new("Sitemap", "/sitemap"),
        ],
        company_info: CompanyInfo {
            name: "Your Company LLC".into(),
            address: "123 Web Dev Street, Coding City, 12345".into(),
            phone: "+1 (555) 123-4567".into(),
        },
        last_updated: date::now_iso(),
    }
}

pub fn page_views() -> BTreeMap<String, u64> {
    BTreeMap::new()
}
