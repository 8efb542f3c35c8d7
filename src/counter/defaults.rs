//! Seed data for the counter store's showcase dataset.
//!
//! Larger than the canonical content seed on purpose: this is the demo
//! dataset the UI showcase pages run on, reset on every process start.

use super::types::{BlogPost, Contact, Project, Skill, Testimonial};

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
        },
        Project {
            id: 4,
            title: "Portfolio Website".into(),
            description: "A professional portfolio website showcasing projects, skills, and contact information for a web developer.".into(),
            image: "/path/to/portfolio.jpg".into(),
            date: "2023-07-20".into(),
            tags: vec![
                "Vue.js".into(),
                "Animation".into(),
                "Responsive Design".into(),
            ],
            category: "Personal".into(),
            features: vec![
                "Responsive design for all devices".into(),
                "Interactive project showcase".into(),
                "Skill visualization with charts".into(),
                "Contact form with validation".into(),
                "Performance optimization".into(),
            ],
            github_link: "https://github.com/username/portfolio".into(),
            demo_link: "https://portfolio.example.com".into(),
            is_featured: true,
        },
        Project {
            id: 5,
            title: "Recipe Finder".into(),
            description: "A culinary application that helps users discover recipes based on available ingredients, dietary restrictions, and preferences.".into(),
            image: "/path/to/recipe.jpg".into(),
            date: "2023-05-15".into(),
            tags: vec![
                "Vue.js".into(),
                "API Integration".into(),
                "Firebase".into(),
            ],
            category: "Lifestyle".into(),
            features: vec![
                "Ingredient-based recipe search".into(),
                "Dietary filter options".into(),
                "Recipe saving and favorites".into(),
                "Nutritional information display".into(),
                "Meal planning calendar".into(),
            ],
            github_link: "https://github.com/username/recipe-finder".into(),
            demo_link: "https://recipe-app.example.com".into(),
            is_featured: false,
        },
        Project {
            id: 6,
            title: "Social Media Dashboard".into(),
            description: "A dashboard for managing and analyzing social media presence across multiple platforms.".into(),
            image: "/path/to/social.jpg".into(),
            date: "2023-03-10".into(),
            tags: vec![
                "Vue.js".into(),
                "Data Visualization".into(),
                "API Integration".into(),
            ],
            category: "Marketing".into(),
            features: vec![
                "Multi-platform account management".into(),
                "Post scheduling and automation".into(),
                "Engagement analytics and reports".into(),
                "Audience demographic insights".into(),
                "Content performance tracking".into(),
            ],
            github_link: "https://github.com/username/social-dashboard".into(),
            demo_link: "https://social-dashboard.example.com".into(),
            is_featured: false,
        },
    ]
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "555-123-4567".into(),
            subject: "Project Inquiry".into(),
            message: "I would like to discuss a potential web development project for my company.".into(),
            preferred_contact: "email".into(),
            date: "2023-12-10T14:30:00Z".into(),
        },
        Contact {
            id: 2,
            name: "Sarah Johnson".into(),
            email: "sarah@example.com".into(),
            phone: "555-987-6543".into(),
            subject: "Collaboration Opportunity".into(),
            message: "I am interested in collaborating on an open-source project. Please let me know if you would be available for a discussion.".into(),
            preferred_contact: "phone".into(),
            date: "2024-01-15T09:45:00Z".into(),
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            id: 1,
            name: "Vue.js".into(),
            icon: "⚡".into(),
            category: "Frontend".into(),
            description: "Building reactive and component-based user interfaces with Vue.js and its ecosystem.".into(),
            level: 95,
        },
        Skill {
            id: 2,
            name: "JavaScript".into(),
            icon: "🔧".into(),
            category: "Programming".into(),
            description: "Modern JavaScript development including ES6+ features, async/await, and functional programming.".into(),
            level: 90,
        },
        Skill {
            id: 3,
            name: "UI/UX Design".into(),
            icon: "🎨".into(),
            category: "Design".into(),
            description: "Creating intuitive user interfaces and experiences with focus on accessibility and usability.".into(),
            level: 85,
        },
        Skill {
            id: 4,
            name: "Node.js".into(),
            icon: "🚀".into(),
            category: "Backend".into(),
            description: "Server-side JavaScript development with Express, API design, and database integration.".into(),
            level: 80,
        },
        Skill {
            id: 5,
            name: "CSS & Sass".into(),
            icon: "💅".into(),
            category: "Frontend".into(),
            description: "Advanced styling with CSS3, Sass/SCSS, animations, and responsive design principles.".into(),
            level: 90,
        },
        Skill {
            id: 6,
            name: "Testing".into(),
            icon: "🧪".into(),
            category: "Quality Assurance".into(),
            description: "Unit, integration, and E2E testing with frameworks like Jest, Vitest, and Cypress.".into(),
            level: 75,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Michael Brown".into(),
            role: "CEO at TechCorp".into(),
            content: "Working with this developer was a fantastic experience. They delivered our e-commerce platform on time and with exceptional quality. The attention to detail and user experience considerations exceeded our expectations.".into(),
            date: "2023-11-15".into(),
        },
        Testimonial {
            id: 2,
            name: "Emily Chen".into(),
            role: "Product Manager".into(),
            content: "The project management application developed for our team has dramatically improved our productivity. The intuitive interface and thoughtful features showcase a deep understanding of user needs.".into(),
            date: "2023-09-22".into(),
        },
        Testimonial {
            id: 3,
            name: "David Wilson".into(),
            role: "Marketing Director".into(),
            content: "Our portfolio website has received numerous compliments since the redesign. The developer understood our brand vision perfectly and translated it into a stunning digital experience that has increased user engagement significantly.".into(),
            date: "2024-01-18".into(),
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Mastering Vue 3 Composition API".into(),
            excerpt: "Learn how to leverage the power of Vue 3 Composition API to create more maintainable and scalable applications.".into(),
            date: "2023-12-05".into(),
            tags: vec![
                "Vue.js".into(),
                "JavaScript".into(),
                "Web Development".into(),
            ],
            image_url: "/path/to/vue-composition.jpg".into(),
        },
        BlogPost {
            id: 2,
            title: "The Future of UI Component Libraries".into(),
            excerpt: "Exploring the trends and innovations in UI component libraries that are shaping the future of web development.".into(),
            date: "2024-01-20".into(),
            tags: vec!["UI Design".into(), "Components".into(), "Frontend".into()],
            image_url: "/path/to/ui-libraries.jpg".into(),
        },
        BlogPost {
            id: 3,
            title: "Optimizing Web Performance: A Practical Guide".into(),
            excerpt: "Practical tips and techniques to improve the performance of your web applications and deliver a better user experience.".into(),
            date: "2024-02-10".into(),
            tags: vec![
                "Performance".into(),
                "Optimization".into(),
                "Web Development".into(),
            ],
            image_url: "/path/to/web-performance.jpg".into(),
        },
    ]
}
