//! Built-in course definitions.
//!
//! Content here is configuration data, not logic; edit freely.

use learnbridge_core::{Course, Lesson, LessonKind, Level, Module};

fn lesson(id: &str, title: &str, duration: &str, kind: LessonKind, description: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        kind,
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    }
}

pub(crate) fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "server-fundamentals".to_string(),
            title: "Server Fundamentals".to_string(),
            description: "Master the essentials of server administration and management. \
                          This comprehensive course covers deployment, security, and best \
                          practices for enterprise server environments."
                .to_string(),
            instructor: "John Smith".to_string(),
            duration: "6 weeks".to_string(),
            level: Level::Intermediate,
            thumbnail: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31".to_string(),
            tags: vec![
                "Server".to_string(),
                "Enterprise".to_string(),
                "Professional".to_string(),
            ],
            modules: vec![
                Module {
                    title: "Getting Started".to_string(),
                    lessons: vec![
                        lesson(
                            "server-intro",
                            "Introduction to Server Management",
                            "30 min",
                            LessonKind::Video,
                            "Learn the fundamentals of server management and administration.",
                        ),
                        lesson(
                            "server-setup",
                            "Setting Up Your First Server",
                            "45 min",
                            LessonKind::Article,
                            "Step-by-step provisioning walkthrough.",
                        ),
                    ],
                },
                Module {
                    title: "Security & Operations".to_string(),
                    lessons: vec![
                        lesson(
                            "server-hardening",
                            "Hardening and Access Control",
                            "40 min",
                            LessonKind::Video,
                            "",
                        ),
                        lesson(
                            "server-quiz",
                            "Fundamentals Check",
                            "15 min",
                            LessonKind::Quiz,
                            "Test your understanding of the core concepts.",
                        ),
                    ],
                },
            ],
        },
        Course {
            id: "onboarding-essentials".to_string(),
            title: "Onboarding Essentials".to_string(),
            description: "Everything a new team member needs in the first two weeks: \
                          accounts, tooling, communication norms, and who to ask."
                .to_string(),
            instructor: "Priya Raman".to_string(),
            duration: "2 weeks".to_string(),
            level: Level::Beginner,
            thumbnail: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f".to_string(),
            tags: vec!["Onboarding".to_string(), "Culture".to_string()],
            modules: vec![
                Module {
                    title: "Week One".to_string(),
                    lessons: vec![
                        lesson(
                            "onboard-welcome",
                            "Welcome and Orientation",
                            "20 min",
                            LessonKind::Video,
                            "",
                        ),
                        lesson(
                            "onboard-tools",
                            "Tooling and Accounts",
                            "25 min",
                            LessonKind::Article,
                            "Set up the accounts and tools used day to day.",
                        ),
                    ],
                },
                Module {
                    title: "Week Two".to_string(),
                    lessons: vec![lesson(
                        "onboard-quiz",
                        "Onboarding Quiz",
                        "10 min",
                        LessonKind::Quiz,
                        "",
                    )],
                },
            ],
        },
        Course {
            id: "cloud-security".to_string(),
            title: "Cloud Security Practices".to_string(),
            description: "Identity, network segmentation, and incident response for \
                          cloud-hosted workloads."
                .to_string(),
            instructor: "Maria Alvarez".to_string(),
            duration: "4 weeks".to_string(),
            level: Level::Advanced,
            thumbnail: "https://images.unsplash.com/photo-1563013544-824ae1b704d3".to_string(),
            tags: vec![
                "Security".to_string(),
                "Cloud".to_string(),
                "Professional".to_string(),
            ],
            modules: vec![Module {
                title: "Foundations".to_string(),
                lessons: vec![
                    lesson(
                        "cloud-iam",
                        "Identity and Access Management",
                        "35 min",
                        LessonKind::Video,
                        "",
                    ),
                    lesson(
                        "cloud-network",
                        "Network Segmentation",
                        "30 min",
                        LessonKind::Article,
                        "",
                    ),
                    lesson(
                        "cloud-quiz",
                        "Security Baseline Quiz",
                        "15 min",
                        LessonKind::Quiz,
                        "",
                    ),
                ],
            }],
        },
    ]
}
