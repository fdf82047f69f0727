//! The project record set

use super::{Project, Screenshot};

/// All portfolio projects
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "punks",
            title: "punks",
            description: "progressive, user-friendly navigator for kits and samples",
            link: "https://github.com/samanshaiza004/punks",
            technologies: &["TypeScript", "Electron", "React", "Audio"],
            github_link: Some("https://github.com/samanshaiza004/punks"),
            demo_link: None,
            full_description: None,
            screenshots: &[
                Screenshot {
                    url: "https://utfs.io/f/59HxlDoACmIkdZHZbVD8L5YXlbcM4NZpRxUKBW3EmAwrjDIT",
                    caption: "punks screenshot 1",
                },
                Screenshot {
                    url: "https://utfs.io/f/59HxlDoACmIkGCkJi9FXp107bg8YzOHmMSrtD2VcwQEA4qlP",
                    caption: "punks screenshot 2",
                },
            ],
            features: &[
                "Browse through audio sample libraries",
                "Preview samples quickly before deciding to use them.",
                "Drag and drop samples into a Digital Audio Workstation (DAW).",
            ],
            challenges: &[],
            learnings: &[],
        },
        Project {
            id: "fortunadws",
            title: "FortunaDWS",
            description: "High-performance web server built with C++ and Boost.ASIO",
            link: "https://github.com/samanshaiza004/fortunadws",
            technologies: &["C++", "Boost.ASIO", "Networking"],
            github_link: Some("https://github.com/samanshaiza004/fortunadws"),
            demo_link: None,
            full_description: Some(
                "FortunaDWS is a custom web server built from scratch in C++ with a \
                 focus on high-performance, event-driven, asynchronous I/O. The \
                 project is designed to handle multiple client connections \
                 simultaneously while maintaining a responsive and efficient \
                 architecture. By leveraging non-blocking I/O and event loops, the \
                 server aims to provide a scalable and robust foundation for web \
                 services.",
            ),
            screenshots: &[],
            features: &[
                "Multi-threaded request handling",
                "Configurable routing system",
                "Static file serving",
            ],
            challenges: &[
                "Implementing thread-safe logging",
                "Optimizing memory usage",
            ],
            learnings: &[
                "Advanced C++ memory management",
                "Network programming patterns",
            ],
        },
        // Add more projects here
    ]
}
