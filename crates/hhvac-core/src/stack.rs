//! Technology stack lookup for a free-text search query.
//!
//! The requirements tally counts how many vacancies mention each technology of
//! the stack matching the query. Rules are checked in table order against the
//! lower-cased query and the first hit wins.
//!
//! The bare `c` language only matches as a whole whitespace-separated token and
//! is checked before every substring rule. `c++` and `c#` never collide with it
//! because the tokens differ, and substring rules such as `go` cannot shadow it.

enum Trigger {
    Token(&'static str),
    Substring(&'static str),
}

impl Trigger {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Trigger::Token(token) => lowered.split_whitespace().any(|t| t == *token),
            Trigger::Substring(needle) => lowered.contains(needle),
        }
    }
}

const STACK_RULES: &[(Trigger, &[&str])] = &[
    (
        Trigger::Token("c"),
        &[
            "Embedded",
            "RTOS",
            "Microcontrollers",
            "Linux",
            "Kernel",
            "GDB",
            "Assembly",
            "Makefile",
        ],
    ),
    (
        Trigger::Substring("python"),
        &[
            "SQL", "Django", "Linux", "Shell", "Git", "Flask", "API", "Docker",
        ],
    ),
    (
        Trigger::Substring("c++"),
        &[
            "STL",
            "Boost",
            "Qt",
            "CMake",
            "Linux",
            "Multithreading",
            "OpenGL",
            "Git",
        ],
    ),
    (
        Trigger::Substring("c#"),
        &[
            ".NET",
            "ASP.NET",
            "Entity Framework",
            "LINQ",
            "WPF",
            "Xamarin",
            "Azure",
            "SQL",
        ],
    ),
    (
        Trigger::Substring("javascript"),
        &[
            "Node.js",
            "React",
            "Vue.js",
            "Angular",
            "ES6",
            "TypeScript",
            "Webpack",
            "Jest",
        ],
    ),
    (
        Trigger::Substring("java"),
        &[
            "Spring",
            "Hibernate",
            "Maven",
            "JPA",
            "Microservices",
            "Kubernetes",
            "Jenkins",
            "SQL",
        ],
    ),
    (
        Trigger::Substring("web"),
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "PHP",
            "MySQL",
            "WordPress",
            "Bootstrap",
            "jQuery",
        ],
    ),
    (
        Trigger::Substring("go"),
        &[
            "Golang",
            "Docker",
            "Kubernetes",
            "Microservices",
            "REST",
            "gRPC",
            "PostgreSQL",
            "Redis",
        ],
    ),
    (
        Trigger::Substring("swift"),
        &[
            "iOS",
            "Xcode",
            "CocoaPods",
            "CoreData",
            "SwiftUI",
            "Objective-C",
            "UIKit",
            "REST",
        ],
    ),
    (
        Trigger::Substring("ruby"),
        &[
            "Rails",
            "Sinatra",
            "RSpec",
            "Capistrano",
            "Puma",
            "Sidekiq",
            "PostgreSQL",
            "Heroku",
        ],
    ),
    (
        Trigger::Substring("kotlin"),
        &[
            "Android",
            "Ktor",
            "Spring",
            "Coroutines",
            "Koin",
            "Jetpack Compose",
            "SQL",
            "Gradle",
        ],
    ),
];

const FALLBACK_STACK: &[&str] = &["SQL", "Linux", "Shell", "Git", "API", "Docker"];

/// Returns the technology keywords associated with `query`.
#[must_use]
pub fn stack_for_query(query: &str) -> &'static [&'static str] {
    let lowered = query.to_lowercase();
    STACK_RULES
        .iter()
        .find(|(trigger, _)| trigger.matches(&lowered))
        .map_or(FALLBACK_STACK, |(_, stack)| *stack)
}
