//! The statically defined lesson list.

use super::NavigationItem;

pub const STAGE_FOUNDATIONS: &str = "Stage 1: Foundations";
pub const STAGE_TOOLING: &str = "Stage 2: Development Environment";
pub const STAGE_ADVANCED: &str = "Stage 3: Advanced Topics";
pub const STAGE_INTEGRATION: &str = "Stage 4: Putting It Together";

/// Ten sections across four stages, in teaching order.
pub fn default_sections() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new(
            "typescript-introduction",
            "Introduction to TypeScript",
            STAGE_FOUNDATIONS,
            "Core concepts, strengths and weaknesses, practical demos",
        ),
        NavigationItem::new(
            "typescript-vs-javascript",
            "TypeScript vs JavaScript",
            STAGE_FOUNDATIONS,
            "Syntax differences side by side and measured productivity gains",
        ),
        NavigationItem::new(
            "dotnet-to-typescript",
            "Coming From Other Languages",
            STAGE_TOOLING,
            "Experience moving to TypeScript from other languages",
        ),
        NavigationItem::new(
            "vscode-setup",
            "Setting Up VS Code",
            STAGE_TOOLING,
            "Essential extensions and productivity tooling",
        ),
        NavigationItem::new(
            "advanced-typescript",
            "Advanced TypeScript",
            STAGE_ADVANCED,
            "Advanced types, generics, conditional types and decorators",
        ),
        NavigationItem::new(
            "api-design-and-types",
            "API Specs and Type Definitions",
            STAGE_ADVANCED,
            "OpenAPI specs and the path from an API spec to type definitions",
        ),
        NavigationItem::new(
            "axios-basics",
            "Axios Basics",
            STAGE_ADVANCED,
            "HTTP client fundamentals and how Axios compares",
        ),
        NavigationItem::new(
            "axios-typescript-best-practices",
            "Axios + TypeScript Best Practices",
            STAGE_INTEGRATION,
            "Type-safe API clients and generic HTTP services",
        ),
        NavigationItem::new(
            "mock-strategies-demo",
            "Mocking Strategies",
            STAGE_INTEGRATION,
            "JSON Server, MSW and adapter mocks compared in practice",
        ),
        NavigationItem::new(
            "project-integration",
            "Project Integration",
            STAGE_INTEGRATION,
            "Full project structure, deployment and best practices",
        ),
    ]
}
