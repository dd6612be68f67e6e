//! Built-in course content.

use super::{
    ComparisonItem, ComparisonWinner, ContentType, CourseModule, CourseSection, Difficulty,
    Exercise, ExerciseDifficulty, ExerciseType, SectionContent,
};

const FETCH_VS_AXIOS_STARTER: &str = r#"// Implement the same features with both Fetch and Axios:
// 1. GET request for the user list
// 2. POST request creating a user
// 3. Unified error handling
// 4. Automatic auth header

interface User {
  id: number;
  name: string;
  email: string;
}

interface ApiResponse<T> {
  data: T;
  message: string;
  success: boolean;
}

// Fetch implementation
class FetchApiClient {
  // implement here
}

// Axios implementation
class AxiosApiClient {
  // implement here
}"#;

/// The "HTTP clients and type safety" module.
pub fn http_client_module() -> CourseModule {
    CourseModule {
        id: "http-client-integration".to_string(),
        title: "HTTP Clients and Type Safety".to_string(),
        description: "Integrate HTTP clients with TypeScript, compare native Fetch with Axios, \
                      and make API calls type safe."
            .to_string(),
        estimated_duration: 420,
        difficulty: Difficulty::Intermediate,
        sections: vec![fetch_vs_axios_section()],
    }
}

fn fetch_vs_axios_section() -> CourseSection {
    CourseSection {
        id: "native-fetch-vs-axios".to_string(),
        title: "Native Fetch vs Axios".to_string(),
        completed: false,
        content: vec![
            SectionContent {
                content_type: ContentType::Text,
                title: "Introduction".to_string(),
                description: "How the native Fetch API and the Axios library differ".to_string(),
                content: "The choice of HTTP client shapes both development speed and \
                          maintainability. This section compares Fetch and Axios from several \
                          angles to support an informed choice."
                    .to_string(),
                code_example: None,
                highlights: vec![],
                limitations: vec![],
            },
            SectionContent {
                content_type: ContentType::Comparison,
                title: "Limits of the Fetch API".to_string(),
                description: "Where native Fetch gets in the way in practice".to_string(),
                content: "Fetch ships with the browser, but larger applications run into \
                          several gaps."
                    .to_string(),
                code_example: None,
                highlights: vec![],
                limitations: [
                    "response.ok must be checked by hand",
                    "Error handling is more involved",
                    "No request/response interceptors",
                    "No automatic JSON conversion",
                    "No request timeout setting",
                    "No built-in retry",
                    "Browser compatibility gaps",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        ],
        exercises: vec![Exercise {
            id: "fetch-vs-axios-comparison".to_string(),
            title: "Implement the same feature twice".to_string(),
            description: "Build the same API calls with Fetch and with Axios, then compare the \
                          code complexity."
                .to_string(),
            exercise_type: ExerciseType::Coding,
            difficulty: ExerciseDifficulty::Medium,
            starter_code: Some(FETCH_VS_AXIOS_STARTER.to_string()),
            solution: None,
            hints: [
                "Fetch needs response.ok checked manually",
                "Axios interceptors remove repeated code",
                "Keep error handling consistent",
                "Compare line counts and complexity",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            test_cases: vec![],
        }],
    }
}

/// Feature-by-feature comparison shown alongside the Fetch limitations.
pub fn fetch_axios_comparison() -> Vec<ComparisonItem> {
    [
        ("Status errors", "Manual response.ok check", "Rejects non-2xx", ComparisonWinner::Axios),
        ("JSON", "Call response.json()", "Parsed automatically", ComparisonWinner::Axios),
        ("Interceptors", "None", "Request and response", ComparisonWinner::Axios),
        ("Timeouts", "AbortController", "timeout option", ComparisonWinner::Axios),
        ("Bundle size", "Built in", "Extra dependency", ComparisonWinner::Fetch),
        ("Streaming", "ReadableStream", "Adapter dependent", ComparisonWinner::Fetch),
        ("Cancellation", "AbortController", "AbortController", ComparisonWinner::Tie),
    ]
    .into_iter()
    .map(|(feature, fetch, axios, winner)| ComparisonItem {
        feature: feature.to_string(),
        fetch: fetch.to_string(),
        axios: axios.to_string(),
        winner,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn module_has_the_fetch_section() {
        let module = http_client_module();
        let section = module.section("native-fetch-vs-axios").unwrap();
        assert_eq!(section.content.len(), 2);
        assert_eq!(section.content[1].limitations.len(), 7);
        assert_eq!(module.exercise_count(), 1);
        assert!(module.section("missing").is_none());
    }

    #[test]
    fn content_type_serializes_under_type_key() {
        let module = http_client_module();
        let value = serde_json::to_value(&module.sections[0].content[0]).unwrap();
        assert_eq!(value["type"], json!("text"));
        assert!(value.get("limitations").is_none());
    }

    #[test]
    fn module_serializes_camel_case() {
        let value = serde_json::to_value(http_client_module()).unwrap();
        assert_eq!(value["estimatedDuration"], json!(420));
        assert_eq!(value["difficulty"], json!("intermediate"));
        assert_eq!(value["sections"][0]["exercises"][0]["type"], json!("coding"));
    }

    #[test]
    fn comparison_has_a_tie() {
        let items = fetch_axios_comparison();
        assert!(items.iter().any(|i| i.winner == ComparisonWinner::Tie));
    }
}
