//! Mock LLM client for testing.
//!
//! Provides deterministic responses based on input patterns, wrapped in
//! markdown fences the way real models tend to answer despite instructions.

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::types::{Message, Role};
use crate::llm::LlmClient;

/// Mock LLM client that returns canned responses based on input patterns.
///
/// Used for unit and integration testing without making real API calls.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    /// Custom response mappings (pattern -> response).
    custom_responses: Vec<(String, String)>,
}

impl MockLlmClient {
    /// Creates a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom response mapping.
    ///
    /// When the input contains `pattern`, the mock will return `response`.
    pub fn with_response(
        mut self,
        pattern: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.custom_responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Generates a mock response based on the input.
    fn mock_response(&self, input: &str) -> String {
        let input_lower = input.to_lowercase();

        // Check custom responses first
        for (pattern, response) in &self.custom_responses {
            if input_lower.contains(&pattern.to_lowercase()) {
                return response.clone();
            }
        }

        // Default pattern matching against the known STUDENT table
        if input_lower.contains("how many") || input_lower.contains("count") {
            return "```sql\nSELECT COUNT(*) FROM STUDENT;\n```".to_string();
        }

        if input_lower.contains("average") && input_lower.contains("marks") {
            return "```sql\nSELECT AVG(MARKS) FROM STUDENT;\n```".to_string();
        }

        if input_lower.contains("data science") {
            return "```sql\nSELECT * FROM STUDENT WHERE CLASS = 'Data Science';\n```".to_string();
        }

        if input_lower.contains("all students") || input_lower.contains("show students") {
            return "```sql\nSELECT * FROM STUDENT;\n```".to_string();
        }

        "I don't understand that question. Could you please rephrase it?".to_string()
    }

    /// Extracts the last user message content from a message list.
    fn extract_user_input(messages: &[Message]) -> String {
        messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let input = Self::extract_user_input(messages);
        Ok(self.mock_response(&input))
    }
}
