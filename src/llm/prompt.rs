//! Prompt construction for SQL generation.

use crate::llm::types::Message;

/// System prompt for the text-to-SQL task.
///
/// Names the single known table and asks for a bare terminated statement.
/// Models do not reliably comply with the no-markdown instruction, which is
/// why the normalizer exists downstream.
const SYSTEM_PROMPT: &str = "You are an expert in converting English questions to SQL queries. \
The SQLite table is STUDENT with columns NAME, CLASS, SECTION, MARKS. \
Return only the SQL query ending with a semicolon, no markdown or explanation.";

/// Builds the message list for one SQL-generation request.
pub fn build_messages(question: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(question)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::Role;

    #[test]
    fn test_build_messages_shape() {
        let messages = build_messages("How many students are there?");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "How many students are there?");
    }

    #[test]
    fn test_system_prompt_names_the_table() {
        let messages = build_messages("anything");
        assert!(messages[0].content.contains("STUDENT"));
        assert!(messages[0].content.contains("NAME, CLASS, SECTION, MARKS"));
        assert!(messages[0].content.contains("semicolon"));
    }
}
