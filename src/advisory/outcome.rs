use serde::{Deserialize, Serialize};

/// Result of an evaluator call.
///
/// Separates "nothing submitted yet" from "searched and found nothing" so
/// callers never have to compare against prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation<T> {
    /// Required input was blank; `prompt` asks the user for it.
    NeedsInput { prompt: String },
    /// Input was usable but nothing matched.
    NoMatch,
    Ready { result: T },
}

impl<T> Evaluation<T> {
    pub(crate) fn needs_input(prompt: &str) -> Self {
        Self::NeedsInput {
            prompt: prompt.to_string(),
        }
    }

    pub(crate) fn ready(result: T) -> Self {
        Self::Ready { result }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::NeedsInput { prompt } => Some(prompt),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Ready { result } => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NeedsInput { .. } => "needs_input",
            Self::NoMatch => "no_match",
            Self::Ready { .. } => "ready",
        }
    }
}

impl Evaluation<String> {
    /// Single-string rendering: the prompt, the advice, or empty for no match.
    pub fn into_text(self) -> String {
        match self {
            Self::NeedsInput { prompt } => prompt,
            Self::NoMatch => String::new(),
            Self::Ready { result } => result,
        }
    }
}

impl<T> Evaluation<Vec<T>> {
    /// Collapses a list result, treating `NoMatch` as the empty list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Ready { result } => result,
            Self::NeedsInput { .. } | Self::NoMatch => Vec::new(),
        }
    }
}

impl Evaluation<Vec<String>> {
    /// Bullet-list rendering: a lone prompt line, or the feedback lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::NeedsInput { prompt } => vec![prompt],
            Self::NoMatch => Vec::new(),
            Self::Ready { result } => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_status_tag() {
        let needs: Evaluation<Vec<String>> = Evaluation::needs_input("Tell us more.");
        assert_eq!(
            serde_json::to_value(&needs).expect("serializes"),
            json!({ "status": "needs_input", "prompt": "Tell us more." })
        );

        let ready = Evaluation::ready("ok".to_string());
        assert_eq!(
            serde_json::to_value(&ready).expect("serializes"),
            json!({ "status": "ready", "result": "ok" })
        );

        let none: Evaluation<Vec<String>> = Evaluation::NoMatch;
        assert_eq!(
            serde_json::to_value(&none).expect("serializes"),
            json!({ "status": "no_match" })
        );
    }

    #[test]
    fn label_matches_serialized_tag() {
        let outcomes: [Evaluation<String>; 3] = [
            Evaluation::needs_input("Tell us more."),
            Evaluation::NoMatch,
            Evaluation::ready("ok".to_string()),
        ];

        for outcome in outcomes {
            let tagged = serde_json::to_value(&outcome).expect("serializes");
            assert_eq!(tagged["status"], outcome.label());
        }
    }

    #[test]
    fn prompt_becomes_single_line() {
        let needs: Evaluation<Vec<String>> = Evaluation::needs_input("Paste it.");
        assert_eq!(needs.into_lines(), vec!["Paste it.".to_string()]);
    }

    #[test]
    fn no_match_collapses_to_empty_items() {
        let none: Evaluation<Vec<u8>> = Evaluation::NoMatch;
        assert!(none.into_items().is_empty());
    }
}
