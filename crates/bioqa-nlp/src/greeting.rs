//! Greeting short-circuit.
//!
//! An ordered list of (pattern, template) pairs tried against the raw
//! input; the first match wins and bypasses the rest of the pipeline.

use regex::Regex;

/// Placeholder in a template resolved from the pattern's capture group.
const TIME_OF_DAY: &str = "{time_of_day}";

struct GreetingRule {
    pattern: Regex,
    template: &'static str,
}

/// Ordered greeting matcher. Evaluation order is fixed and explicit; the
/// rules never depend on map iteration order.
pub struct GreetingResponder {
    rules: Vec<GreetingRule>,
}

impl GreetingResponder {
    pub fn new() -> Self {
        let rules = vec![
            GreetingRule {
                pattern: Regex::new(r"(?i)\b(hi|hey|hello)\b").unwrap(),
                template: "Hello! I'm Simeon's AI assistant. How can I help you with information about my background or skills? You can choose from any of the sample questions below",
            },
            GreetingRule {
                pattern: Regex::new(r"(?i)\bgreetings\b").unwrap(),
                template: "Greetings! I'm here to provide information about Simeon. What would you like to know about me? Feel free to select one of the sample questions below",
            },
            GreetingRule {
                pattern: Regex::new(r"(?i)\bgood (morning|afternoon|evening)\b").unwrap(),
                template: "Good {time_of_day}! I am Simeon's chatbot. Feel free to ask me any question regarding my professional or education background. Or select one of the sample questions below",
            },
        ];
        Self { rules }
    }

    /// Return the greeting response for the input, or `None` when the
    /// input is not a greeting and the pipeline should continue.
    pub fn respond(&self, input: &str) -> Option<String> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(input) {
                if rule.template.contains(TIME_OF_DAY) {
                    let word = caps
                        .get(1)
                        .map(|m| m.as_str().to_lowercase())
                        .unwrap_or_default();
                    return Some(rule.template.replace(TIME_OF_DAY, &word));
                }
                return Some(rule.template.to_string());
            }
        }
        None
    }
}

impl Default for GreetingResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hi_there() {
        let responder = GreetingResponder::new();
        let response = responder.respond("Hi there").unwrap();
        assert!(response.starts_with("Hello! I'm Simeon's AI assistant"));
    }

    #[test]
    fn test_case_insensitive() {
        let responder = GreetingResponder::new();
        assert!(responder.respond("HELLO").is_some());
        assert!(responder.respond("Greetings, friend").is_some());
    }

    #[test]
    fn test_time_of_day_interpolation() {
        let responder = GreetingResponder::new();
        let response = responder.respond("Good morning").unwrap();
        assert!(response.contains("morning"));
        assert!(!response.contains("{time_of_day}"));

        let response = responder.respond("Good EVENING").unwrap();
        assert!(response.contains("evening"));
    }

    #[test]
    fn test_first_rule_wins() {
        // "hello" and "greetings" both present; rule order decides.
        let responder = GreetingResponder::new();
        let response = responder.respond("hello and greetings").unwrap();
        assert!(response.starts_with("Hello!"));
    }

    #[test]
    fn test_word_boundary() {
        let responder = GreetingResponder::new();
        // "hi" inside a word is not a greeting.
        assert!(responder.respond("architecture of the chip").is_none());
        assert!(responder.respond("What is your full name?").is_none());
    }
}
