//! Heuristic named-entity extraction.
//!
//! Produces (span, label) pairs in order of appearance. The dispatcher
//! computes entities on every non-greeting query for observability; they
//! do not influence the response.

use once_cell::sync::Lazy;
use regex::Regex;

/// Entity category, in the style of NER tag sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Date,
    Time,
    Quantity,
    Technology,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORG",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Technology => "TECH",
        }
    }
}

/// A recognized span with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

static TITLED_PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").unwrap()
});

// Two or three consecutive capitalized words are treated as a name.
static CAPITALIZED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})\b").unwrap());

static ORGANIZATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:University of\s+[A-Z][a-z]+|Ministry of\s+[A-Z][a-z]+(?:\s+(?:and|of)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)?|[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Inc\.|Corp\.|LLC|Ltd\.|Co\.|Corporation|Hospital))",
    )
    .unwrap()
});

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?,?\s*\d{4}|\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2})\b",
    )
    .unwrap()
});

static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}:\d{2}\s*(?:AM|PM|am|pm)?\b").unwrap());

static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\$[\d,]+(?:\.\d{2})?\s*(?:million|billion|M|B|K)?|\b\d+(?:,\d{3})*(?:\.\d+)?\s*(?:percent|years?|months?|days?|hours?|people|users|staff|members)\b|\b\d+(?:,\d{3})*(?:\.\d+)?%",
    )
    .unwrap()
});

// Known technology names in the biography domain.
static TECH_KEYWORDS: &[&str] = &[
    "Python", "JavaScript", "SQL", "Rust", "Java", "TensorFlow", "PyTorch",
    "Keras", "Scikit-learn", "XGBoost", "OpenCV", "NLTK", "NumPy", "Pandas",
    "AWS", "IBM", "GitHub", "Docker", "Linux", "Agile", "GPT-4",
];

/// Extract labeled entities from the text, ordered by position.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    // (start, end, text, label); later sorted by start offset.
    let mut spans: Vec<(usize, usize, String, EntityLabel)> = Vec::new();

    for cap in TITLED_PERSON.captures_iter(text) {
        if let Some(m) = cap.get(1) {
            spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Person));
        }
    }
    for m in ORGANIZATION.find_iter(text) {
        spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Organization));
    }
    for m in DATE.find_iter(text) {
        spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Date));
    }
    for m in TIME.find_iter(text) {
        spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Time));
    }
    for m in QUANTITY.find_iter(text) {
        spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Quantity));
    }
    for &tech in TECH_KEYWORDS {
        let pattern = format!(r"\b{}\b", regex::escape(tech));
        if let Ok(re) = Regex::new(&pattern) {
            for m in re.find_iter(text) {
                spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Technology));
            }
        }
    }
    // Capitalized names last: skip spans already covered by a stronger
    // label, and skip matches at the very start of the text (likely a
    // sentence opener, not a name).
    for m in CAPITALIZED_NAME.find_iter(text) {
        if m.start() > 2
            && !spans
                .iter()
                .any(|(s, e, _, _)| m.start() < *e && *s < m.end())
        {
            spans.push((m.start(), m.end(), m.as_str().to_string(), EntityLabel::Person));
        }
    }

    spans.sort_by_key(|(start, _, _, _)| *start);
    spans.dedup_by(|a, b| a.0 == b.0 && a.2 == b.2);
    spans
        .into_iter()
        .map(|(_, _, text, label)| Entity { text, label })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of<'a>(entities: &'a [Entity], label: EntityLabel) -> Vec<&'a str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_person_with_title() {
        let entities = extract_entities("I spoke with Dr. Jane Smith yesterday.");
        assert!(labels_of(&entities, EntityLabel::Person).contains(&"Jane Smith"));
    }

    #[test]
    fn test_full_name() {
        let entities = extract_entities("My name is Simeon Kengere Osiemo.");
        assert!(labels_of(&entities, EntityLabel::Person)
            .iter()
            .any(|t| t.contains("Simeon")));
    }

    #[test]
    fn test_organization() {
        let entities = extract_entities("I studied at the University of Nairobi and worked for Fujita Corporation.");
        let orgs = labels_of(&entities, EntityLabel::Organization);
        assert!(orgs.contains(&"University of Nairobi"));
        assert!(orgs.contains(&"Fujita Corporation"));
    }

    #[test]
    fn test_technology() {
        let entities = extract_entities("I build models in Python with TensorFlow.");
        let techs = labels_of(&entities, EntityLabel::Technology);
        assert!(techs.contains(&"Python"));
        assert!(techs.contains(&"TensorFlow"));
    }

    #[test]
    fn test_dates_and_quantities() {
        let entities = extract_entities("Started on January 15, 2025 with 500 users.");
        assert!(!labels_of(&entities, EntityLabel::Date).is_empty());
        assert!(!labels_of(&entities, EntityLabel::Quantity).is_empty());
    }

    #[test]
    fn test_ordered_by_position() {
        let entities = extract_entities("I used Python at Fujita Corporation in Nairobi.");
        let positions: Vec<usize> = entities
            .iter()
            .map(|e| "I used Python at Fujita Corporation in Nairobi.".find(&e.text).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(extract_entities("tell me about yourself").is_empty());
    }
}
