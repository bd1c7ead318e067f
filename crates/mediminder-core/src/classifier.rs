//! Keyword-based intent classification for assistant replies.
//!
//! Input is lower-cased and checked against an ordered rule table using plain
//! substring containment. The first rule with any matching keyword wins; later
//! rules are never consulted. Matching is not word-aware, so "heartbreak"
//! triggers the heart rule.

use serde::Serialize;

use crate::Category;

/// Health topic a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Diabetes,
    Heart,
    Headache,
    Medication,
    SideEffects,
    Exercise,
    Nutrition,
    /// Nothing matched.
    General,
}

/// One entry in the rule table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub topic: Topic,
    /// Lower-case trigger substrings.
    pub keywords: &'static [&'static str],
    pub category: Category,
    pub response: &'static str,
}

impl ClassificationRule {
    /// Check the rule against already lower-cased input.
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }

    fn intent(&self) -> Intent {
        Intent {
            topic: self.topic,
            text: self.response,
            category: self.category,
        }
    }
}

/// The classifier's answer for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub topic: Topic,
    pub text: &'static str,
    pub category: Category,
}

/// Rules in priority order.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        topic: Topic::Diabetes,
        keywords: &["diabetes", "blood sugar"],
        category: Category::Suggestion,
        response: "For diabetes management: 📊 Monitor your blood sugar regularly, 💊 take medications as prescribed, 🥗 maintain a balanced diet with controlled carbs, and 🚶‍♂️ exercise regularly. Would you like specific meal suggestions or exercise routines?",
    },
    ClassificationRule {
        topic: Topic::Heart,
        keywords: &["heart", "cardiac", "chest pain"],
        category: Category::Warning,
        response: "⚠️ For heart-related concerns: Take prescribed medications on time, avoid excessive salt, exercise moderately, and manage stress. If you're experiencing chest pain, shortness of breath, or unusual symptoms, seek immediate medical attention!",
    },
    ClassificationRule {
        topic: Topic::Headache,
        keywords: &["headache", "migraine"],
        category: Category::Suggestion,
        response: "For headache relief: 💧 Stay hydrated, 😴 ensure adequate sleep, 🧘‍♀️ practice relaxation techniques, and 💊 take pain relievers as needed. Track triggers like stress, certain foods, or lack of sleep.",
    },
    ClassificationRule {
        topic: Topic::Medication,
        keywords: &["medication", "pill", "medicine"],
        category: Category::Info,
        response: "Medication reminders: 📅 Set consistent daily schedules, 📱 use apps like this one, 💊 organize pills in weekly containers, and 📝 keep a medication diary. Never skip doses without consulting your doctor!",
    },
    ClassificationRule {
        topic: Topic::SideEffects,
        keywords: &["side effects", "reaction"],
        category: Category::Warning,
        response: "⚠️ If experiencing side effects: Document symptoms, note timing with medications, contact your healthcare provider, and never stop medications abruptly without medical guidance. Serious reactions require immediate medical attention!",
    },
    ClassificationRule {
        topic: Topic::Exercise,
        keywords: &["exercise", "workout"],
        category: Category::Suggestion,
        response: "🏃‍♂️ Safe exercise tips: Start slowly, listen to your body, stay hydrated, and consult your doctor about exercise limitations. Activities like walking, swimming, and gentle yoga are often great starting points!",
    },
    ClassificationRule {
        topic: Topic::Nutrition,
        keywords: &["diet", "nutrition", "food"],
        category: Category::Suggestion,
        response: "🥗 Nutrition advice: Focus on whole foods, plenty of vegetables, lean proteins, and whole grains. Limit processed foods, excessive sugar, and sodium. Consider consulting a nutritionist for personalized meal plans!",
    },
];

/// Reply used when no rule matches.
pub const FALLBACK: Intent = Intent {
    topic: Topic::General,
    text: "I'm here to help with health-related questions! I can provide information about medications, symptoms, diet, exercise, and general wellness. What specific health topic would you like to discuss?",
    category: Category::Info,
};

/// Suggested prompts offered next to the input box.
pub const QUICK_QUESTIONS: &[&str] = &[
    "How do I manage diabetes?",
    "What are heart-healthy foods?",
    "Medication side effects help",
    "Safe exercise routines",
    "Headache relief tips",
];

/// Ordered-rule classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: &'static [ClassificationRule],
    fallback: Intent,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            rules: RULES,
            fallback: FALLBACK,
        }
    }

    /// Map free text to a reply. Total: never fails.
    pub fn classify(&self, input: &str) -> Intent {
        let normalized = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(ClassificationRule::intent)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        self.rules
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the built-in rule table.
pub fn classify(input: &str) -> Intent {
    IntentClassifier::new().classify(input)
}
