//! Canned question answering for the demo.
//!
//! A fixed ordered rule table over keyword predicates; the first matching
//! rule wins and a fixed fallback closes the list. Pure lookup, no state.
//! The cosmetic "thinking" delay lives at the API layer.

/// One canned rule. A rule matches when any of its keywords appears in the
/// lowercased question.
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Ordered rule table; first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["dates", "mahakumbh"],
        response: "Simhastha 2028: Dates will be published by organizers. (Demo answer)",
    },
    Rule {
        keywords: &["toilet", "washroom"],
        response: "Nearest toilets: Ghat A (200m), Ghat B (350m). Shows on map in prototype.",
    },
    Rule {
        keywords: &["medical", "hospital"],
        response: "Medical first aid tents available at Main Gate and Sector 4. SOS sends exact location to Control Room.",
    },
    Rule {
        keywords: &["darshan"],
        response: "Live darshan link is available in the app (demo placeholder).",
    },
];

/// Answer returned when no rule matches.
pub const FALLBACK: &str =
    "Sorry — demo answer: please refer to the information desk or the app's live help.";

/// Looks up the canned answer for a question. Case-insensitive substring
/// matching against the rule table, in order.
pub fn answer(question: &str) -> &'static str {
    let q = question.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| q.contains(keyword)) {
            return rule.response;
        }
    }
    FALLBACK
}
