//! Routing of a committed line.
//!
//! The first whitespace-delimited token decides where a line goes. Han
//! text is a question for the assistant, an all-caps token is a ticker
//! symbol, and anything else must name a registered command.

use super::registry::CommandRegistry;

/// Where a committed line should go. Derived per line, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Literal { name: String, args: Vec<String> },
    StockSymbol(String),
    NaturalLanguageQuery(String),
    Empty,
    Unknown(String),
}

/// Commands whose arguments may legitimately be Han text.
const HAN_EXEMPT: &str = "define";

const HAN_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DB5),
    (0x4E00, 0x9FD5),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
];

pub fn is_han(ch: char) -> bool {
    let code = ch as u32;
    HAN_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code))
}

pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// A token reads as a ticker when upper-casing leaves it unchanged and it
/// has at least one upper-case letter.
fn is_symbol(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && token.to_uppercase() == token
}

pub fn classify(line: &str, registry: &CommandRegistry) -> RouteDecision {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return RouteDecision::Empty;
    };

    if head != HAN_EXEMPT && contains_han(head) {
        return RouteDecision::NaturalLanguageQuery(head.to_string());
    }
    if is_symbol(head) {
        return RouteDecision::StockSymbol(head.to_string());
    }
    if registry.contains(head) {
        return RouteDecision::Literal {
            name: head.to_string(),
            args: tokens.map(str::to_string).collect(),
        };
    }
    RouteDecision::Unknown(head.to_string())
}
