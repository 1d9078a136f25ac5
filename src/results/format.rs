//! Presentation helpers derived from the upstream total

use serde::{Deserialize, Serialize};

/// Wording hints for rendering a count ("1 result" vs "All 12 results")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plural {
    pub suffix: String,
    pub determiner: String,
}

impl Plural {
    pub fn for_count(total: u64) -> Self {
        if total == 1 {
            Self {
                suffix: String::new(),
                determiner: String::new(),
            }
        } else {
            Self {
                suffix: "s".to_string(),
                determiner: "All ".to_string(),
            }
        }
    }
}

/// Render a count with a comma every three digits
pub fn format_total(total: u64) -> String {
    let digits = total.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
