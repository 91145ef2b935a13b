//! Anchored download-count extraction from a package page.
//!
//! The page is third-party HTML, so matching stays deliberately narrow: the
//! literal label `Total downloads` followed within a bounded distance by an
//! `<h3>` heading. The heading's `title` attribute carries the exact count
//! when the visible text is abbreviated (e.g. "1.2k"), so the attribute wins
//! and the text is the fallback.

use regex::Regex;

use crate::error::{PullShieldError, Result};

/// Maximum distance (in characters) between the label and its heading.
const LABEL_TO_HEADING_SPAN: usize = 500;

/// Per-document extraction result.
///
/// A pattern miss is represented as both fields `None`; it is data, not an
/// error. Fetch failures never reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Human-readable count as displayed on the page (e.g. "1,234").
    pub formatted: Option<String>,
    /// Machine-parseable count, digits only.
    pub raw: Option<u64>,
}

/// Compiled extraction pattern.
///
/// Holds the two regexes so compilation happens once at boot and never
/// panics; construction failures surface as `PullShieldError::Internal`.
#[derive(Debug)]
pub struct StatsExtractor {
    anchor: Regex,
    title: Regex,
}

impl StatsExtractor {
    pub fn new() -> Result<Self> {
        let anchor = Regex::new(&format!(
            r#"(?is)Total downloads.{{0,{LABEL_TO_HEADING_SPAN}}}?<h3\b([^>]*)>([^<]+)</h3>"#
        ))
        .map_err(|e| PullShieldError::Internal(format!("anchor pattern: {e}")))?;
        let title = Regex::new(r#"(?i)\btitle="([\d,]+)""#)
            .map_err(|e| PullShieldError::Internal(format!("title pattern: {e}")))?;
        Ok(Self { anchor, title })
    }

    /// Scan one HTML document for the download count.
    pub fn extract(&self, html: &str) -> PageStats {
        let Some(caps) = self.anchor.captures(html) else {
            return PageStats::default();
        };

        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let raw_from_title = self
            .title
            .captures(attrs)
            .and_then(|c| c.get(1))
            .map(|m| digits_of(m.as_str()));
        let raw_from_text = digits_of(text);

        // Attribute wins when it yields digits; visible text is the fallback.
        let raw = raw_from_title
            .filter(|d| !d.is_empty())
            .or_else(|| (!raw_from_text.is_empty()).then_some(raw_from_text))
            .and_then(|d| d.parse::<u64>().ok());

        let formatted = {
            let t = text.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        PageStats { formatted, raw }
    }
}

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
