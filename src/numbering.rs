//! Numeric IEEE-style citations for AsciiDoc documents.
//!
//! Authoring convention:
//! - body text cites with cross references, `<<key>>`, or comma-separated
//!   runs like `<<key1>>, <<key2>>`;
//! - each entry of the `== References` section starts with an anchor,
//!   `* [[key]] Author, Title, ...`.
//!
//! Keys are numbered in the order their anchors first appear in the
//! references section. Cross-reference runs become `[n]` / `[n1, n2]` and
//! anchors become `[n]`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::sections::split_sections;

/// Reference-list anchor: `[[key]]`.
static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid anchor regex"));

/// One or more `<<key>>` separated by commas and optional whitespace.
static XREF_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<<[^>]+>>(?:\s*,\s*<<[^>]+>>)*").expect("valid cross-reference run regex")
});

/// A single `<<key>>` inside a run, capturing the trimmed key.
static XREF_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<<\s*([^>]+?)\s*>>").expect("valid cross-reference key regex"));

/// Reference keys in order of first definition, with their citation numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceKeys {
    ordered: Vec<String>,
    numbers: HashMap<String, usize>,
}

impl ReferenceKeys {
    /// Collects keys from the anchors of a references block.
    ///
    /// Only the first anchor of each line counts. A key gets the next number
    /// the first time it is seen; repeated anchors keep their first number.
    pub fn collect(references: &str) -> Self {
        let mut keys = ReferenceKeys::default();
        for line in references.lines() {
            if let Some(cap) = ANCHOR_RE.captures(line) {
                keys.insert(cap[1].trim());
            }
        }
        debug!(count = keys.len(), "collected reference keys");
        keys
    }

    fn insert(&mut self, key: &str) {
        if self.numbers.contains_key(key) {
            return;
        }
        self.ordered.push(key.to_string());
        self.numbers.insert(key.to_string(), self.ordered.len());
    }

    /// Returns the 1-based citation number of `key`.
    pub fn number(&self, key: &str) -> Option<usize> {
        self.numbers.get(key).copied()
    }

    /// Keys in numbering order.
    pub fn keys(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Replaces `<<key>>` runs in `body` with bracketed citation numbers.
///
/// Keys keep their order within a run, so `<<b>>, <<a>>` becomes `[2, 1]`.
/// A run mentioning any unknown key is left exactly as written.
///
/// # Examples
///
/// ```
/// use citation_fixups::{replace_citations, ReferenceKeys};
///
/// let keys = ReferenceKeys::collect("* [[a]] A\n* [[b]] B\n* [[c]] C\n");
/// let body = "One <<a>>, many <<b>>, <<c>>, unknown <<a>>, <<zzz>>.";
/// assert_eq!(
///     replace_citations(body, &keys),
///     "One [1], many [2, 3], unknown <<a>>, <<zzz>>."
/// );
/// ```
pub fn replace_citations(body: &str, keys: &ReferenceKeys) -> String {
    XREF_RUN_RE
        .replace_all(body, |run: &Captures| {
            let run = &run[0];
            let numbers: Option<Vec<String>> = XREF_KEY_RE
                .captures_iter(run)
                .map(|cap| keys.number(&cap[1]).map(|n| n.to_string()))
                .collect();

            match numbers {
                Some(numbers) => format!("[{}]", numbers.join(", ")),
                None => {
                    debug!(run, "leaving citation run with unknown key unchanged");
                    run.to_string()
                }
            }
        })
        .into_owned()
}

/// Replaces the first anchor of each references line with `[n]`.
///
/// Everything else, including line endings, is copied unchanged.
pub fn renumber_references(references: &str, keys: &ReferenceKeys) -> String {
    let mut out = String::with_capacity(references.len());

    for line in references.split_inclusive('\n') {
        let numbered = ANCHOR_RE.captures(line).and_then(|cap| {
            let anchor = cap.get(0)?;
            let number = keys.number(cap[1].trim())?;
            Some((anchor.start(), anchor.end(), number))
        });

        match numbered {
            Some((start, end, number)) => {
                out.push_str(&line[..start]);
                out.push_str(&format!("[{}]", number));
                out.push_str(&line[end..]);
            }
            None => out.push_str(line),
        }
    }

    out
}

/// Numbers the citations of a whole document.
///
/// Documents without a `== References` heading are returned unchanged.
/// Text after the references section is never rewritten.
///
/// # Examples
///
/// ```
/// use citation_fixups::number_citations;
///
/// let doc = "See <<b>>, <<a>>.\n\n== References\n\n* [[a]] Alpha\n* [[b]] Beta\n";
/// assert_eq!(
///     number_citations(doc),
///     "See [2, 1].\n\n== References\n\n* [1] Alpha\n* [2] Beta\n"
/// );
/// ```
pub fn number_citations(text: &str) -> String {
    let Some(sections) = split_sections(text) else {
        debug!("no references section, passing document through");
        return text.to_string();
    };

    let keys = ReferenceKeys::collect(sections.references);

    let mut out = replace_citations(sections.body, &keys);
    out.push_str(&renumber_references(sections.references, &keys));
    out.push_str(sections.trailing);
    out
}
