//! Splitting an AsciiDoc document around its `== References` section.

use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCES_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^== References\s*$").expect("valid references heading regex"));

/// A level-1 section title: `==`, whitespace, then something that is not
/// another `=` (which would make it a deeper heading).
static SECTION_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^==\s+[^=\s].*$").expect("valid section heading regex"));

/// The three consecutive parts of a document that has a references section.
///
/// Concatenating `body`, `references` and `trailing` yields the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Everything before the `== References` heading.
    pub body: &'a str,
    /// The heading itself up to, but excluding, the next level-1 heading.
    pub references: &'a str,
    /// The next level-1 heading and everything after it.
    pub trailing: &'a str,
}

/// Splits `text` into body, references block and trailing block.
///
/// Returns `None` when the document has no `== References` heading.
///
/// # Examples
///
/// ```
/// use citation_fixups::split_sections;
///
/// let doc = "Intro\n== References\n* [[a]] A\n== Appendix\nMore\n";
/// let sections = split_sections(doc).unwrap();
/// assert_eq!(sections.body, "Intro\n");
/// assert_eq!(sections.references, "== References\n* [[a]] A\n");
/// assert_eq!(sections.trailing, "== Appendix\nMore\n");
///
/// assert!(split_sections("No references here.\n").is_none());
/// ```
pub fn split_sections(text: &str) -> Option<Sections<'_>> {
    let start = REFERENCES_HEADING_RE.find(text)?.start();

    // Skip the first byte so the references heading cannot match itself.
    let search_from = start + 1;
    let end = SECTION_HEADING_RE
        .find(&text[search_from..])
        .map_or(text.len(), |m| search_from + m.start());

    Some(Sections {
        body: &text[..start],
        references: &text[start..end],
        trailing: &text[end..],
    })
}
