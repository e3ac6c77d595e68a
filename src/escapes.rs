//! Repair of escaped citation macros.
//!
//! The DocBook -> pandoc -> LaTeX pipeline turns a literal `\cite{key}` into
//! `\textbackslash cite\{key\}` (or `\textbackslash\cite{key}`), which BibTeX
//! never sees. This module rewrites those back into plain `\cite{key}`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `\textbackslash cite{key}`, braces optionally escaped.
static SPACED_ESCAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\textbackslash\s+cite\\?\{([^}]+)\\?\}").expect("valid spaced escape regex")
});

/// `\textbackslash\cite{key}`, braces optionally escaped.
static GLUED_ESCAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\textbackslash\\cite\\?\{([^}]+)\\?\}").expect("valid glued escape regex")
});

/// `\cite{key\}` left over once the escape prefix is gone.
static STRAY_BACKSLASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\cite\{([^}]*)\\\}").expect("valid stray backslash regex")
});

const CITE_REPLACEMENT: &str = r"\cite{${1}}";

/// Counts the escaped citation macros that [`fix_cites`] would rewrite.
pub fn count_escaped_cites(text: &str) -> usize {
    SPACED_ESCAPE_RE.find_iter(text).count() + GLUED_ESCAPE_RE.find_iter(text).count()
}

/// Rewrites escaped citation macros into `\cite{key}`.
///
/// Both escape spellings are handled, with or without escaped braces, and a
/// stray backslash before the closing brace is removed afterwards. Text
/// without any of these forms is returned unchanged.
///
/// # Examples
///
/// ```
/// use citation_fixups::fix_cites;
///
/// let fixed = fix_cites(r"as shown in \textbackslash cite\{knuth84\}.");
/// assert_eq!(fixed, r"as shown in \cite{knuth84}.");
/// ```
pub fn fix_cites(text: &str) -> String {
    let rewrites = count_escaped_cites(text);

    let text = SPACED_ESCAPE_RE.replace_all(text, CITE_REPLACEMENT);
    let text = GLUED_ESCAPE_RE.replace_all(&text, CITE_REPLACEMENT);
    let text = STRAY_BACKSLASH_RE.replace_all(&text, CITE_REPLACEMENT);

    debug!(rewrites, "rewrote escaped citation macros");
    text.into_owned()
}
