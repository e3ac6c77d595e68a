//! Shared test documents and helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A small paper: body with single and grouped cross references, a
/// references section with a repeated anchor, and an appendix after it.
pub const PAPER: &str = "\
= Agents and Determinism

== Introduction

Large models are stochastic <<brown2020>>.
Sampling strategies vary <<holtzman2020>>, <<brown2020>>.
Tooling helps <<yao2023>>, <<holtzman2020>>, <<brown2020>>.

== References

* [[brown2020]] Brown et al., Language Models are Few-Shot Learners, 2020.
* [[holtzman2020]] Holtzman et al., The Curious Case of Neural Text Degeneration, 2020.
* [[yao2023]] Yao et al., ReAct, 2023.
* [[holtzman2020]] Duplicate entry left by a merge.

== Appendix

Raw notes mention <<brown2020>>.
";

/// [`PAPER`] after numbering.
pub const PAPER_NUMBERED: &str = "\
= Agents and Determinism

== Introduction

Large models are stochastic [1].
Sampling strategies vary [2, 1].
Tooling helps [3, 2, 1].

== References

* [1] Brown et al., Language Models are Few-Shot Learners, 2020.
* [2] Holtzman et al., The Curious Case of Neural Text Degeneration, 2020.
* [3] Yao et al., ReAct, 2023.
* [2] Duplicate entry left by a merge.

== Appendix

Raw notes mention <<brown2020>>.
";

/// LaTeX as emitted by pandoc from DocBook, with escaped citations.
pub const ESCAPED_TEX: &str = r"\section{Introduction}
Agents are brittle \textbackslash cite\{brown2020\}.
Others agree \textbackslash\cite{yao2023,holtzman2020}.
Real citations survive \cite{kept}.
";

/// [`ESCAPED_TEX`] after fixing.
pub const FIXED_TEX: &str = r"\section{Introduction}
Agents are brittle \cite{brown2020}.
Others agree \cite{yao2023,holtzman2020}.
Real citations survive \cite{kept}.
";

/// Helper to create a temporary file with content.
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
