//! Root manifest assembly.
//!
//! The root manifest is plain text with a single anchor line. Assembly is a
//! two-phase transform:
//!
//! 1. **Locate**: find the one line containing [`MEMBERS_MARKER`]; zero or
//!    several matches is a hard error.
//! 2. **Substitute**: replace that line with one `"<path>",` entry per
//!    member, each indented like the marker line.
//!
//! Every other byte of the template (shared dependency tables, comments,
//! `\r\n` line endings) is copied through untouched. No template language is
//! involved.

use crate::domain::error::DomainError;

/// Anchor line for workspace member injection.
pub const MEMBERS_MARKER: &str = "# @gantry:members";

/// A root manifest template that has not been assembled yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestTemplate {
    text: String,
}

/// Position of the validated marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLocation {
    /// Zero-based line index.
    pub line: usize,
}

impl ManifestTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of lines carrying the marker.
    pub fn marker_count(&self) -> usize {
        self.text
            .split_inclusive('\n')
            .filter(|line| line.contains(MEMBERS_MARKER))
            .count()
    }

    /// Phase one: find the single marker line.
    pub fn locate(&self) -> Result<MarkerLocation, DomainError> {
        let mut found = self
            .text
            .split_inclusive('\n')
            .enumerate()
            .filter(|(_, line)| line.contains(MEMBERS_MARKER))
            .map(|(index, _)| index);

        match (found.next(), found.count()) {
            (None, _) => Err(DomainError::MarkerMissing {
                marker: MEMBERS_MARKER,
            }),
            (Some(line), 0) => Ok(MarkerLocation { line }),
            (Some(_), rest) => Err(DomainError::MarkerAmbiguous {
                marker: MEMBERS_MARKER,
                count: rest + 1,
            }),
        }
    }

    /// Phase two: replace the located marker line with member entries.
    pub fn substitute(&self, location: MarkerLocation, members: &[String]) -> String {
        let mut out = String::with_capacity(self.text.len() + members.len() * 32);

        for (index, line) in self.text.split_inclusive('\n').enumerate() {
            if index != location.line {
                out.push_str(line);
                continue;
            }

            let eol = line_ending(line);
            let indent: String = line.chars().take_while(|c| *c == ' ' || *c == '\t').collect();
            let separator = if eol.is_empty() { "\n" } else { eol };

            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                out.push_str(&indent);
                out.push('"');
                out.push_str(&member.replace('"', "\\\""));
                out.push_str("\",");
            }
            if !members.is_empty() {
                out.push_str(eol);
            }
        }

        out
    }
}

/// Assemble the final manifest text.
///
/// Fails with a template error when the marker is missing or repeated; in
/// that case nothing is produced.
pub fn assemble(template: &ManifestTemplate, members: &[String]) -> Result<String, DomainError> {
    let location = template.locate()?;
    Ok(template.substitute(location, members))
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
