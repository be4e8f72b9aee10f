//! Router configuration stanza model.

use std::fmt;

/// Token that opens an address-set stanza in a router config dump.
pub const STANZA_OPEN_TOKEN: &str = "ip address-set internationalgn";

/// A line holding only this marker closes the current stanza.
pub const STANZA_END_MARKER: &str = "#";

/// A contiguous block of raw config lines, from the open-token line up to and
/// including the `#` delimiter line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigStanza {
    /// Raw lines, each keeping its own line terminator.
    pub lines: Vec<String>,
    /// False when the stanza was force-closed by a new open token or by the end of input.
    pub terminated: bool,
}

impl ConfigStanza {
    /// Start a new stanza with its opening line.
    pub fn open(first_line: &str) -> ConfigStanza {
        ConfigStanza {
            lines: vec![first_line.to_string()],
            terminated: false,
        }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// The first (opening) line with surrounding whitespace removed.
    pub fn header(&self) -> &str {
        self.lines.first().map(|l| l.trim()).unwrap_or("")
    }

    /// Concatenated raw text of the stanza.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

impl fmt::Display for ConfigStanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' ({} lines{})",
            self.header(),
            self.lines.len(),
            if self.terminated { "" } else { ", unterminated" }
        )
    }
}
