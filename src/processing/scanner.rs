//! Address-set stanza extraction from raw router config text.

use crate::models::{ConfigStanza, STANZA_END_MARKER};

/// Cut every stanza opened by `open_token` out of `lines`.
///
/// A stanza runs from a line whose trimmed text starts with `open_token`
/// through the next line that is only `#`. A new open line while still inside
/// a stanza closes the current one without a delimiter, and a stanza still
/// open at the end of input is returned as the last element.
///
/// Lines should keep their terminators (e.g. from `str::split_inclusive('\n')`)
/// so that [`ConfigStanza::text`] reproduces the source.
pub fn extract_stanzas<I, S>(lines: I, open_token: &str) -> Vec<ConfigStanza>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stanzas = Vec::new();
    let mut current: Option<ConfigStanza> = None;

    for line in lines {
        let line = line.as_ref();
        let stripped = line.trim();

        if stripped.starts_with(open_token) {
            if let Some(open) = current.take() {
                log::debug!("stanza {open} closed by next open token");
                stanzas.push(open);
            }
            current = Some(ConfigStanza::open(line));
            continue;
        }

        if let Some(stanza) = current.as_mut() {
            stanza.push(line);
            if stripped == STANZA_END_MARKER {
                stanza.terminated = true;
                if let Some(done) = current.take() {
                    log::trace!("stanza {done} complete");
                    stanzas.push(done);
                }
            }
        }
    }

    if let Some(open) = current {
        log::debug!("stanza {open} closed by end of input");
        stanzas.push(open);
    }

    stanzas
}
