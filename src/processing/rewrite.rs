//! Rewrite `address <n> <ip> wildcard <wc>` lines into `<ip>/<len>` form.

use super::mask::wildcard_to_prefix_len;
use crate::models::AddressLine;

/// Rewrite one config line.
///
/// Matching lines come back as `<prefix><ip>/<len><suffix>\n`. Anything else,
/// including a matching line whose wildcard cannot be parsed, is returned
/// unchanged with its original terminator.
pub fn rewrite_line(line: &str) -> String {
    let Some(address) = AddressLine::parse(line) else {
        return line.to_string();
    };
    match wildcard_to_prefix_len(&address.wildcard) {
        Ok(prefix_len) => address.to_cidr_line(prefix_len),
        Err(e) => {
            log::warn!("Keeping line as-is, {e}: {}", line.trim_end());
            line.to_string()
        }
    }
}

/// Rewrite a whole text, line by line.
pub fn rewrite_text(text: &str) -> String {
    text.split_inclusive('\n').map(rewrite_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_line() {
        assert_eq!(
            rewrite_line("  address 10 1.2.3.4 wildcard 0.0.0.7 description ABC\n"),
            "  address 10 1.2.3.4/29 description ABC\n"
        );
        assert_eq!(
            rewrite_line(" address 0 10.1.0.0 wildcard 0.0.255.255"),
            " address 0 10.1.0.0/16\n"
        );
        assert_eq!(
            rewrite_line(" address 1 8.8.8.8 wildcard 0 description GOOG\n"),
            " address 1 8.8.8.8/32 description GOOG\n"
        );
    }

    #[test]
    fn test_rewrite_line_passthrough() {
        for line in [
            "ip address-set internationalgn type object\n",
            "#\n",
            "#",
            " address 2 1.2.3.0/24 description CT\n",
            " address 3 1.2.3.0 wildcard 0.0.0.x description CT\r\n",
            "",
        ] {
            assert_eq!(rewrite_line(line), line);
            assert_eq!(rewrite_line(&rewrite_line(line)), rewrite_line(line));
        }
    }

    #[test]
    fn test_rewrite_line_keeps_carriage_return_in_suffix() {
        assert_eq!(
            rewrite_line(" address 4 1.2.3.0 wildcard 0.0.0.255 description CT\r\n"),
            " address 4 1.2.3.0/24 description CT\r\n"
        );
    }

    #[test]
    fn test_rewrite_text() {
        let text = "ip address-set internationalgn type object\n\
                    \x20address 0 1.2.3.0 wildcard 0.0.0.255 description CT\n\
                    #";
        assert_eq!(
            rewrite_text(text),
            "ip address-set internationalgn type object\n\
             \x20address 0 1.2.3.0/24 description CT\n\
             #"
        );
    }
}
