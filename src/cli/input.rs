//! Message input from stdin

use std::io::{self, BufRead};

/// Read one message per line.
///
/// Line endings (`\n` or `\r\n`) are stripped. Lines that are not valid
/// UTF-8 are decoded lossily so one bad line does not drop the rest.
pub fn read_messages<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut messages = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        messages.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines() {
        let messages = read_messages(&b"[a]\nb]\n"[..]).unwrap();
        assert_eq!(messages, vec!["[a]", "b]"]);
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let messages = read_messages(&b"[a]\r\nlast"[..]).unwrap();
        assert_eq!(messages, vec!["[a]", "last"]);
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_messages(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_line_kept() {
        let messages = read_messages(&b"[a]\n\xff\n\xe3\x80\x8cx\xe3\x80\x8d\n"[..]).unwrap();
        assert_eq!(messages, vec!["[a]", "\u{FFFD}", "「x」"]);
    }
}
