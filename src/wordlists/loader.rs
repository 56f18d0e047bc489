//! Token file loading utilities

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Read every whitespace-separated token of a file
///
/// The file is split as bytes; a token that is not valid UTF-8 is kept, with
/// its bad sequences replaced, so that it can be reported like any other
/// malformed token.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_chains::wordlists::read_tokens;
///
/// let tokens = read_tokens("dizionario.txt").unwrap();
/// println!("Read {} tokens", tokens.len());
/// ```
pub fn read_tokens<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read(path)?;
    Ok(split_tokens(&content))
}

/// Read the tokens of a file, treating an unreadable file as empty
///
/// A missing or unreadable source is not an error for the user: it simply
/// contributes no tokens. The failure is only logged.
pub fn tokens_or_empty<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match read_tokens(path) {
        Ok(tokens) => {
            debug!("read {} tokens from {}", tokens.len(), path.display());
            tokens
        }
        Err(e) => {
            debug!("cannot read {}: {e}; loading nothing", path.display());
            Vec::new()
        }
    }
}

/// Split raw bytes into owned tokens on ASCII whitespace
fn split_tokens(content: &[u8]) -> Vec<String> {
    content
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn split_on_any_whitespace() {
        let tokens = split_tokens(b"abba  abca\n\tAbBa\r\n\n  x1 ");
        assert_eq!(tokens, ["abba", "abca", "AbBa", "x1"]);
    }

    #[test]
    fn split_empty_text() {
        assert!(split_tokens(b"").is_empty());
        assert!(split_tokens(b" \n\t ").is_empty());
    }

    #[test]
    fn read_tokens_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abba abca").unwrap();
        writeln!(file, "aBBa").unwrap();

        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, ["abba", "abca", "aBBa"]);
    }

    #[test]
    fn split_keeps_invalid_utf8_token() {
        let tokens = split_tokens(b"abba caff\xe8 abca");
        assert_eq!(tokens, ["abba", "caff\u{fffd}", "abca"]);
    }

    #[test]
    fn read_tokens_from_non_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abba caff\xe8 abca\n").unwrap();

        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, ["abba", "caff\u{fffd}", "abca"]);
    }

    #[test]
    fn read_tokens_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_tokens(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn missing_file_yields_no_tokens() {
        let dir = tempfile::tempdir().unwrap();
        assert!(tokens_or_empty(dir.path().join("missing.txt")).is_empty());
    }
}
