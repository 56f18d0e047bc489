//! Writers for command results
//!
//! Results are plain text, one item per line, with no styling: they are the
//! command protocol and must stay byte-exact whatever the terminal.

use std::io::{self, Write};

/// Write a bracketed list: `[`, one item per line, `]`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_list<W, I, S>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    writeln!(out, "[")?;
    for item in items {
        writeln!(out, "{}", item.as_ref())?;
    }
    writeln!(out, "]")
}

/// Write a pattern search result: `S:[`, one word per line, `]`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_search<W, I, S>(out: &mut W, pattern: &str, words: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    writeln!(out, "{pattern}:[")?;
    for word in words {
        writeln!(out, "{}", word.as_ref())?;
    }
    writeln!(out, "]")
}

/// Write a chain search result: `(`, one word per line, `)`, or `non esiste`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_chain<W: Write>(out: &mut W, chain: Option<&[String]>) -> io::Result<()> {
    let Some(chain) = chain else {
        return writeln!(out, "non esiste");
    };
    writeln!(out, "(")?;
    for word in chain {
        writeln!(out, "{word}")?;
    }
    writeln!(out, ")")
}

/// Write an edit distance on its own line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_distance<W: Write>(out: &mut W, distance: usize) -> io::Result<()> {
    writeln!(out, "{distance}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_with_items() {
        let text = render(|out| write_list(out, ["abba", "abca"]));
        assert_eq!(text, "[\nabba\nabca\n]\n");
    }

    #[test]
    fn empty_list() {
        let text = render(|out| write_list(out, Vec::<String>::new()));
        assert_eq!(text, "[\n]\n");
    }

    #[test]
    fn search_result() {
        let text = render(|out| write_search(out, "aC", ["aa", "ab"]));
        assert_eq!(text, "aC:[\naa\nab\n]\n");
    }

    #[test]
    fn chain_found() {
        let chain = vec!["aa".to_string(), "aba".to_string(), "bba".to_string()];
        let text = render(|out| write_chain(out, Some(chain.as_slice())));
        assert_eq!(text, "(\naa\naba\nbba\n)\n");
    }

    #[test]
    fn chain_not_found() {
        let text = render(|out| write_chain(out, None));
        assert_eq!(text, "non esiste\n");
    }

    #[test]
    fn distance_line() {
        assert_eq!(render(|out| write_distance(out, 3)), "3\n");
    }
}
