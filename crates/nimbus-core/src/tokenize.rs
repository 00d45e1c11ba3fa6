use regex::Regex;
use std::sync::LazyLock;

// Quoted spans first, then a whole line without whitespace.
static QUOTED_OR_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'.*?'|".*?"|^\S*$"#).unwrap());

/// Split a raw line into terms, keeping quoted spans together.
///
/// Single- or double-quoted spans become one term without their quotes.
/// Everything else is split on whitespace. Quotes without a partner stay in
/// the term they appear in.
///
/// ```
/// use nimbus_core::split_input;
///
/// assert_eq!(split_input(r#""parse" out"#), vec!["parse", "out"]);
/// assert_eq!(split_input(r#"two" or" more""#), vec!["two", " or", "more\""]);
/// assert!(split_input("").is_empty());
/// ```
pub fn split_input(line: &str) -> Vec<String> {
    let mut terms = Vec::new();
    if line.is_empty() {
        return terms;
    }

    let mut last = 0;
    for m in QUOTED_OR_BARE.find_iter(line) {
        push_chunk(&line[last..m.start()], &mut terms);
        push_chunk(m.as_str(), &mut terms);
        last = m.end();
    }
    push_chunk(&line[last..], &mut terms);

    terms
}

fn push_chunk(chunk: &str, terms: &mut Vec<String>) {
    let chunk = chunk.trim();
    if chunk.is_empty() {
        return;
    }

    match unquote(chunk) {
        Some(inner) => terms.push(inner.to_string()),
        None => terms.extend(chunk.split_whitespace().map(str::to_string)),
    }
}

/// Strip matching surrounding quotes. A lone quote character is not a span.
fn unquote(chunk: &str) -> Option<&str> {
    let mut chars = chunk.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && (first == '\'' || first == '"') {
        Some(&chunk[1..chunk.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input_cases() {
        let cases: &[(&str, &[&str])] = &[
            ("unparsable", &["unparsable"]),
            ("\"parsable\"", &["parsable"]),
            ("\"parse\" out", &["parse", "out"]),
            ("\"one", &["\"one"]),
            ("two\" or\" more\"", &["two", " or", "more\""]),
            (
                "Go \"down 'deep \" deeper 'bottom ' up\" go' up\" !",
                &["Go", "down 'deep ", "deeper", "bottom ", "up", " go' up", "!"],
            ),
            (
                "Is \"this\" a 'parsed' string?",
                &["Is", "this", "a", "parsed", "string?"],
            ),
        ];

        for (line, expected) in cases {
            assert_eq!(split_input(line), *expected, "line: {}", line);
        }
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(split_input("").is_empty());
        assert!(split_input("   ").is_empty());
    }

    #[test]
    fn test_lone_quote_is_kept() {
        assert_eq!(split_input("\""), vec!["\""]);
        assert_eq!(split_input("a ' b"), vec!["a", "'", "b"]);
    }

    #[test]
    fn test_runs_of_whitespace_do_not_make_empty_terms() {
        assert_eq!(split_input("server   list\t--limit 3"), vec![
            "server", "list", "--limit", "3"
        ]);
    }

    #[test]
    fn test_empty_quotes() {
        assert_eq!(split_input("name '' end"), vec!["name", "", "end"]);
    }
}
