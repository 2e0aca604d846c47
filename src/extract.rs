//! Parsers for oracle output.
//!
//! Proposals arrive as `<tag>…</tag>` spans; verdicts arrive as `[[…]]`
//! tokens. Nothing here validates what a move means.
use crate::role::Role;

/// Substrings between `<tag>` and `</tag>`, in order of appearance.
/// Matching is shortest-span and may cross lines.
pub fn tagged<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let mut items = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        match after.find(&close) {
            Some(end) => {
                items.push(&after[..end]);
                rest = &after[end + close.len()..];
            }
            None => break,
        }
    }
    items
}

/// Raw proposals for a role.
pub fn proposals(text: &str, role: Role) -> Vec<String> {
    tagged(text, role.tag())
        .into_iter()
        .map(String::from)
        .collect()
}

/// Contents of every `[[…]]` token, left to right. Overlapping openers are
/// scanned one character at a time so `[[[1]]]` still yields `1`.
fn bracketed(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(|(i, _)| i)
        .filter(move |i| text[*i..].starts_with("[["))
        .filter_map(move |i| {
            let inner = &text[i + 2..];
            inner.find("]]").map(|end| &inner[..end])
        })
}

/// Which of two presented futures a judge preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    First,
    Second,
}

impl Preference {
    /// Parse `[[1]]` / `[[2]]`, falling back to `[[A]]` / `[[B]]`.
    /// Anything else, including `[[tie]]`, is no preference.
    pub fn parse(text: &str) -> Option<Self> {
        bracketed(text)
            .find_map(|token| match token.trim() {
                "1" => Some(Self::First),
                "2" => Some(Self::Second),
                _ => None,
            })
            .or_else(|| {
                bracketed(text).find_map(|token| match token.trim() {
                    "A" | "a" => Some(Self::First),
                    "B" | "b" => Some(Self::Second),
                    _ => None,
                })
            })
    }
}

/// Parse the first `[[n]]` index token. Digits only, no padding.
pub fn index(text: &str) -> Option<usize> {
    bracketed(text)
        .filter(|token| !token.is_empty())
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .find_map(|token| token.parse::<usize>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order() {
        let text = "<think>hmm</think>\n<action>\n[A6 B7 C7]\n</action>\n<action>[A10 B0 C10]</action>";
        assert_eq!(tagged(text, "action"), vec!["\n[A6 B7 C7]\n", "[A10 B0 C10]"]);
    }

    #[test]
    fn extracts_nothing_when_absent() {
        assert!(tagged("no moves here", "action").is_empty());
        assert!(tagged("<action>unterminated", "action").is_empty());
    }

    #[test]
    fn tags_do_not_bleed_across_roles() {
        let text = "<opponent_action>x</opponent_action><action>y</action>";
        assert_eq!(proposals(text, Role::Agent), vec!["y"]);
        assert_eq!(proposals(text, Role::Opponent), vec!["x"]);
    }

    #[test]
    fn parses_numeric_preference() {
        assert_eq!(Preference::parse("<think>..</think> [[1]]"), Some(Preference::First));
        assert_eq!(Preference::parse("[[ 2 ]]"), Some(Preference::Second));
    }

    #[test]
    fn numeric_preference_beats_letters() {
        assert_eq!(Preference::parse("[[A]] then [[2]]"), Some(Preference::Second));
    }

    #[test]
    fn falls_back_to_letters() {
        assert_eq!(Preference::parse("[[b]]"), Some(Preference::Second));
        assert_eq!(Preference::parse("[[A]]"), Some(Preference::First));
    }

    #[test]
    fn tie_and_garbage_have_no_preference() {
        assert_eq!(Preference::parse("[[tie]]"), None);
        assert_eq!(Preference::parse("[[3]]"), None);
        assert_eq!(Preference::parse("future 1 is better"), None);
    }

    #[test]
    fn parses_index() {
        assert_eq!(index("pick [[4]]"), Some(4));
        assert_eq!(index("[[ 4 ]]"), None);
        assert_eq!(index("[[x]] [[12]]"), Some(12));
        assert_eq!(index("[[[3]]]"), Some(3));
        assert_eq!(index("none"), None);
    }
}
