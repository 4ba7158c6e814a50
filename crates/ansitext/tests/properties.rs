//! Property tests for the tokenizer, builder and reverser.

use ansitext::{AnsiToken, build, display_width, reverse_line, reverse_lines, tokenize};
use proptest::prelude::*;

/// A plain art line: spaces and single-width block glyphs, no escapes.
fn plain_line() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('▄'),
            Just('▀'),
            Just('█'),
            Just('X'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// A colored line assembled from plain segments and supported SGR codes.
fn colored_line() -> impl Strategy<Value = String> {
    let code = prop_oneof![
        Just(String::new()),
        Just("\x1b[38;5;129m".to_string()),
        Just("\x1b[38;5;16m".to_string()),
        Just("\x1b[48;5;160m".to_string()),
        Just("\x1b[48;5;16m".to_string()),
        Just("\x1b[0m".to_string()),
        Just("\x1b[39m".to_string()),
        Just("\x1b[49m".to_string()),
    ];
    proptest::collection::vec((code, plain_line()), 0..8)
        .prop_map(|parts| parts.into_iter().map(|(c, t)| c + &t).collect())
}

/// Resolve a token stream to one (fg, bg) pair per character.
fn resolved(lines: &[Vec<AnsiToken>]) -> Vec<Vec<(String, String, char)>> {
    lines
        .iter()
        .map(|line| {
            line.iter()
                .flat_map(|t| {
                    t.text
                        .chars()
                        .map(|ch| (t.fg.clone(), t.bg.clone(), ch))
                        .collect::<Vec<_>>()
                })
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn width_counts_scalars_when_no_escapes(s in plain_line()) {
        prop_assert_eq!(display_width(&s), s.chars().count());
    }

    #[test]
    fn tokens_never_contain_escape_bytes(s in colored_line()) {
        for line in tokenize(&s) {
            for token in line {
                prop_assert!(!token.text.contains('\x1b'));
            }
        }
    }

    #[test]
    fn concatenated_token_text_is_the_stripped_input(s in colored_line()) {
        let mut stripped = String::new();
        let mut in_escape = false;
        for ch in s.chars() {
            if in_escape {
                in_escape = ch != 'm';
            } else if ch == '\u{1b}' {
                in_escape = true;
            } else {
                stripped.push(ch);
            }
        }
        let plain: String = tokenize(&s)
            .iter()
            .flat_map(|line| line.iter().map(|t| t.text.as_str()))
            .collect();
        prop_assert_eq!(plain, stripped);
    }

    #[test]
    fn build_round_trip_resolves_identically(s in colored_line()) {
        let lines = tokenize(&s);
        let rebuilt = build(&lines);
        prop_assert_eq!(resolved(&tokenize(&rebuilt)), resolved(&lines));
        // And the rebuilt form is a fixed point.
        prop_assert_eq!(tokenize(&rebuilt), lines);
    }

    #[test]
    fn double_reverse_is_identity_per_line(s in colored_line()) {
        for line in tokenize(&s) {
            let twice = reverse_line(&reverse_line(&line, 0), 0);
            prop_assert_eq!(
                resolved(&[twice]),
                resolved(&[line])
            );
        }
    }

    #[test]
    fn reverse_preserves_width_and_multiset_of_colored_glyphs(s in colored_line()) {
        let lines = tokenize(&s);
        let reversed = reverse_lines(&lines);
        let max = lines
            .iter()
            .map(|l| l.iter().map(|t| t.text.chars().count()).sum::<usize>())
            .max()
            .unwrap_or(0);
        for (orig, rev) in lines.iter().zip(&reversed) {
            let rev_width: usize = rev.iter().map(|t| t.text.chars().count()).sum();
            prop_assert_eq!(rev_width, max);

            // Every original glyph keeps its color pair.
            let mut orig_glyphs: Vec<_> = resolved(&[orig.clone()])
                .remove(0)
                .into_iter()
                .filter(|(_, _, ch)| *ch != ' ')
                .collect();
            let mut rev_glyphs: Vec<_> = resolved(&[rev.clone()])
                .remove(0)
                .into_iter()
                .filter(|(_, _, ch)| *ch != ' ')
                .collect();
            orig_glyphs.sort();
            rev_glyphs.sort();
            prop_assert_eq!(orig_glyphs, rev_glyphs);
        }
    }
}
