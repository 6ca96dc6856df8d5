//! Pure text transformations.
//!
//! Every function here is total: any `&str` (empty, whitespace-only, broken
//! markup) produces a value and nothing panics. Line-oriented operations
//! split on `\n` and `\r\n` and always rejoin with `\n`.

use std::collections::HashSet;
use std::sync::LazyLock;

use icu_collator::{Collator, CollatorOptions, Strength};
use regex_lite::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::app::domain::TextStats;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static TAB_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+").unwrap());
static TRAILING_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[ \u{00A0}]{2,}").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
// ASCII \w and \b, so "café" yields the single word "caf".
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[\w'-]+\b").unwrap());

const ZERO_WIDTH_SPACE: char = '\u{200B}';
const NO_BREAK_SPACE: char = '\u{00A0}';
const NEXT_LINE: char = '\u{0085}';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace for trimming: Unicode `White_Space` minus
/// NEL (U+0085), plus the byte order mark (U+FEFF).
pub fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != NEXT_LINE) || ch == BYTE_ORDER_MARK
}

/// Trim leading and trailing [`is_space`] characters.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Remove everything that looks like a `<...>` tag, keeping the text between tags.
///
/// This is a regex pass, not an HTML parser. `a < b and c > d` loses the
/// middle part; an unmatched `<` with no closing `>` is left alone.
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Full cleanup pass.
///
/// Steps run in a fixed order: strip tags, drop zero-width spaces, unify line
/// endings, turn tab runs into a space, drop blanks before newlines, cap blank
/// lines at one, collapse space/NBSP runs, trim, and optionally remove accents.
pub fn clean_text(text: &str, remove_accents_flag: bool) -> String {
    let mut cleaned = strip_html(text);
    cleaned.retain(|c| c != ZERO_WIDTH_SPACE);
    cleaned = cleaned.replace("\r\n", "\n");
    cleaned = TAB_RUN.replace_all(&cleaned, " ").into_owned();
    cleaned = TRAILING_BLANKS.replace_all(&cleaned, "\n").into_owned();
    cleaned = NEWLINE_RUN.replace_all(&cleaned, "\n\n").into_owned();
    cleaned = SPACE_RUN.replace_all(&cleaned, " ").into_owned();

    let trimmed = trim(&cleaned);
    if remove_accents_flag {
        remove_accents(trimmed)
    } else {
        trimmed.to_string()
    }
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase the text, then capitalize the first character of every word.
///
/// A word starts at a letter, digit or underscore and runs through further
/// word characters, apostrophes and hyphens, so `don't stop-now` becomes
/// `Don't Stop-now`. Combining marks stay inside the word they follow.
/// Unlike [`count_words`], letters outside ASCII count as word characters,
/// so `élan` becomes `Élan`. Everything else is copied through untouched.
pub fn to_title_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_word = false;

    for ch in lowered.chars() {
        if is_word_char(ch) {
            if in_word {
                out.push(ch);
            } else {
                out.extend(ch.to_uppercase());
                in_word = true;
            }
        } else if in_word && is_combining_mark(ch) {
            out.push(ch);
        } else {
            in_word = in_word && matches!(ch, '\'' | '-');
            out.push(ch);
        }
    }

    out
}

/// Keep the first occurrence of every line, comparing lines by their trimmed content.
///
/// The surviving line keeps its original leading/trailing whitespace.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    split_lines(text)
        .into_iter()
        .filter(|&line| seen.insert(trim(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sort lines by their trimmed content using root-locale collation at
/// primary strength, so case and accents are ignored.
///
/// Punctuation and symbols sort before digits, digits before letters, and
/// `Łódź` sorts between `Aarhus` and `Madrid`. The sort is stable: lines that
/// compare equal (`b` and `B`, `eclair` and `Éclair`) keep their input order.
pub fn sort_lines(text: &str) -> String {
    let mut lines = split_lines(text);
    match base_collator() {
        Some(collator) => lines.sort_by(|a, b| collator.compare(trim(a), trim(b))),
        None => lines.sort_by(|a, b| fold_key(a).cmp(&fold_key(b))),
    }
    lines.join("\n")
}

pub fn remove_blank_lines(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .filter(|line| !trim(line).is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop every control character (general category Cc) except `\n`.
pub fn remove_non_printable(text: &str) -> String {
    text.chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

/// NBSP to space, collapse blank runs, strip whitespace around newlines, trim.
///
/// Any [`is_space`] character next to a newline goes, ideographic and em
/// spaces included. Whitespace around a newline is swallowed whole, so runs
/// of blank lines collapse to a single line break.
pub fn normalize_spaces(text: &str) -> String {
    let text = text.replace(NO_BREAK_SPACE, " ");
    let text = BLANK_RUN.replace_all(&text, " ");
    text.split('\n')
        .map(trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decompose (NFD) and drop combining diacritical marks U+0300..=U+036F.
pub fn remove_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .collect()
}

/// Count words in the trimmed text.
///
/// A word is a run of ASCII letters, digits, `_`, `'` and `-` that starts and
/// ends on a word boundary. Letters outside ASCII are separators here.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(trim(text)).count()
}

/// Length in UTF-16 code units, not graphemes or scalar values.
pub fn count_chars(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn stats(text: &str) -> TextStats {
    TextStats {
        words: count_words(text),
        chars: count_chars(text),
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn base_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    Collator::try_new(&Default::default(), options).ok()
}

// Used only if the collation data fails to load.
fn fold_key(line: &str) -> String {
    remove_accents(trim(line)).to_lowercase()
}

/// Split on `\n`, dropping the `\r` of `\r\n` pairs.
///
/// Like a regex split on `\r?\n`: a trailing newline yields a final empty
/// line and a lone `\r` at the very end is kept.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        let current = *line;
        *line = current.strip_suffix('\r').unwrap_or(current);
    }
    lines
}
