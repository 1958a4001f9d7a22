//! Standalone template matcher.
//!
//! Decides whether a short template of symbols matches an input string when
//! every symbol binds a non-empty word: `abba` matches `redbluebluered`
//! with a=red, b=blue. Self-contained; shares no state or data model with
//! the digit-stream modules.
//!
//! The search is an explicit iterative backtracker: each fresh binding is a
//! candidate frame on a stack, retried with a longer word when the rest of
//! the template fails to fit. Duplicate bindings (two symbols claiming the
//! same word) are rejected at bind time through a reverse word-to-symbol
//! lookup instead of being filtered after the fact.

use std::collections::{HashMap, HashSet};

/// A choice point: `symbol` at `template_idx` bound to the word of length
/// `word_len` starting at `input_pos`.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    template_idx: usize,
    input_pos: usize,
    word_len: usize,
}

/// Whether `template` matches `input` with a consistent symbol-to-word
/// binding.
///
/// Rules: every symbol binds a non-empty word, a repeated symbol must bind
/// the identical word each time, distinct symbols must bind distinct words,
/// and the bound words concatenate to exactly `input`.
///
/// A template with no repeated symbols matches whenever the input is at
/// least as long as the template, without searching for a concrete binding.
pub fn matches_template(template: &str, input: &str) -> bool {
    if template.len() > input.len() {
        return false;
    }
    let symbols: Vec<char> = template.chars().collect();

    let mut seen = HashSet::new();
    let repeated = symbols.iter().any(|&symbol| !seen.insert(symbol));
    if !repeated {
        return true;
    }

    backtracking_match(&symbols, input.as_bytes())
}

fn backtracking_match(symbols: &[char], input: &[u8]) -> bool {
    // symbol -> (start, len) of its bound word within the input.
    let mut bindings: HashMap<char, (usize, usize)> = HashMap::new();
    // Reverse lookup used to reject duplicate bindings when they are made.
    let mut owners: HashMap<&[u8], char> = HashMap::new();
    let mut stack: Vec<Candidate> = Vec::new();

    let mut template_idx = 0;
    let mut input_pos = 0;
    // Word length the next fresh binding starts from; bumped on backtrack.
    let mut retry_len = 1;

    loop {
        if template_idx == symbols.len() && input_pos == input.len() {
            return true;
        }

        let mut advanced = false;
        if template_idx < symbols.len() {
            let symbol = symbols[template_idx];
            if let Some(&(start, len)) = bindings.get(&symbol) {
                // Seen before: the same word must appear here.
                let word = &input[start..start + len];
                if input[input_pos..].starts_with(word) {
                    input_pos += len;
                    template_idx += 1;
                    advanced = true;
                }
            } else if let Some(candidate) = bind_shortest(
                symbol,
                template_idx,
                input_pos,
                retry_len,
                input,
                &mut owners,
            ) {
                bindings.insert(symbol, (candidate.input_pos, candidate.word_len));
                stack.push(candidate);
                input_pos += candidate.word_len;
                template_idx += 1;
                retry_len = 1;
                advanced = true;
            }
        }
        if advanced {
            continue;
        }

        // Dead end: undo the most recent fresh binding, retry it longer.
        match stack.pop() {
            None => return false,
            Some(candidate) => {
                let symbol = symbols[candidate.template_idx];
                bindings.remove(&symbol);
                owners.remove(
                    &input[candidate.input_pos..candidate.input_pos + candidate.word_len],
                );
                template_idx = candidate.template_idx;
                input_pos = candidate.input_pos;
                retry_len = candidate.word_len + 1;
            }
        }
    }
}

/// Bind `symbol` to the shortest word of length at least `min_len` starting
/// at `input_pos` that no other symbol already owns. Records the word in
/// the reverse lookup.
fn bind_shortest<'a>(
    symbol: char,
    template_idx: usize,
    input_pos: usize,
    min_len: usize,
    input: &'a [u8],
    owners: &mut HashMap<&'a [u8], char>,
) -> Option<Candidate> {
    let mut word_len = min_len;
    while input_pos + word_len <= input.len() {
        let word = &input[input_pos..input_pos + word_len];
        if !owners.contains_key(word) {
            owners.insert(word, symbol);
            return Some(Candidate {
                template_idx,
                input_pos,
                word_len,
            });
        }
        word_len += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A template with no repeating symbols matches as long as the input is
    /// at least as long as the template.
    #[test]
    fn distinct_symbols_match_by_length() {
        assert!(matches_template("a", "efghi"));
        assert!(matches_template("abdc", "odsihpoyywepqriohweoyafpsdoyh"));
        assert!(matches_template("abcde", "efghi"));
        assert!(!matches_template("abcdefghi", "cat"));
    }

    #[test]
    fn repeated_symbols_need_consistent_words() {
        assert!(matches_template("abba", "redbluebluered"));
        assert!(matches_template("abba", "catdogdogcat"));
        assert!(matches_template("abba", "rblblr"));
        assert!(matches_template("baab", "abcxyzxyzabc"));
        assert!(matches_template("dzzd", "abcxyzxyzabc"));
        assert!(matches_template("abab", "redblueredblue"));
        assert!(matches_template("abab", "catdogcatdog"));
        assert!(matches_template("aba", "catdogcat"));
        assert!(matches_template("abcac", "catdogmousecatmouse"));

        assert!(!matches_template("abba", "redbluebluereda"));
        assert!(!matches_template("abba", "redblueredblue"));
        assert!(!matches_template("dzzd", "dzzda"));
        assert!(!matches_template("aba", "patrpatrr"));
        assert!(!matches_template("abab", "catdogcatcat"));
        assert!(!matches_template("abab", "catdogcatdogg"));
        assert!(!matches_template("abab", "catdocatdog"));
        assert!(!matches_template("abab", "catdogcat"));
    }

    /// Distinct symbols may not bind the same word.
    #[test]
    fn duplicate_words_are_rejected() {
        assert!(!matches_template("abba", "redredredred"));
    }

    /// A repeated symbol may consume the tail of the input even when it is
    /// the symbol's first unbound occurrence late in the template.
    #[test]
    fn fresh_binding_can_reach_the_input_end() {
        assert!(matches_template("aab", "xxy"));
        assert!(matches_template("abb", "xyy"));
    }

    #[test]
    fn empty_template_always_matches() {
        assert!(matches_template("", ""));
        assert!(matches_template("", "abc"));
    }
}
