//! Word-frequency counting.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("static pattern compiles"))
}

/// The `k` most frequent lowercase words of `text` with their counts.
///
/// Words are maximal runs of Unicode word characters. Ordered by count
/// (descending); equal counts keep the order in which the words first
/// appeared.
pub fn top_k_words(text: &str, k: usize) -> Vec<(String, usize)> {
    if k == 0 {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    // word -> position in `counts`
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for m in word_re().find_iter(&lower) {
        let w = m.as_str();
        match slot.get(w) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slot.insert(w, counts.len());
                counts.push((w, 1));
            }
        }
    }
    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(k)
        .map(|(w, c)| (w.to_string(), c))
        .collect()
}
