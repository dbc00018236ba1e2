//! Word-aligned script chunking
//!
//! Splits an arbitrarily long script into bounded units so the backend is
//! never handed more text than it can synthesize in one call.

/// Split a script into word-aligned units of at most `max_unit_chars`
/// characters each.
///
/// Words are accumulated greedily with single-space joins; a unit is closed
/// when appending the next word would overflow the budget. A single word
/// longer than the budget is emitted whole as its own oversized unit, since
/// splitting inside a word is never acceptable. The budget is advisory in
/// exactly that one case.
///
/// Joining the returned units with single spaces reproduces the script's
/// whitespace-normalized word sequence. Pure and deterministic: identical
/// inputs yield identical outputs.
pub fn chunk(script: &str, max_unit_chars: usize) -> Vec<String> {
    debug_assert!(max_unit_chars > 0);

    let mut units = Vec::new();
    let mut current = String::new();

    for word in script.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_unit_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            units.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        units.push(current);
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_yields_no_units() {
        assert!(chunk("", 4000).is_empty());
        assert!(chunk("   \n\t  ", 4000).is_empty());
    }

    #[test]
    fn single_word_is_one_unit() {
        assert_eq!(chunk("hello", 4000), vec!["hello"]);
    }

    #[test]
    fn units_respect_budget() {
        let script = "alpha beta gamma delta epsilon zeta eta theta";
        let units = chunk(script, 12);
        for unit in &units {
            assert!(unit.len() <= 12, "unit {:?} exceeds budget", unit);
        }
    }

    #[test]
    fn rejoin_reproduces_normalized_word_sequence() {
        let script = "  the   quick\nbrown\tfox  jumps over the lazy dog  ";
        let units = chunk(script, 10);
        let rejoined = units.join(" ");
        let normalized: Vec<&str> = script.split_whitespace().collect();
        assert_eq!(rejoined, normalized.join(" "));
    }

    #[test]
    fn oversized_word_is_emitted_whole() {
        let long_word = "a".repeat(50);
        let script = format!("short {} tail", long_word);
        let units = chunk(&script, 10);
        assert!(units.contains(&long_word));
        // Everything else still fits the budget.
        for unit in units.iter().filter(|u| **u != long_word) {
            assert!(unit.len() <= 10);
        }
    }

    #[test]
    fn word_boundary_never_split() {
        let script = "aa bb cc dd";
        for budget in 1..=11 {
            for unit in chunk(script, budget) {
                for word in unit.split(' ') {
                    assert!(["aa", "bb", "cc", "dd"].contains(&word));
                }
            }
        }
    }

    #[test]
    fn chunking_is_idempotent() {
        let script = "one two three four five six seven eight nine ten";
        assert_eq!(chunk(script, 15), chunk(script, 15));
    }

    #[test]
    fn exact_fit_keeps_words_together() {
        // "aa bb" is exactly 5 chars
        assert_eq!(chunk("aa bb cc", 5), vec!["aa bb", "cc"]);
    }
}
