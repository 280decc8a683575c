// src/stats/counts.rs
use std::collections::HashMap;

use crate::config::consts::UNKNOWN;

/// `(label, count)` sorted by count descending, then label. Blank labels count as "Unknown".
pub fn value_counts<I, S>(labels: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map: HashMap<String, usize> = HashMap::new();
    for l in labels {
        let l = l.as_ref().trim();
        let key = if l.is_empty() { UNKNOWN } else { l };
        *map.entry(s!(key)).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = map.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Merge every entry below `min` into one trailing `label` entry. Totals are preserved.
pub fn bucket_small(counts: Vec<(String, usize)>, min: usize, label: &str) -> Vec<(String, usize)> {
    let (mut keep, small): (Vec<_>, Vec<_>) = counts.into_iter().partition(|(_, n)| *n >= min);
    let rest: usize = small.iter().map(|(_, n)| n).sum();
    if !small.is_empty() {
        keep.push((s!(label), rest));
    }
    keep
}

pub fn total(counts: &[(String, usize)]) -> usize {
    counts.iter().map(|(_, n)| n).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sorted_with_ties_by_label() {
        let c = value_counts(["NL", "DE", "NL", "", "DE", "ES", " "]);
        assert_eq!(
            c,
            vec![(s!("DE"), 2), (s!("NL"), 2), (s!("Unknown"), 2), (s!("ES"), 1)]
        );
    }

    #[test]
    fn small_entries_bucketed_last() {
        let c = vec![(s!("NL"), 120), (s!("DE"), 60), (s!("ES"), 9), (s!("FR"), 3)];
        let b = bucket_small(c.clone(), 10, "Other countries");
        assert_eq!(b, vec![(s!("NL"), 120), (s!("DE"), 60), (s!("Other countries"), 12)]);
        assert_eq!(total(&b), total(&c));
        assert_eq!(bucket_small(c.clone(), 1, "x"), c);
    }
}
