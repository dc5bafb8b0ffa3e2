//! "Did you mean" hints for mistyped effect and style ids

/// Edit distance (insertions, deletions, substitutions) between two ids.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Largest distance still worth suggesting.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Candidates within `max_distance` of `query`, closest first, at most three.
///
/// Comparison ignores ASCII case and treats `-` like `_`, so `chaos-spikes`
/// finds `chaos_spikes`.
pub fn suggest<'a>(query: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = normalize(query);
    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .map(|&c| (c, levenshtein_distance(&query, &normalize(c))))
        .filter(|&(_, d)| d <= max_distance)
        .collect();
    scored.sort_by_key(|&(_, d)| d);
    scored.into_iter().take(3).map(|(c, _)| c).collect()
}

/// The single closest candidate, if any is close enough.
pub fn closest(query: &str, candidates: &[&str]) -> Option<String> {
    suggest(query, candidates, MAX_SUGGESTION_DISTANCE).first().map(|s| s.to_string())
}

/// Render a hint line for the CLI. `None` when nothing is close.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [one] => Some(format!("Did you mean '{}'?", one)),
        [a, b] => Some(format!("Did you mean '{}' or '{}'?", a, b)),
        [a, b, c, ..] => Some(format!("Did you mean '{}', '{}', or '{}'?", a, b, c)),
    }
}

fn normalize(id: &str) -> String {
    id.to_ascii_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EFFECTS: &[&str] = &["spikes", "chaos_spikes", "slime", "stone", "storm", "shadow"];

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("spikes", "spikes"), 0);
        assert_eq!(levenshtein_distance("", "fire"), 4);
        assert_eq!(levenshtein_distance("fire", ""), 4);
        assert_eq!(levenshtein_distance("spikez", "spikes"), 1);
        assert_eq!(levenshtein_distance("stone", "storm"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_suggest_typo_closest_first() {
        let found = suggest("spikez", EFFECTS, MAX_SUGGESTION_DISTANCE);
        assert_eq!(found[0], "spikes");
    }

    #[test]
    fn test_suggest_accepts_dashes_and_case() {
        assert_eq!(closest("Chaos-Spikes", EFFECTS), Some("chaos_spikes".to_string()));
    }

    #[test]
    fn test_suggest_nothing_close() {
        assert!(suggest("watercolor", EFFECTS, 2).is_empty());
        assert_eq!(closest("watercolor", EFFECTS), None);
    }

    #[test]
    fn test_suggest_caps_at_three() {
        assert!(suggest("stxxx", EFFECTS, 5).len() <= 3);
    }

    #[test]
    fn test_format_suggestion() {
        assert_eq!(format_suggestion(&[]), None);
        assert_eq!(format_suggestion(&["slime"]), Some("Did you mean 'slime'?".to_string()));
        assert_eq!(
            format_suggestion(&["stone", "storm"]),
            Some("Did you mean 'stone' or 'storm'?".to_string())
        );
        assert_eq!(
            format_suggestion(&["stone", "storm", "slime"]),
            Some("Did you mean 'stone', 'storm', or 'slime'?".to_string())
        );
    }
}
