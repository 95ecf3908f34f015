use zeromap_core::PlaceRecord;

/// Upper bound on autocomplete suggestions, matching what the search bar
/// renders.
const MAX_SUGGESTIONS: usize = 5;

/// Autocomplete candidates: names and addresses starting with the query.
///
/// Comparison is lowercased; the returned strings keep their original
/// casing. Duplicates collapse to their first occurrence while iterating
/// `places`, and at most [`MAX_SUGGESTIONS`] entries come back. A blank
/// query yields an empty vector.
#[must_use]
pub fn suggest(query: &str, places: &[PlaceRecord]) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    for place in places {
        if place.name.to_lowercase().starts_with(&query) && !suggestions.contains(&place.name) {
            suggestions.push(place.name.clone());
        }
        if place.address.to_lowercase().starts_with(&query)
            && !suggestions.contains(&place.address)
        {
            suggestions.push(place.address.clone());
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Wraps every case-insensitive occurrence of `query` in `**…**` markers.
///
/// Matching folds one `char` at a time rather than lowercasing whole
/// strings, so byte offsets in `text` never drift. A blank query returns
/// the text untouched.
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    let folded_query: Vec<char> = query.trim().chars().map(fold).collect();
    if folded_query.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold).collect();

    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        if i + folded_query.len() <= chars.len()
            && folded[i..i + folded_query.len()] == folded_query[..]
        {
            out.push_str("**");
            out.extend(&chars[i..i + folded_query.len()]);
            out.push_str("**");
            i += folded_query.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, address: &str) -> PlaceRecord {
        PlaceRecord {
            id: format!("id-{name}"),
            name: name.to_string(),
            category: "제로웨이스트".to_string(),
            address: address.to_string(),
            latitude: 37.5665,
            longitude: 126.978,
            description: None,
        }
    }

    #[test]
    fn blank_query_suggests_nothing() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        assert!(suggest("", &places).is_empty());
        assert!(suggest("  ", &places).is_empty());
    }

    #[test]
    fn name_prefixes_are_suggested_with_original_casing() {
        let places = vec![place("Almang Store", "서울 마포구 월드컵로 49")];
        let suggestions = suggest("almang", &places);
        assert_eq!(suggestions, ["Almang Store"]);
    }

    #[test]
    fn addresses_are_suggested_too() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        let suggestions = suggest("서울 마포구", &places);
        assert_eq!(suggestions, ["서울 마포구 월드컵로 49"]);
    }

    #[test]
    fn mid_string_matches_are_not_prefixes() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        assert!(suggest("마포구", &places).is_empty());
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let places = vec![
            place("지구샵", "서울 동작구 성대로 1길"),
            place("지구샵", "서울 마포구 연남동"),
        ];
        let suggestions = suggest("지구샵", &places);
        assert_eq!(suggestions, ["지구샵"]);
    }

    #[test]
    fn at_most_five_suggestions_in_input_order() {
        let places: Vec<PlaceRecord> = (1..=7)
            .map(|n| place(&format!("지구샵 {n}호점"), &format!("서울 어딘가 {n}")))
            .collect();
        let suggestions = suggest("지구샵", &places);
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0], "지구샵 1호점");
        assert_eq!(suggestions[4], "지구샵 5호점");
    }

    #[test]
    fn highlight_wraps_every_occurrence() {
        assert_eq!(
            highlight("역삼동 역삼점", "역삼"),
            "**역삼**동 **역삼**점"
        );
    }

    #[test]
    fn highlight_is_case_insensitive_but_preserves_casing() {
        assert_eq!(highlight("Almang Store", "ALMANG"), "**Almang** Store");
    }

    #[test]
    fn highlight_with_blank_query_returns_text_unchanged() {
        assert_eq!(highlight("알맹상점", "  "), "알맹상점");
    }

    #[test]
    fn highlight_without_a_match_returns_text_unchanged() {
        assert_eq!(highlight("알맹상점", "지구샵"), "알맹상점");
    }
}
