use serde::Serialize;
use zeromap_core::PlaceRecord;

use crate::levenshtein;

/// Score awarded per query token found in the place name.
const TOKEN_NAME_WEIGHT: f64 = 0.3;
/// Score awarded per query token found in the place address.
const TOKEN_ADDRESS_WEIGHT: f64 = 0.2;
/// Token-overlap scores never exceed a plain address substring match by much.
const TOKEN_SCORE_CAP: f64 = 0.7;
/// Minimum normalized Levenshtein similarity before a fuzzy hit counts.
const FUZZY_THRESHOLD: f64 = 0.7;

/// How a search hit matched the query, for display labeling.
///
/// Classification runs independently of scoring, so the label can disagree
/// with the branch that produced the score: a place found only through
/// address token overlap still carries [`MatchKind::Fuzzy`]. Downstream
/// labels depend on that behavior, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Fuzzy,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            MatchKind::Exact => "exact",
            MatchKind::Partial => "partial",
            MatchKind::Fuzzy => "fuzzy",
        })
    }
}

/// One ranked hit. Borrows the matched record; `search` never clones or
/// mutates the caller's places.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub place: &'a PlaceRecord,
    /// Relevance in `(0, 1]`; exact name matches score `1.0`.
    pub relevance: f64,
    pub match_kind: MatchKind,
}

/// Ranks `places` against `query` by descending relevance.
///
/// A blank query or an empty slice yields an empty vector, never an error.
/// Places scoring zero are excluded. The sort is stable, so places with
/// equal relevance keep their input order.
#[must_use]
pub fn search<'a>(query: &str, places: &'a [PlaceRecord]) -> Vec<SearchResult<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = places
        .iter()
        .filter_map(|place| {
            let relevance = relevance(&query, place);
            (relevance > 0.0).then(|| SearchResult {
                place,
                relevance,
                match_kind: classify(&query, place),
            })
        })
        .collect();

    // sort_by is guaranteed stable, which the tie-order contract relies on.
    results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    results
}

/// Scoring ladder, first branch that fires wins:
/// exact name 1.0, name substring 0.8, address substring 0.6, token
/// overlap capped at 0.7, then Levenshtein similarity above the threshold
/// scaled by 0.5. `query` must already be trimmed and lowercased.
fn relevance(query: &str, place: &PlaceRecord) -> f64 {
    let name = place.name.to_lowercase();
    let address = place.address.to_lowercase();

    if name == query {
        return 1.0;
    }
    if name.contains(query) {
        return 0.8;
    }
    if address.contains(query) {
        return 0.6;
    }

    let mut token_score = 0.0;
    for token in query.split(' ').filter(|t| t.chars().count() > 1) {
        if name.contains(token) {
            token_score += TOKEN_NAME_WEIGHT;
        }
        if address.contains(token) {
            token_score += TOKEN_ADDRESS_WEIGHT;
        }
    }
    if token_score > 0.0 {
        return token_score.min(TOKEN_SCORE_CAP);
    }

    let similarity = levenshtein::similarity(query, &name);
    if similarity > FUZZY_THRESHOLD {
        return similarity * 0.5;
    }

    0.0
}

/// Display label, computed independently of the score branch.
fn classify(query: &str, place: &PlaceRecord) -> MatchKind {
    let name = place.name.to_lowercase();
    if name == query {
        MatchKind::Exact
    } else if name.contains(query) || query.contains(name.as_str()) {
        MatchKind::Partial
    } else {
        MatchKind::Fuzzy
    }
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
    fn blank_query_returns_nothing() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        assert!(search("", &places).is_empty());
        assert!(search("   ", &places).is_empty());
    }

    #[test]
    fn empty_place_list_returns_nothing() {
        assert!(search("알맹", &[]).is_empty());
    }

    #[test]
    fn exact_name_match_scores_one() {
        let places = vec![place("스타벅스 역삼점", "서울 강남구 역삼동")];
        let results = search("스타벅스 역삼점", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 1.0).abs() < f64::EPSILON);
        assert_eq!(results[0].match_kind, MatchKind::Exact);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let places = vec![place("The Picker", "서울 성동구 성수동")];
        let results = search("the picker", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 1.0).abs() < f64::EPSILON);
        assert_eq!(results[0].match_kind, MatchKind::Exact);
    }

    #[test]
    fn name_substring_scores_point_eight() {
        let places = vec![place("스타벅스 역삼점", "서울 강남구 역삼동")];
        let results = search("역삼", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 0.8).abs() < f64::EPSILON);
        assert_eq!(results[0].match_kind, MatchKind::Partial);
    }

    #[test]
    fn address_substring_scores_point_six() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        let results = search("월드컵로", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn address_only_token_overlap_is_labeled_fuzzy() {
        // The token branch scores what looks like a partial match, but
        // classification only consults the name, so the label stays fuzzy.
        let places = vec![place("보틀팩토리", "서울 서대문구 홍연길 26")];
        let results = search("서대문구 공방거리", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - TOKEN_ADDRESS_WEIGHT).abs() < 1e-12);
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
    }

    #[test]
    fn token_overlap_sums_name_and_address_hits() {
        // "알맹" hits the name (0.3), "마포구" hits the address (0.2).
        let places = vec![place("알맹상점 리필스테이션", "서울 마포구 월드컵로 49")];
        let results = search("알맹 마포구", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 0.5).abs() < 1e-12);
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
    }

    #[test]
    fn token_overlap_is_capped() {
        // Three name-token hits sum to 0.9 plus an address hit; the cap
        // holds the score at 0.7. Token order differs from the name, so
        // the substring branches stay quiet.
        let places = vec![place("제로 서울 웨이스트 마켓", "서울 종로구 자하문로")];
        let results = search("서울 제로 웨이스트", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - TOKEN_SCORE_CAP).abs() < 1e-12);
    }

    #[test]
    fn single_character_tokens_are_ignored() {
        let places = vec![place("숲 상점", "서울 은평구")];
        // "숲" alone is one character; with no other branch matching the
        // place is excluded entirely.
        let results = search("숲 x", &places);
        assert!(results.is_empty());
    }

    #[test]
    fn near_miss_name_scores_through_levenshtein() {
        let places = vec![place("덕업상점", "서울 강북구 수유동")];
        // One substituted syllable out of four: similarity 0.75 > 0.7.
        let results = search("덕업상덤", &places);
        assert_eq!(results.len(), 1);
        assert!((results[0].relevance - 0.375).abs() < 1e-12);
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
    }

    #[test]
    fn dissimilar_name_is_excluded() {
        let places = vec![place("알맹상점", "서울 마포구 월드컵로 49")];
        assert!(search("부산커피", &places).is_empty());
    }

    #[test]
    fn results_are_sorted_by_descending_relevance() {
        let places = vec![
            place("연남 제로마켓", "서울 마포구 연남동"),
            place("제로마켓", "서울 중구 명동"),
        ];
        let results = search("제로마켓", &places);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].place.name, "제로마켓");
        assert!((results[0].relevance - 1.0).abs() < f64::EPSILON);
        assert_eq!(results[1].place.name, "연남 제로마켓");
        assert!((results[1].relevance - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let places = vec![
            place("지구샵 연남점", "서울 마포구 연남동"),
            place("지구샵 상도점", "서울 동작구 상도동"),
            place("지구샵 합정점", "서울 마포구 합정동"),
        ];
        let results = search("지구샵", &places);
        assert_eq!(results.len(), 3);
        let names: Vec<&str> = results.iter().map(|r| r.place.name.as_str()).collect();
        assert_eq!(names, ["지구샵 연남점", "지구샵 상도점", "지구샵 합정점"]);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let places = vec![
            place("알맹상점", "서울 마포구 월드컵로 49"),
            place("보틀팩토리", "서울 서대문구 홍연길 26"),
            place("지구샵", "서울 동작구 성대로 1길"),
        ];
        let first = search("서울", &places);
        let second = search("서울", &places);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.place.id, b.place.id);
            assert!((a.relevance - b.relevance).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn query_containing_the_name_is_labeled_partial() {
        // Reverse containment: name ⊂ query. The score comes from the
        // token branch, the label from classification.
        let places = vec![place("지구샵", "서울 동작구 성대로 1길")];
        let results = search("지구샵 본점", &places);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_kind, MatchKind::Partial);
    }

    #[test]
    fn match_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchKind::Exact).expect("serializable"),
            r#""exact""#
        );
        assert_eq!(MatchKind::Partial.to_string(), "partial");
    }
}
