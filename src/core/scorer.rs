use crate::domain::model::{ScoredMatch, Technique};

/// Score each match by keyword overlap: one point per keyword contained in
/// the name plus one per keyword contained in the description. A technique
/// without a description scores zero on the description side. Input order is
/// preserved, so score is bounded by 2 × |keywords|.
pub fn score_matches(matches: &[&Technique], keywords: &[String]) -> Vec<ScoredMatch> {
    matches
        .iter()
        .map(|technique| {
            let name_hits = keywords
                .iter()
                .filter(|k| technique.name.contains(k.as_str()))
                .count();
            let description_hits = technique.description.as_deref().map_or(0, |description| {
                keywords
                    .iter()
                    .filter(|k| description.contains(k.as_str()))
                    .count()
            });

            ScoredMatch {
                technique: (*technique).clone(),
                score: name_hits + description_hits,
            }
        })
        .collect()
}
