use crate::domain::model::Technique;

/// Scan the technique list for keyword hits. A technique matches when any
/// keyword is a literal, case-sensitive substring of its name. The
/// description is consulted only when the name test fails and a description
/// exists. Dataset order is preserved; no deduplication, no ranking. An
/// empty keyword list matches nothing.
pub fn search_for_matches<'a>(
    techniques: &'a [Technique],
    keywords: &[String],
) -> Vec<&'a Technique> {
    let mut matches = Vec::new();

    for technique in techniques {
        if keywords.iter().any(|k| technique.name.contains(k.as_str())) {
            matches.push(technique);
        } else if let Some(description) = technique.description.as_deref() {
            if keywords.iter().any(|k| description.contains(k.as_str())) {
                matches.push(technique);
            }
        }
    }

    matches
}
