use crate::model::Subject;

/// Header keywords in match priority order; the first contained keyword wins.
pub const HEADER_KEYWORDS: &[(&str, Subject)] = &[
    ("CHEM", Subject::Chemistry),
    ("PHY", Subject::Physics),
    ("MATH", Subject::Maths),
    ("BIO", Subject::Biology),
    ("BOT", Subject::Botany),
    ("ZOO", Subject::Zoology),
];

/// Names the subject a header cell refers to, if any.
///
/// Matching is substring containment on the upper-cased, trimmed text.
pub fn classify_subject(text: &str) -> Option<Subject> {
    let upper = text.trim().to_uppercase();
    HEADER_KEYWORDS
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, subject)| *subject)
}
