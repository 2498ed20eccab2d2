use chapters_tools::extract::{classify_subject, locate_class_bands};
use chapters_tools::model::{Cell, ClassLevel, Subject};

#[test]
fn classify_subject_matches_keywords() {
    assert_eq!(classify_subject("CHEMISTRY"), Some(Subject::Chemistry));
    assert_eq!(classify_subject("Physics (PCM)"), Some(Subject::Physics));
    assert_eq!(classify_subject("mathematics"), Some(Subject::Maths));
    assert_eq!(classify_subject("BIOLOGY"), Some(Subject::Biology));
    assert_eq!(classify_subject("  Botany "), Some(Subject::Botany));
    assert_eq!(classify_subject("ZOOLOGY"), Some(Subject::Zoology));
}

#[test]
fn classify_subject_respects_priority() {
    assert_eq!(classify_subject("BIOPHYSICS"), Some(Subject::Physics));
    assert_eq!(classify_subject("BIOCHEMISTRY"), Some(Subject::Chemistry));
    assert_eq!(classify_subject("BOTANY & ZOOLOGY"), Some(Subject::Botany));
}

#[test]
fn classify_subject_without_keyword_is_none() {
    assert_eq!(classify_subject(""), None);
    assert_eq!(classify_subject("Chapters"), None);
    assert_eq!(classify_subject("History"), None);
}

#[test]
fn class_bands_carry_forward_from_trigger() {
    let row = vec![
        Cell::Empty,
        Cell::text("11th Std"),
        Cell::Empty,
        Cell::text("Remarks"),
        Cell::text("12TH"),
        Cell::Empty,
    ];
    let bands = locate_class_bands(&row);

    assert_eq!(bands.get(&0), None);
    assert_eq!(bands.get(&1), Some(&ClassLevel::Eleventh));
    assert_eq!(bands.get(&2), Some(&ClassLevel::Eleventh));
    assert_eq!(bands.get(&3), Some(&ClassLevel::Eleventh));
    assert_eq!(bands.get(&4), Some(&ClassLevel::Twelfth));
    assert_eq!(bands.get(&5), Some(&ClassLevel::Twelfth));
}

#[test]
fn class_bands_prefer_eleven_when_both_appear() {
    let row = vec![Cell::text("Class 11 & 12"), Cell::text("Class XII")];
    let bands = locate_class_bands(&row);

    assert_eq!(bands.get(&0), Some(&ClassLevel::Eleventh));
    assert_eq!(bands.get(&1), Some(&ClassLevel::Eleventh));
}

#[test]
fn class_bands_empty_without_trigger() {
    let row = vec![Cell::text("JEE MAIN"), Cell::Empty];
    assert!(locate_class_bands(&row).is_empty());
}

#[test]
fn nan_like_cells_collapse_to_empty() {
    assert!(Cell::text("nan").is_empty());
    assert!(Cell::text("N/A").is_empty());
    assert!(!Cell::text("Nano Chemistry").is_empty());
    assert_eq!(Cell::text("  Optics \n").normalized(), "Optics");
}
