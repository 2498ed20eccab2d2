use chapters_tools::extract::segment::{NOISE_KEYWORDS, Segmenter};
use chapters_tools::extract::{is_noise, segment};
use chapters_tools::model::{ClassLevel, ClassSplit};
use proptest::prelude::*;

fn split(eleventh: &[&str], twelfth: &[&str]) -> ClassSplit {
    ClassSplit {
        eleventh: eleventh.iter().map(|item| item.to_string()).collect(),
        twelfth: twelfth.iter().map(|item| item.to_string()).collect(),
    }
}

#[test]
fn abbreviation_banner_switches_to_twelfth() {
    let raw = ["Kinematics", "Units", "PHY", "Rotational Motion", "SHM"];
    let result = segment(&raw, ClassLevel::Eleventh, "Physics");

    assert_eq!(
        result,
        split(&["Kinematics", "Units"], &["Rotational Motion", "SHM"])
    );
}

#[test]
fn full_subject_name_is_a_trigger() {
    let raw = ["Algebra", "Calculus", "MATHS", "Vectors"];
    let result = segment(&raw, ClassLevel::Eleventh, "Maths");

    assert_eq!(result, split(&["Algebra", "Calculus"], &["Vectors"]));
}

#[test]
fn trigger_slack_bounds_long_titles() {
    let raw = ["Chemical Bonding", "Chem 12", "CHEM 2", "Electrochemistry"];
    let result = segment(&raw, ClassLevel::Eleventh, "Chemistry");

    assert_eq!(
        result,
        split(&["Chemical Bonding", "Chem 12"], &["Electrochemistry"])
    );
}

#[test]
fn repeated_trigger_in_twelfth_is_kept_as_content() {
    let from_eleventh = segment(&["Units", "PHY 2", "Optics"], ClassLevel::Eleventh, "Physics");
    assert_eq!(from_eleventh, split(&["Units"], &["Optics"]));

    let from_twelfth = segment(&["Optics", "PHY 2", "Waves"], ClassLevel::Twelfth, "Physics");
    assert_eq!(from_twelfth, split(&[], &["Optics", "PHY 2", "Waves"]));
}

#[test]
fn eleventh_banner_reopens_eleventh_section() {
    let raw = ["Units", "XII", "Optics", "11TH", "Vectors"];
    let result = segment(&raw, ClassLevel::Eleventh, "Physics");

    assert_eq!(result, split(&["Units", "Vectors"], &["Optics"]));
}

#[test]
fn long_items_mentioning_eleventh_are_content() {
    let raw = ["Revision of 11th syllabus"];
    let result = segment(&raw, ClassLevel::Twelfth, "Physics");

    assert_eq!(result, split(&[], &["Revision of 11th syllabus"]));
}

#[test]
fn noise_tokens_are_dropped() {
    let raw = [
        "TOTAL",
        "Questions Extracted: 40",
        "Mole Concept",
        "CHAPTERS",
        "XI",
    ];
    let result = segment(&raw, ClassLevel::Eleventh, "Chemistry");

    assert_eq!(result, split(&["Mole Concept"], &[]));
}

#[test]
fn noise_keywords_never_reach_output() {
    for subject in ["Physics", "Chemistry", "Maths", "Biology", "Botany", "Zoology"] {
        for initial in [ClassLevel::Eleventh, ClassLevel::Twelfth] {
            let result = segment(NOISE_KEYWORDS, initial, subject);
            assert!(result.is_empty(), "{subject} from {initial}: {result:?}");
        }
    }
    assert!(is_noise("maths"));
    assert!(!is_noise("Mathematical Reasoning"));
}

#[test]
fn trigger_set_follows_subject_name() {
    let physics = Segmenter::new(ClassLevel::Eleventh, "Physics");
    assert_eq!(
        physics.triggers(),
        ["12TH", "XII", "CLASS 12", "PHY", "PHYSICS"]
    );

    let unknown = Segmenter::new(ClassLevel::Eleventh, "History");
    assert_eq!(unknown.triggers(), ["12TH", "XII", "CLASS 12", "HISTORY"]);

    let unnamed = Segmenter::new(ClassLevel::Eleventh, "");
    assert_eq!(unnamed.triggers(), ["12TH", "XII", "CLASS 12"]);
}

#[test]
fn segmenter_tracks_active_class() {
    let mut segmenter = Segmenter::new(ClassLevel::Eleventh, "Biology");
    segmenter.feed("The Living World");
    assert_eq!(segmenter.current_class(), ClassLevel::Eleventh);
    segmenter.feed("Class 12");
    assert_eq!(segmenter.current_class(), ClassLevel::Twelfth);
    segmenter.feed("Reproduction");

    let result = segmenter.finish();
    assert_eq!(result.bucket(ClassLevel::Eleventh), ["The Living World"]);
    assert_eq!(result.bucket(ClassLevel::Twelfth), ["Reproduction"]);
}

proptest! {
    #[test]
    fn plain_chapters_keep_order(items in proptest::collection::vec("[abdefgjklmnopqrsw]{5,20}", 0..30)) {
        let result = segment(&items, ClassLevel::Eleventh, "Chemistry");
        prop_assert_eq!(&result.eleventh, &items);
        prop_assert!(result.twelfth.is_empty());
    }

    #[test]
    fn single_banner_splits_around_it(
        items in proptest::collection::vec("[abdefgjklmnopqrsw]{5,20}", 0..30),
        cut in 0usize..30,
    ) {
        let cut = cut.min(items.len());
        let mut raw = items.clone();
        raw.insert(cut, "CHEM".to_string());

        let result = segment(&raw, ClassLevel::Eleventh, "Chemistry");
        prop_assert_eq!(&result.eleventh[..], &items[..cut]);
        prop_assert_eq!(&result.twelfth[..], &items[cut..]);
    }
}
