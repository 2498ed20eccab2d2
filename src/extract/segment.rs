use crate::model::{ClassLevel, ClassSplit};

/// Triggers that announce the 12th-class section for every subject.
pub const COMMON_TRIGGERS: &[&str] = &["12TH", "XII", "CLASS 12"];

/// Abbreviations used as section banners, keyed by upper-cased subject name.
pub const SUBJECT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("CHEMISTRY", "CHEM"),
    ("PHYSICS", "PHY"),
    ("MATHS", "MATH"),
    ("BIOLOGY", "BIO"),
    ("BOTANY", "BOT"),
    ("ZOOLOGY", "ZOO"),
];

/// Structural tokens that never count as chapters.
pub const NOISE_KEYWORDS: &[&str] = &[
    "CHEM",
    "PHY",
    "MATH",
    "BIO",
    "BOTANY",
    "ZOOLOGY",
    "BIOLOGY",
    "PHYSICS",
    "CHEMISTRY",
    "MATHS",
    "CHAPTERS",
    "QUESTIONS",
    "TOTAL",
    "EXTRACTED",
    "11TH",
    "12TH",
    "XI",
    "XII",
];

const NOISE_PHRASE: &str = "QUESTIONS EXTRACTED";

/// Extra characters an item may carry around a trigger and still be a banner.
const TRIGGER_SLACK: usize = 3;

/// Items shorter than this that mention `11TH` re-open the 11th section.
const ELEVENTH_BANNER_MAX_LEN: usize = 10;

/// Single-pass splitter for one column's chapter list.
///
/// Holds the active class level and the trigger set for the subject being
/// scanned; feed items in source order and call [`Segmenter::finish`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    triggers: Vec<String>,
    current: ClassLevel,
    split: ClassSplit,
}

impl Segmenter {
    pub fn new(initial_class: ClassLevel, subject_name: &str) -> Self {
        let subject = subject_name.to_uppercase();
        let mut triggers: Vec<String> = COMMON_TRIGGERS.iter().map(|t| t.to_string()).collect();
        if !subject.is_empty() {
            if let Some((_, abbreviation)) = SUBJECT_ABBREVIATIONS
                .iter()
                .find(|(name, _)| *name == subject)
            {
                triggers.push(abbreviation.to_string());
            }
            triggers.push(subject);
        }

        Self {
            triggers,
            current: initial_class,
            split: ClassSplit::default(),
        }
    }

    pub fn current_class(&self) -> ClassLevel {
        self.current
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Routes one item to the active bucket, or consumes it as a banner or
    /// noise.
    pub fn feed(&mut self, item: &str) {
        let upper = item.to_uppercase();
        let upper_len = upper.chars().count();

        let is_trigger = self
            .triggers
            .iter()
            .any(|trigger| trigger_matches(trigger, &upper, upper_len));

        // Once in 12th a repeated banner is ordinary content.
        if is_trigger && self.current == ClassLevel::Eleventh {
            self.current = ClassLevel::Twelfth;
            return;
        }

        if upper.contains("11TH") && upper_len < ELEVENTH_BANNER_MAX_LEN {
            self.current = ClassLevel::Eleventh;
            return;
        }

        if is_noise(&upper) {
            return;
        }

        self.split.push(self.current, item.to_string());
    }

    pub fn finish(self) -> ClassSplit {
        self.split
    }
}

/// Splits `raw` into 11th and 12th buckets starting from `initial_class`.
pub fn segment<S: AsRef<str>>(
    raw: &[S],
    initial_class: ClassLevel,
    subject_name: &str,
) -> ClassSplit {
    let mut segmenter = Segmenter::new(initial_class, subject_name);
    for item in raw {
        segmenter.feed(item.as_ref());
    }
    segmenter.finish()
}

/// Exact match, or containment in an item at most `TRIGGER_SLACK - 1`
/// characters longer than the trigger.
fn trigger_matches(trigger: &str, upper: &str, upper_len: usize) -> bool {
    trigger == upper
        || (upper.contains(trigger) && upper_len < trigger.chars().count() + TRIGGER_SLACK)
}

/// Whether an item is a structural token rather than a chapter.
pub fn is_noise(item: &str) -> bool {
    let upper = item.to_uppercase();
    NOISE_KEYWORDS.contains(&upper.as_str()) || upper.contains(NOISE_PHRASE)
}
