use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

pub mod table;

pub use table::{Cell, SheetGrid};

/// Class level a chapter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassLevel {
    #[default]
    #[serde(rename = "11th")]
    Eleventh,
    #[serde(rename = "12th")]
    Twelfth,
}

impl ClassLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassLevel::Eleventh => "11th",
            ClassLevel::Twelfth => "12th",
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subjects recognised in sheet headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Chemistry,
    Physics,
    Maths,
    Biology,
    Botany,
    Zoology,
}

impl Subject {
    /// Display name, also used as the document key.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Chemistry => "Chemistry",
            Subject::Physics => "Physics",
            Subject::Maths => "Maths",
            Subject::Biology => "Biology",
            Subject::Botany => "Botany",
            Subject::Zoology => "Zoology",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chapters of one column partitioned by class level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassSplit {
    #[serde(rename = "11th")]
    pub eleventh: Vec<String>,
    #[serde(rename = "12th")]
    pub twelfth: Vec<String>,
}

/// Per-subject accumulation of [`ClassSplit`]s across the columns of a sheet.
pub type SubjectBucket = ClassSplit;

impl ClassSplit {
    pub fn bucket(&self, level: ClassLevel) -> &[String] {
        match level {
            ClassLevel::Eleventh => &self.eleventh,
            ClassLevel::Twelfth => &self.twelfth,
        }
    }

    pub fn push(&mut self, level: ClassLevel, chapter: String) {
        match level {
            ClassLevel::Eleventh => self.eleventh.push(chapter),
            ClassLevel::Twelfth => self.twelfth.push(chapter),
        }
    }

    /// Concatenates `other` onto this split, class bucket by class bucket.
    pub fn extend(&mut self, other: ClassSplit) {
        self.eleventh.extend(other.eleventh);
        self.twelfth.extend(other.twelfth);
    }

    pub fn len(&self) -> usize {
        self.eleventh.len() + self.twelfth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw chapter list pulled from a single data column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedColumn {
    pub subject: Subject,
    pub initial_class: ClassLevel,
    pub chapters: Vec<String>,
}

/// Map that serializes its entries in insertion order.
///
/// `insert` on an existing key replaces the value in place; `remove` shifts the
/// following entries down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key).map(|idx| &mut self.entries[idx].1)
    }

    /// Returns the value for `key`, appending `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let idx = match self.position(key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key.to_string(), default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Inserts `value`, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Value stored under a subject key of an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubjectEntry {
    /// Plain `{"11th": [...], "12th": [...]}` bucket.
    Bucket(SubjectBucket),
    /// Sub-subject buckets grouped under one key, e.g. Biology → Botany/Zoology.
    Grouped(OrderedMap<SubjectBucket>),
}

impl SubjectEntry {
    pub fn as_bucket(&self) -> Option<&SubjectBucket> {
        match self {
            SubjectEntry::Bucket(bucket) => Some(bucket),
            SubjectEntry::Grouped(_) => None,
        }
    }

    pub fn as_grouped(&self) -> Option<&OrderedMap<SubjectBucket>> {
        match self {
            SubjectEntry::Grouped(groups) => Some(groups),
            SubjectEntry::Bucket(_) => None,
        }
    }

    /// Number of chapters held by the entry across all groups.
    pub fn chapter_count(&self) -> usize {
        match self {
            SubjectEntry::Bucket(bucket) => bucket.len(),
            SubjectEntry::Grouped(groups) => groups.iter().map(|(_, bucket)| bucket.len()).sum(),
        }
    }
}

/// Subject name → chapters for one exam sheet.
pub type ExamDocument = OrderedMap<SubjectEntry>;

/// Exam name → [`ExamDocument`]; the sole output artifact.
pub type FinalDocument = OrderedMap<ExamDocument>;
