use std::collections::BTreeMap;

use crate::model::{Cell, ClassLevel};

/// Maps each column of the banner row to the class level announced at or
/// before it.
///
/// A cell containing `11` switches the band to 11th, otherwise one containing
/// `12` switches it to 12th. Columns left of the first such cell are absent;
/// callers default them to [`ClassLevel::Eleventh`].
pub fn locate_class_bands(top_row: &[Cell]) -> BTreeMap<usize, ClassLevel> {
    let mut bands = BTreeMap::new();
    let mut current: Option<ClassLevel> = None;

    for (col_idx, cell) in top_row.iter().enumerate() {
        let text = cell.normalized().to_uppercase();
        if text.contains("11") {
            current = Some(ClassLevel::Eleventh);
        } else if text.contains("12") {
            current = Some(ClassLevel::Twelfth);
        }

        if let Some(level) = current {
            bands.insert(col_idx, level);
        }
    }

    bands
}
