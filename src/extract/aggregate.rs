use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::extract::alias::{ExamAliases, NEET_EXAM};
use crate::extract::class_band::locate_class_bands;
use crate::extract::header::classify_subject;
use crate::extract::segment::segment;
use crate::model::{
    Cell, ClassLevel, ExamDocument, ExtractedColumn, FinalDocument, OrderedMap, SheetGrid,
    Subject, SubjectBucket, SubjectEntry,
};

/// Marker text, matched case-insensitively, on the row above the chapters.
pub const CHAPTERS_MARKER: &str = "chapters";

const MARKER_FIRST_ROW: usize = 2;
const MARKER_LAST_ROW: usize = 4;
const PRIMARY_HEADER_ROW: usize = 1;
const SECONDARY_HEADER_ROW: usize = 2;

/// Legacy subject key folded into [`Subject::Maths`] across the document.
const LEGACY_MATHS_KEY: &str = "Math";

/// Builds the document for every sheet, keyed by resolved exam name.
///
/// A later sheet resolving to an exam already present replaces its content in
/// place.
#[instrument(level = "info", skip_all, fields(sheet_count = sheets.len()))]
pub fn aggregate_workbook(sheets: &[SheetGrid], aliases: &ExamAliases) -> FinalDocument {
    let mut document = FinalDocument::new();

    for sheet in sheets {
        let exam = aliases.resolve(&sheet.name);
        info!(sheet = %sheet.name, exam, "processing sheet");
        let exam_document = aggregate(sheet, exam);
        if document.insert(exam, exam_document).is_some() {
            warn!(sheet = %sheet.name, exam, "sheet replaced an earlier sheet for the same exam");
        }
    }

    for exam_document in document.values_mut() {
        if let Some(entry) = exam_document.remove(LEGACY_MATHS_KEY) {
            exam_document.insert(Subject::Maths.name(), entry);
        }
    }

    document
}

/// Extracts every data column of `sheet` and merges them per subject.
///
/// Columns without a chapters marker or without a recognisable subject are
/// skipped; they never produce an error.
pub fn aggregate(sheet: &SheetGrid, exam: &str) -> ExamDocument {
    let width = sheet.width();
    let mut banner = sheet.row(0).to_vec();
    banner.resize(width, Cell::Empty);
    let bands = locate_class_bands(&banner);

    let mut buckets: OrderedMap<SubjectBucket> = OrderedMap::new();
    for col_idx in 0..width {
        let Some(column) = extract_column(sheet, col_idx, &bands, exam) else {
            debug!(sheet = %sheet.name, column = col_idx, "column carries no chapters");
            continue;
        };

        let split = segment(&column.chapters, column.initial_class, column.subject.name());
        info!(
            exam,
            column = col_idx,
            subject = %column.subject,
            eleventh = split.eleventh.len(),
            twelfth = split.twelfth.len(),
            "extracted column"
        );
        buckets
            .get_or_insert_with(column.subject.name(), SubjectBucket::default)
            .extend(split);
    }

    if exam == NEET_EXAM {
        group_biology(buckets)
    } else {
        into_document(buckets)
    }
}

/// Reads the chapter list of one column, or `None` when the column is not a
/// data column.
pub fn extract_column(
    sheet: &SheetGrid,
    col_idx: usize,
    bands: &BTreeMap<usize, ClassLevel>,
    exam: &str,
) -> Option<ExtractedColumn> {
    let start_row = find_chapters_start(sheet, col_idx)?;

    let primary = classify_subject(&sheet.cell(PRIMARY_HEADER_ROW, col_idx).normalized());
    let secondary = classify_subject(&sheet.cell(SECONDARY_HEADER_ROW, col_idx).normalized());
    let subject = resolve_subject(primary, secondary, exam)?;

    let chapters = (start_row..sheet.height())
        .map(|row| sheet.cell(row, col_idx).normalized())
        .filter(|text| !text.is_empty() && !text.eq_ignore_ascii_case("nan"))
        .collect();

    Some(ExtractedColumn {
        subject,
        initial_class: bands.get(&col_idx).copied().unwrap_or_default(),
        chapters,
    })
}

/// Row index where chapters begin: one past the first marker row within the
/// header window.
pub fn find_chapters_start(sheet: &SheetGrid, col_idx: usize) -> Option<usize> {
    (MARKER_FIRST_ROW..=MARKER_LAST_ROW)
        .take_while(|row| *row < sheet.height())
        .find(|row| {
            sheet
                .cell(*row, col_idx)
                .normalized()
                .to_lowercase()
                .contains(CHAPTERS_MARKER)
        })
        .map(|row| row + 1)
}

/// Picks the column subject from the two header rows.
///
/// The primary header decides, except on NEET where a Botany or Zoology
/// secondary header takes precedence.
pub fn resolve_subject(
    primary: Option<Subject>,
    secondary: Option<Subject>,
    exam: &str,
) -> Option<Subject> {
    match secondary {
        Some(sub @ (Subject::Botany | Subject::Zoology)) if exam == NEET_EXAM => Some(sub),
        _ => primary,
    }
}

fn into_document(buckets: OrderedMap<SubjectBucket>) -> ExamDocument {
    let mut document = ExamDocument::new();
    for (subject, bucket) in buckets {
        document.insert(subject, SubjectEntry::Bucket(bucket));
    }
    document
}

fn group_biology(mut buckets: OrderedMap<SubjectBucket>) -> ExamDocument {
    let mut groups = OrderedMap::new();
    for sub in [Subject::Botany, Subject::Zoology] {
        if let Some(bucket) = buckets.remove(sub.name()) {
            groups.insert(sub.name(), bucket);
        }
    }

    let mut document = into_document(buckets);
    if groups.is_empty() {
        return document;
    }

    let grouped = SubjectEntry::Grouped(groups);
    if let Some(displaced) = document.insert(Subject::Biology.name(), grouped) {
        warn!(
            displaced_chapters = displaced.chapter_count(),
            "flat Biology bucket replaced by Botany/Zoology grouping"
        );
    }
    document
}
