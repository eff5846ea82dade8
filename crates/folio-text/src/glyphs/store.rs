use core::ops::Range;
use std::sync::Arc;

use crate::glyphs::{BreakWeight, GlyphClass, Spacing};

/// Packed per-glyph record. Code points live in a shared arena; the record
/// holds a span into it.
#[derive(Debug, Clone, Copy)]
struct GlyphRecord {
    cp_start: u32,
    cp_len: u32,
    break_weight: BreakWeight,
    class: GlyphClass,
    width: f32,
    height: f32,
    baseline: f32,
    kerning: f32,
}

/// Borrowed view of one glyph record.
///
/// Cheap to copy; valid for as long as the store it came from is borrowed.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRef<'a> {
    codepoints: &'a [char],
    spacing: Spacing,
    record: GlyphRecord,
}

impl<'a> GlyphRef<'a> {
    /// The cluster's base code point.
    pub fn codepoint(&self) -> char {
        self.codepoints[0]
    }

    /// All code points of the cluster, base first.
    pub fn codepoints(&self) -> &'a [char] {
        self.codepoints
    }

    /// Number of code points beyond the base.
    pub fn extra_count(&self) -> usize {
        self.codepoints.len() - 1
    }

    pub fn break_weight(&self) -> BreakWeight {
        self.record.break_weight
    }

    pub fn class(&self) -> GlyphClass {
        self.record.class
    }

    pub fn width(&self) -> f32 {
        self.record.width
    }

    pub fn height(&self) -> f32 {
        self.record.height
    }

    pub fn baseline(&self) -> f32 {
        self.record.baseline
    }

    pub fn kerning(&self) -> f32 {
        self.record.kerning
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }
}

fn glyph_at<'a>(
    records: &'a [GlyphRecord],
    codepoints: &'a [char],
    spacings: &'a [Spacing],
    index: usize,
) -> GlyphRef<'a> {
    assert!(
        index < records.len(),
        "glyph index {index} out of bounds (len {})",
        records.len()
    );
    let record = records[index];
    let start = record.cp_start as usize;
    let end = start + record.cp_len as usize;
    GlyphRef {
        codepoints: &codepoints[start..end],
        spacing: spacings[index],
        record,
    }
}

fn text_range(records: &[GlyphRecord], codepoints: &[char], range: Range<usize>) -> String {
    assert!(
        range.start <= range.end && range.end <= records.len(),
        "glyph range {range:?} out of bounds (len {})",
        records.len()
    );
    let mut out = String::new();
    for record in &records[range] {
        let start = record.cp_start as usize;
        let end = start + record.cp_len as usize;
        out.extend(&codepoints[start..end]);
    }
    out
}

fn text_range_utf16(records: &[GlyphRecord], codepoints: &[char], range: Range<usize>) -> Vec<u16> {
    assert!(
        range.start <= range.end && range.end <= records.len(),
        "glyph range {range:?} out of bounds (len {})",
        records.len()
    );
    let mut out = Vec::new();
    let mut unit = [0u16; 2];
    for record in &records[range] {
        let start = record.cp_start as usize;
        let end = start + record.cp_len as usize;
        for &cp in &codepoints[start..end] {
            out.extend_from_slice(cp.encode_utf16(&mut unit));
        }
    }
    out
}

/// Growable builder for shaped glyph records.
///
/// Layout is columnar: fixed-stride records, a code-point arena and a
/// parallel spacing column, so appends never move existing data apart from
/// geometric growth. `clear` keeps the capacity for reuse across words.
#[derive(Debug, Default)]
pub struct GlyphStore {
    records: Vec<GlyphRecord>,
    codepoints: Vec<char>,
    spacings: Vec<Spacing>,
}

impl GlyphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one glyph record. The slice holds the cluster's code points,
    /// base first; it must not be empty.
    #[allow(clippy::too_many_arguments)]
    pub fn add_glyph(
        &mut self,
        codepoints: &[char],
        break_weight: BreakWeight,
        class: GlyphClass,
        spacing: Spacing,
        width: f32,
        height: f32,
        baseline: f32,
        kerning: f32,
    ) {
        assert!(!codepoints.is_empty(), "glyph cluster must not be empty");
        let cp_start = self.codepoints.len() as u32;
        self.codepoints.extend_from_slice(codepoints);
        self.records.push(GlyphRecord {
            cp_start,
            cp_len: codepoints.len() as u32,
            break_weight,
            class,
            width,
            height,
            baseline,
            kerning,
        });
        self.spacings.push(spacing);
    }

    /// Borrowed view of record `index`. Panics when out of bounds.
    pub fn glyph(&self, index: usize) -> GlyphRef<'_> {
        glyph_at(&self.records, &self.codepoints, &self.spacings, index)
    }

    /// Reconstruct the text of a glyph index range.
    pub fn text(&self, range: Range<usize>) -> String {
        text_range(&self.records, &self.codepoints, range)
    }

    /// Reconstruct the text of a glyph index range as UTF-16 code units,
    /// with surrogate pairs for code points beyond the BMP.
    pub fn text_utf16(&self, range: Range<usize>) -> Vec<u16> {
        text_range_utf16(&self.records, &self.codepoints, range)
    }

    /// Snapshot the current content into an immutable store. The builder
    /// keeps its content and capacity and never aliases the snapshot.
    pub fn lock(&self) -> FrozenGlyphs {
        FrozenGlyphs {
            inner: Arc::new(FrozenInner {
                records: self.records.clone().into_boxed_slice(),
                codepoints: self.codepoints.clone().into_boxed_slice(),
                spacings: self.spacings.clone().into_boxed_slice(),
            }),
        }
    }

    /// Reset to empty without releasing capacity.
    pub fn clear(&mut self) {
        self.records.clear();
        self.codepoints.clear();
        self.spacings.clear();
    }
}

#[derive(Debug)]
struct FrozenInner {
    records: Box<[GlyphRecord]>,
    codepoints: Box<[char]>,
    spacings: Box<[Spacing]>,
}

/// Immutable, right-sized snapshot of a [`GlyphStore`].
///
/// Clones share the backing allocation and are safe to read from multiple
/// threads.
#[derive(Debug, Clone)]
pub struct FrozenGlyphs {
    inner: Arc<FrozenInner>,
}

static_assertions::assert_impl_all!(FrozenGlyphs: Send, Sync);

impl FrozenGlyphs {
    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    pub fn glyph(&self, index: usize) -> GlyphRef<'_> {
        glyph_at(
            &self.inner.records,
            &self.inner.codepoints,
            &self.inner.spacings,
            index,
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = GlyphRef<'_>> {
        (0..self.len()).map(move |i| self.glyph(i))
    }

    pub fn text(&self, range: Range<usize>) -> String {
        text_range(&self.inner.records, &self.inner.codepoints, range)
    }

    pub fn text_utf16(&self, range: Range<usize>) -> Vec<u16> {
        text_range_utf16(&self.inner.records, &self.inner.codepoints, range)
    }
}
