use crate::font::metrics::FontMetricsProvider;

/// Number of baseline slots in a resolved vector.
pub const BASELINE_COUNT: usize = 10;

/// Resolved baseline vector for one word, measured from the before-edge.
///
/// Slot order is fixed; see the associated index constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineSet {
    pub baselines: [f32; BASELINE_COUNT],
    /// Index of the dominant baseline within `baselines`.
    pub dominant: usize,
    pub underline_position: f32,
    pub strikethrough_position: f32,
}

impl BaselineSet {
    pub const BEFORE_EDGE: usize = 0;
    pub const TEXT_BEFORE_EDGE: usize = 1;
    pub const HANGING: usize = 2;
    pub const CENTRAL: usize = 3;
    pub const MIDDLE: usize = 4;
    pub const MATHEMATICAL: usize = 5;
    pub const ALPHABETIC: usize = 6;
    pub const IDEOGRAPHIC: usize = 7;
    pub const TEXT_AFTER_EDGE: usize = 8;
    pub const AFTER_EDGE: usize = 9;

    /// Position of the dominant baseline.
    pub fn dominant_baseline(&self) -> f32 {
        self.baselines[self.dominant]
    }
}

/// Resolve the baseline vector for a representative code point.
///
/// Before-edge is 0, after-edge is ascent + descent, script baselines come
/// from the provider's table; underline/strikethrough offsets are copied
/// verbatim.
pub fn resolve_baselines<P: FontMetricsProvider + ?Sized>(cp: char, provider: &P) -> BaselineSet {
    let height = provider.ascent() + provider.descent();
    let script = provider.script_baselines(cp);

    let mut baselines = [0.0; BASELINE_COUNT];
    baselines[BaselineSet::BEFORE_EDGE] = 0.0;
    baselines[BaselineSet::TEXT_BEFORE_EDGE] = 0.0;
    baselines[BaselineSet::HANGING] = script.hanging;
    baselines[BaselineSet::CENTRAL] = script.central;
    baselines[BaselineSet::MIDDLE] = script.middle;
    baselines[BaselineSet::MATHEMATICAL] = script.mathematical;
    baselines[BaselineSet::ALPHABETIC] = script.alphabetic;
    baselines[BaselineSet::IDEOGRAPHIC] = script.ideographic;
    baselines[BaselineSet::TEXT_AFTER_EDGE] = height;
    baselines[BaselineSet::AFTER_EDGE] = height;

    BaselineSet {
        baselines,
        dominant: BaselineSet::ALPHABETIC,
        underline_position: provider.underline_position(),
        strikethrough_position: provider.strikethrough_position(),
    }
}

/// Like [`resolve_baselines`], but corrects the text edges for fonts whose
/// declared ascent + descent is suspiciously close to the font size.
///
/// Some fonts declare ascent + descent within 0.5% of the em size, which
/// clips accents and descenders when used as the line extent. When
/// `ascent + descent` falls in `[1.0, 1.005] × font_size`, both text edges
/// are substituted with `1.3 × font_size`; otherwise the nominal font size
/// is used unmodified.
pub fn resolve_padded_baselines<P: FontMetricsProvider + ?Sized>(
    cp: char,
    provider: &P,
) -> BaselineSet {
    let mut set = resolve_baselines(cp, provider);
    let font_size = provider.font_size();
    let height = provider.ascent() + provider.descent();

    let edge = if font_size > 0.0 {
        let ratio = height / font_size;
        if (1.0..=1.005).contains(&ratio) {
            font_size * 1.3
        } else {
            font_size
        }
    } else {
        font_size
    };

    set.baselines[BaselineSet::TEXT_BEFORE_EDGE] = edge;
    set.baselines[BaselineSet::TEXT_AFTER_EDGE] = edge;
    set
}
