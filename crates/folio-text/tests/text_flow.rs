//! End-to-end properties of the shaping pipeline, exercised with a
//! deterministic in-memory metrics provider.

use std::cell::Cell;

use folio_text::{
    FontMetricsProvider, RenderNode, ScriptBaselines, TextStyle, WhitespaceMode, WordTextFactory,
    resolve_padded_baselines, split_text_lines,
};

struct TestMetrics {
    uniform: bool,
    baseline_lookups: Cell<usize>,
}

impl TestMetrics {
    fn new() -> Self {
        Self {
            uniform: false,
            baseline_lookups: Cell::new(0),
        }
    }

    fn uniform() -> Self {
        Self {
            uniform: true,
            baseline_lookups: Cell::new(0),
        }
    }
}

impl FontMetricsProvider for TestMetrics {
    fn font_size(&self) -> f32 {
        10.0
    }

    fn ascent(&self) -> f32 {
        8.0
    }

    fn descent(&self) -> f32 {
        2.0
    }

    fn advance_width(&self, cp: char) -> f32 {
        if cp == ' ' { 3.0 } else { 6.0 }
    }

    fn underline_position(&self) -> f32 {
        -1.0
    }

    fn strikethrough_position(&self) -> f32 {
        4.0
    }

    fn kerning(&self, left: char, right: char) -> f32 {
        if left == 'A' && right == 'V' { -1.5 } else { 0.0 }
    }

    fn script_baselines(&self, _cp: char) -> ScriptBaselines {
        self.baseline_lookups.set(self.baseline_lookups.get() + 1);
        ScriptBaselines {
            hanging: 1.6,
            alphabetic: 8.0,
            central: 5.0,
            ideographic: 10.0,
            mathematical: 4.0,
            middle: 4.0,
        }
    }

    fn is_uniform(&self) -> bool {
        self.uniform
    }
}

/// Stable projection of a node list for equality checks.
fn summarize(nodes: &[RenderNode]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| match node {
            RenderNode::Word(w) => format!(
                "W text={:?} force={} min={} pref={} max={}",
                w.text(),
                w.force_linebreak,
                w.min_width(),
                w.preferred_width(),
                w.max_width()
            ),
            RenderNode::Spacer(s) => {
                format!(
                    "S width={} count={} collapsed={}",
                    s.width, s.space_count, s.collapsed
                )
            }
        })
        .collect()
}

/// Feed `text` in chunks split at the given byte offsets and concatenate
/// every returned node.
fn run_chunked(text: &str, splits: &[usize], style: &TextStyle) -> Vec<RenderNode> {
    let provider = TestMetrics::new();
    let mut factory = WordTextFactory::new(provider);
    factory.start_text();

    let mut nodes = Vec::new();
    let mut start = 0;
    for &split in splits {
        nodes.extend(factory.create_text(text, start..split, style));
        start = split;
    }
    nodes.extend(factory.create_text(text, start..text.len(), style));
    nodes.extend(factory.finish_text());
    nodes
}

#[test]
fn chunking_does_not_change_the_output() {
    let text = "Hello  world\nfoo e\u{301}ga AV";
    for style in [
        TextStyle::default(),
        TextStyle {
            whitespace: WhitespaceMode::PreserveBreaks,
            ..TextStyle::default()
        },
        TextStyle {
            whitespace: WhitespaceMode::Preserve,
            ..TextStyle::default()
        },
    ] {
        let whole = summarize(&run_chunked(text, &[], &style));

        // Every char its own chunk.
        let per_char: Vec<usize> = text.char_indices().map(|(i, _)| i).skip(1).collect();
        assert_eq!(summarize(&run_chunked(text, &per_char, &style)), whole);

        // A split right between 'e' and its combining acute.
        let mid_cluster = text.find('\u{301}').unwrap();
        assert_eq!(
            summarize(&run_chunked(text, &[mid_cluster], &style)),
            whole
        );

        // A split inside the space run.
        let mid_spaces = text.find("  ").unwrap() + 1;
        assert_eq!(summarize(&run_chunked(text, &[mid_spaces], &style)), whole);
    }
}

#[test]
fn collapse_folds_space_runs_into_one_spacer() {
    for n in 1..=5usize {
        let text = format!("aa{}bb", " ".repeat(n));
        let nodes = run_chunked(&text, &[], &TextStyle::default());
        assert_eq!(nodes.len(), 3, "run of {n} spaces");
        match &nodes[1] {
            RenderNode::Spacer(s) => {
                assert_eq!(s.space_count as usize, n);
                assert_eq!(s.width, 3.0 * n as f32);
                assert!(s.collapsed);
            }
            other => panic!("expected spacer, got {other:?}"),
        }
    }
}

#[test]
fn preserve_keeps_every_space_as_a_glyph() {
    let style = TextStyle {
        whitespace: WhitespaceMode::Preserve,
        ..TextStyle::default()
    };
    let nodes = run_chunked("aa   bb", &[], &style);
    assert!(nodes.iter().all(|n| matches!(n, RenderNode::Word(_))));
    let glyph_count: usize = nodes
        .iter()
        .map(|n| match n {
            RenderNode::Word(w) => w.length,
            RenderNode::Spacer(_) => 0,
        })
        .sum();
    // All seven code points survive as individual glyphs.
    assert_eq!(glyph_count, 7);
}

#[test]
fn forced_break_without_content_is_never_lost() {
    let style = TextStyle {
        whitespace: WhitespaceMode::PreserveBreaks,
        ..TextStyle::default()
    };
    let nodes = run_chunked("\n", &[], &style);
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        RenderNode::Word(w) => {
            assert!(w.force_linebreak);
            assert_eq!(w.length, 0);
            assert_eq!(w.text(), "");
        }
        other => panic!("expected word, got {other:?}"),
    }
}

#[test]
fn astral_code_points_round_trip_as_surrogate_pairs() {
    let nodes = run_chunked("a\u{1D11E}b", &[], &TextStyle::default());
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        RenderNode::Word(w) => {
            assert_eq!(w.text(), "a\u{1D11E}b");
            let units = w.glyphs.text_utf16(0..w.length);
            assert_eq!(units, vec![0x0061, 0xD834, 0xDD1E, 0x0062]);
        }
        other => panic!("expected word, got {other:?}"),
    }
}

#[test]
fn frozen_words_survive_later_flows() {
    let provider = TestMetrics::new();
    let mut factory = WordTextFactory::new(provider);
    let style = TextStyle::default();

    factory.start_text();
    let mut first = factory.create_text("abc", 0..3, &style);
    first.extend(factory.finish_text());

    // The builder is cleared and reused; the frozen word must not notice.
    factory.start_text();
    let mut second = factory.create_text("xyz qqq", 0..7, &style);
    second.extend(factory.finish_text());

    match &first[0] {
        RenderNode::Word(w) => assert_eq!(w.text(), "abc"),
        other => panic!("expected word, got {other:?}"),
    }
}

#[test]
fn padded_baselines_pin_the_threshold() {
    struct Narrow {
        ascent: f32,
    }

    impl FontMetricsProvider for Narrow {
        fn font_size(&self) -> f32 {
            10.0
        }

        fn ascent(&self) -> f32 {
            self.ascent
        }

        fn descent(&self) -> f32 {
            2.0
        }

        fn advance_width(&self, _cp: char) -> f32 {
            6.0
        }

        fn underline_position(&self) -> f32 {
            -1.0
        }

        fn strikethrough_position(&self) -> f32 {
            4.0
        }
    }

    use folio_text::BaselineSet;

    // ascent + descent = 1.003 x font size: inside the defect window.
    let padded = resolve_padded_baselines('a', &Narrow { ascent: 8.03 });
    assert_eq!(padded.baselines[BaselineSet::TEXT_BEFORE_EDGE], 13.0);
    assert_eq!(padded.baselines[BaselineSet::TEXT_AFTER_EDGE], 13.0);

    // ascent + descent = 1.1 x font size: healthy, keep the font size.
    let nominal = resolve_padded_baselines('a', &Narrow { ascent: 9.0 });
    assert_eq!(nominal.baselines[BaselineSet::TEXT_BEFORE_EDGE], 10.0);
    assert_eq!(nominal.baselines[BaselineSet::TEXT_AFTER_EDGE], 10.0);
}

#[test]
fn uniform_metrics_resolve_baselines_once_per_flow() {
    let provider = TestMetrics::uniform();
    let mut factory = WordTextFactory::new(&provider);
    let style = TextStyle::default();

    factory.start_text();
    let mut nodes = factory.create_text("ab cd ef", 0..8, &style);
    nodes.extend(factory.finish_text());
    assert_eq!(
        nodes
            .iter()
            .filter(|n| matches!(n, RenderNode::Word(_)))
            .count(),
        3
    );
    assert_eq!(provider.baseline_lookups.get(), 1);

    // A fresh flow re-resolves once.
    factory.start_text();
    let mut nodes = factory.create_text("gh ij", 0..5, &style);
    nodes.extend(factory.finish_text());
    assert_eq!(provider.baseline_lookups.get(), 2);
}

#[test]
fn non_uniform_metrics_resolve_per_word() {
    let provider = TestMetrics::new();
    let mut factory = WordTextFactory::new(&provider);
    let style = TextStyle::default();

    factory.start_text();
    let mut nodes = factory.create_text("ab cd ef", 0..8, &style);
    nodes.extend(factory.finish_text());
    assert_eq!(provider.baseline_lookups.get(), 3);
}

#[test]
fn splitter_terminator_table() {
    let crlf = split_text_lines("a\r\nb");
    assert_eq!(crlf.len(), 2);
    assert_eq!(crlf[0].text, "a");
    assert_eq!(crlf[1].text, "b");
    assert!(crlf[0].force_linebreak);
    assert!(!crlf[1].force_linebreak);

    let lfcr = split_text_lines("a\n\rb");
    assert_eq!(lfcr.len(), 2);
    assert_eq!(lfcr[0].text, "a");
    assert_eq!(lfcr[1].text, "b");

    let doubled = split_text_lines("a\r\rb");
    assert_eq!(
        doubled.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
        vec!["a", "", "b"]
    );
}
