use core::ops::Range;

use log::{debug, trace};

use crate::factory::nodes::{RenderNode, SpacerNode, WordNode};
use crate::font::baseline::{BaselineSet, resolve_padded_baselines};
use crate::font::metrics::FontMetricsProvider;
use crate::glyphs::{BreakWeight, GlyphClass, GlyphStore};
use crate::pipeline::{
    BreakProducer, ClusterProducer, END_OF_TEXT, GlyphClassifier, START_OF_TEXT, STRIPPED_ANCHOR,
    SpacingProducer, WhitespaceFilter,
};
use crate::style::{TextStyle, WhitespaceMode};

/// Streaming word assembler.
///
/// Turns a chunked stream of styled code points into [`RenderNode`]s.
/// One instance serves one logical text flow at a time, delimited by
/// [`start_text`](Self::start_text) and [`finish_text`](Self::finish_text);
/// the instance persists across flows for the same output target. Not safe
/// for concurrent use; confine one factory to one thread.
///
/// An in-progress word and any accumulated inter-word margin are retained
/// across `create_text` calls and only surface once a boundary closes
/// them, so feeding a text in one chunk or many produces identical nodes.
pub struct WordTextFactory<P: FontMetricsProvider> {
    provider: P,
    accumulating: bool,

    clusters: ClusterProducer,
    whitespace: WhitespaceFilter,
    classifier: GlyphClassifier,
    breaks: BreakProducer,
    spacing: SpacingProducer,
    /// Fingerprint of the style the producers were built from.
    style: Option<TextStyle>,

    store: GlyphStore,
    margin_width: f32,
    margin_spaces: u32,
    cached_baselines: Option<BaselineSet>,

    // Reused scratch buffers.
    filtered: Vec<char>,
    cluster_buf: String,
    cluster_ranges: Vec<Range<usize>>,
}

impl<P: FontMetricsProvider> WordTextFactory<P> {
    pub fn new(provider: P) -> Self {
        let style = TextStyle::default();
        let supports_spacing = provider.supports_spacing();
        Self {
            provider,
            accumulating: false,
            clusters: ClusterProducer::new(),
            whitespace: WhitespaceFilter::new(style.whitespace),
            classifier: GlyphClassifier::new(),
            breaks: BreakProducer::new(style.wrap),
            spacing: SpacingProducer::new(&style, supports_spacing),
            style: None,
            store: GlyphStore::new(),
            margin_width: 0.0,
            margin_spaces: 0,
            cached_baselines: None,
            filtered: Vec::new(),
            cluster_buf: String::new(),
            cluster_ranges: Vec::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Open a new text flow and prime the producers with the
    /// start-of-text pseudo code point.
    pub fn start_text(&mut self) {
        assert!(!self.accumulating, "start_text called mid-flow");
        self.prime(START_OF_TEXT);
        self.accumulating = true;
    }

    /// Feed the next chunk of the flow, a byte range of `text`, and
    /// collect every node closed by it. An empty range is valid and
    /// yields no nodes.
    pub fn create_text(
        &mut self,
        text: &str,
        range: Range<usize>,
        style: &TextStyle,
    ) -> Vec<RenderNode> {
        assert!(self.accumulating, "create_text called before start_text");
        self.refresh_style(style);
        self.clusters.push(&text[range]);

        let mut nodes = Vec::new();
        let mut buf = std::mem::take(&mut self.cluster_buf);
        let mut ranges = std::mem::take(&mut self.cluster_ranges);
        self.clusters.drain_closed(&mut buf, &mut ranges);
        for r in &ranges {
            self.process_cluster(&buf[r.clone()], &mut nodes);
        }
        self.cluster_buf = buf;
        self.cluster_ranges = ranges;
        nodes
    }

    /// Close the flow: flush the pending cluster, feed the end-of-text
    /// pseudo code point, emit any retained margin and partial word, and
    /// reset per-flow state.
    pub fn finish_text(&mut self) -> Vec<RenderNode> {
        assert!(self.accumulating, "finish_text called before start_text");

        let mut nodes = Vec::new();
        let mut buf = std::mem::take(&mut self.cluster_buf);
        let mut ranges = std::mem::take(&mut self.cluster_ranges);
        self.clusters.finish(&mut buf, &mut ranges);
        for r in &ranges {
            self.process_cluster(&buf[r.clone()], &mut nodes);
        }
        self.cluster_buf = buf;
        self.cluster_ranges = ranges;

        self.prime(END_OF_TEXT);
        self.close_word(&mut nodes, false);

        trace!("text flow finished, {} node(s) in tail", nodes.len());
        self.style = None;
        self.cached_baselines = None;
        self.clusters.reset();
        self.accumulating = false;
        nodes
    }

    /// Run a pseudo code point through all four producers so they can
    /// prime or flush internal state symmetrically with real content.
    fn prime(&mut self, pseudo: u32) {
        let _ = self.whitespace.filter(pseudo);
        let _ = self.classifier.classify(pseudo);
        let _ = self.breaks.weight(pseudo);
        let _ = self.spacing.advance(pseudo, &self.provider);
    }

    /// Rebuild the style-bound producers when the style fingerprint
    /// changed; leave them untouched otherwise so mid-flow state (kerning
    /// pairs) survives chunking.
    fn refresh_style(&mut self, style: &TextStyle) {
        if self.style.as_ref() == Some(style) {
            return;
        }
        debug!("style changed, rebuilding pipeline producers");
        self.whitespace = WhitespaceFilter::new(style.whitespace);
        self.breaks = BreakProducer::new(style.wrap);
        self.spacing = SpacingProducer::new(style, self.provider.supports_spacing());
        self.cached_baselines = None;
        self.style = Some(style.clone());
    }

    fn process_cluster(&mut self, cluster: &str, nodes: &mut Vec<RenderNode>) {
        let member_count = cluster.chars().count();

        self.filtered.clear();
        for (i, ch) in cluster.chars().enumerate() {
            match self.whitespace.filter_char(ch) {
                Some(filtered) => self.filtered.push(filtered),
                // A stripped lead must not drop the cluster anchor when
                // extra code points follow it.
                None => {
                    if i == 0 && member_count > 1 {
                        self.filtered.push(STRIPPED_ANCHOR);
                    }
                }
            }
        }
        let Some(&last) = self.filtered.last() else {
            return;
        };

        // The last surviving member decides classification and break
        // weight; size metrics take the max over all members, kerning is
        // the first member's gap to the previous cluster.
        let class = self.classifier.classify(last as u32);
        let weight = self.breaks.weight(last as u32);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        let mut baseline = 0.0f32;
        let mut kerning = 0.0f32;
        for i in 0..self.filtered.len() {
            let cp = self.filtered[i];
            let m = self.spacing.advance(cp as u32, &self.provider);
            width = width.max(m.width);
            height = height.max(m.height);
            baseline = baseline.max(m.baseline);
            if i == 0 {
                kerning = m.kerning;
            }
        }

        if class == GlyphClass::Space && weight == BreakWeight::Line {
            // Forced break: never merges with later content.
            self.close_word(nodes, true);
        } else if class == GlyphClass::Space
            && weight == BreakWeight::Word
            && self.whitespace.mode() != WhitespaceMode::Preserve
        {
            if !self.store.is_empty() {
                self.close_word(nodes, false);
            }
            let word_spacing = self.style.as_ref().map_or(0.0, |s| s.word_spacing);
            self.margin_width += width + word_spacing;
            self.margin_spaces += 1;
        } else {
            self.store.add_glyph(
                &self.filtered,
                weight,
                class,
                self.spacing.spacing(),
                width,
                height,
                baseline,
                kerning,
            );
            if weight != BreakWeight::None {
                self.close_word(nodes, weight == BreakWeight::Line);
            }
        }
    }

    /// Flush the leading margin, then the open word. A forced close with
    /// no glyphs still emits a zero-glyph break marker.
    fn close_word(&mut self, nodes: &mut Vec<RenderNode>, force: bool) {
        self.flush_margin(nodes);
        if self.store.is_empty() && !force {
            return;
        }

        let representative = if self.store.is_empty() {
            ' '
        } else {
            self.store.glyph(0).codepoint()
        };
        let baseline = self.baselines_for(representative);
        let glyphs = self.store.lock();
        let length = glyphs.len();
        nodes.push(RenderNode::Word(WordNode {
            baseline,
            glyphs,
            offset: 0,
            length,
            script: self.provider.script(representative),
            force_linebreak: force,
        }));
        self.store.clear();
    }

    fn flush_margin(&mut self, nodes: &mut Vec<RenderNode>) {
        if self.margin_spaces == 0 {
            return;
        }
        nodes.push(RenderNode::Spacer(SpacerNode {
            width: self.margin_width,
            collapsed: true,
            space_count: self.margin_spaces,
        }));
        self.margin_width = 0.0;
        self.margin_spaces = 0;
    }

    fn baselines_for(&mut self, cp: char) -> BaselineSet {
        if self.provider.is_uniform() {
            if let Some(cached) = self.cached_baselines {
                return cached;
            }
        }
        let resolved = resolve_padded_baselines(cp, &self.provider);
        if self.provider.is_uniform() {
            self.cached_baselines = Some(resolved);
        }
        resolved
    }
}
