use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Incremental grapheme cluster producer.
///
/// Text arrives in arbitrary chunks; a cluster is only closed once the
/// next cluster has started (or the flow ends), so a cluster spanning two
/// chunks is never split. Appending text can only extend the trailing
/// cluster, which is why holding back exactly one is sufficient.
#[derive(Debug, Default)]
pub struct ClusterProducer {
    pending: String,
}

impl ClusterProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next chunk of the flow.
    pub fn push(&mut self, chunk: &str) {
        self.pending.push_str(chunk);
    }

    /// Move every closed cluster into `buf`, recording one byte range per
    /// cluster in `ranges`. The trailing open cluster stays pending.
    pub fn drain_closed(&mut self, buf: &mut String, ranges: &mut Vec<Range<usize>>) {
        buf.clear();
        ranges.clear();

        let last_start = match self.pending.grapheme_indices(true).last() {
            Some((start, _)) => start,
            None => return,
        };
        if last_start == 0 {
            return;
        }

        buf.push_str(&self.pending[..last_start]);
        for (start, g) in buf.grapheme_indices(true) {
            ranges.push(start..start + g.len());
        }
        self.pending.drain(..last_start);
    }

    /// Move every remaining cluster (the open tail included) into `buf`
    /// and reset.
    pub fn finish(&mut self, buf: &mut String, ranges: &mut Vec<Range<usize>>) {
        buf.clear();
        ranges.clear();

        buf.push_str(&self.pending);
        for (start, g) in buf.grapheme_indices(true) {
            ranges.push(start..start + g.len());
        }
        self.pending.clear();
    }

    /// Discard any pending text.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(producer: &mut ClusterProducer) -> Vec<String> {
        let mut buf = String::new();
        let mut ranges = Vec::new();
        producer.drain_closed(&mut buf, &mut ranges);
        ranges.into_iter().map(|r| buf[r].to_string()).collect()
    }

    fn flush(producer: &mut ClusterProducer) -> Vec<String> {
        let mut buf = String::new();
        let mut ranges = Vec::new();
        producer.finish(&mut buf, &mut ranges);
        ranges.into_iter().map(|r| buf[r].to_string()).collect()
    }

    #[test]
    fn last_cluster_is_held_back() {
        let mut p = ClusterProducer::new();
        p.push("abc");
        assert_eq!(drain(&mut p), vec!["a", "b"]);
        assert_eq!(flush(&mut p), vec!["c"]);
    }

    #[test]
    fn combining_mark_joins_across_chunks() {
        let mut p = ClusterProducer::new();
        p.push("ae");
        assert_eq!(drain(&mut p), vec!["a"]);
        // The combining acute must merge with the pending 'e'.
        p.push("\u{301}x");
        assert_eq!(drain(&mut p), vec!["e\u{301}"]);
        assert_eq!(flush(&mut p), vec!["x"]);
    }

    #[test]
    fn crlf_joins_across_chunks() {
        let mut p = ClusterProducer::new();
        p.push("a\r");
        assert_eq!(drain(&mut p), vec!["a"]);
        p.push("\nb");
        assert_eq!(drain(&mut p), vec!["\r\n"]);
        assert_eq!(flush(&mut p), vec!["b"]);
    }

    #[test]
    fn empty_input_produces_nothing() {
        let mut p = ClusterProducer::new();
        assert_eq!(drain(&mut p), Vec::<String>::new());
        assert_eq!(flush(&mut p), Vec::<String>::new());
    }
}
