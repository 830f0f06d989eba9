//! Signature registry service
//!
//! Holds the magic-byte signatures known to the built-in oracle and
//! identifies a file header against them. Signatures sharing an offset are
//! compiled into one anchored Aho-Corasick automaton, so a header is checked
//! against every signature at that offset in a single pass.

use crate::domain::entities::FileSignature;
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};

/// Automaton for all signatures anchored at the same offset
#[derive(Debug)]
struct OffsetMatcher {
    offset: usize,
    automaton: AhoCorasick,
    /// Maps pattern index to signature index
    pattern_map: Vec<usize>,
}

/// Registry of file signatures for content-type identification
///
/// # Example
///
/// ```
/// use checkfile::domain::entities::FileSignature;
/// use checkfile::domain::services::SignatureRegistry;
///
/// let mut registry = SignatureRegistry::new();
/// registry.register(FileSignature::new("application/pdf", *b"%PDF-"));
/// registry.build_pattern_matcher();
///
/// let sig = registry.identify(b"%PDF-1.7\n").unwrap();
/// assert_eq!(sig.mime(), "application/pdf");
/// ```
#[derive(Debug, Default)]
pub struct SignatureRegistry {
    signatures: Vec<FileSignature>,
    /// Compiled matchers, ordered by offset. Empty until built.
    matchers: Vec<OffsetMatcher>,
}

impl SignatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a list of signatures, ready for matching
    pub fn with_signatures(signatures: impl IntoIterator<Item = FileSignature>) -> Self {
        let mut registry = Self::new();
        for sig in signatures {
            registry.register(sig);
        }
        registry.build_pattern_matcher();
        registry
    }

    /// Registers a new file signature.
    ///
    /// Call [`build_pattern_matcher`](Self::build_pattern_matcher) afterwards;
    /// until then matching falls back to a linear scan.
    pub fn register(&mut self, signature: FileSignature) {
        self.signatures.push(signature);
        self.matchers.clear();
    }

    /// Compiles the registered signatures into anchored automata
    pub fn build_pattern_matcher(&mut self) {
        let mut offsets: Vec<usize> = self.signatures.iter().map(|s| s.offset()).collect();
        offsets.sort_unstable();
        offsets.dedup();

        let mut matchers = Vec::with_capacity(offsets.len());
        for offset in offsets {
            let pattern_map: Vec<usize> = self
                .signatures
                .iter()
                .enumerate()
                .filter(|(_, s)| s.offset() == offset)
                .map(|(idx, _)| idx)
                .collect();
            let patterns = pattern_map.iter().map(|&idx| self.signatures[idx].magic());

            let built = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .start_kind(StartKind::Anchored)
                .build(patterns);

            match built {
                Ok(automaton) => matchers.push(OffsetMatcher {
                    offset,
                    automaton,
                    pattern_map,
                }),
                Err(e) => {
                    tracing::warn!("cannot build signature matcher at offset {offset}: {e}");
                    self.matchers.clear();
                    return;
                }
            }
        }
        self.matchers = matchers;
    }

    /// Identifies a file header.
    ///
    /// Lower offsets win over higher ones; at the same offset the longest
    /// magic wins.
    pub fn identify(&self, header: &[u8]) -> Option<&FileSignature> {
        if self.matchers.is_empty() {
            return self.identify_linear(header);
        }

        for matcher in &self.matchers {
            if matcher.offset > header.len() {
                continue;
            }
            let input = Input::new(header)
                .range(matcher.offset..)
                .anchored(Anchored::Yes);
            if let Some(m) = matcher.automaton.find(input) {
                let idx = matcher.pattern_map[m.pattern().as_usize()];
                return Some(&self.signatures[idx]);
            }
        }
        None
    }

    fn identify_linear(&self, header: &[u8]) -> Option<&FileSignature> {
        let mut candidates: Vec<&FileSignature> =
            self.signatures.iter().filter(|s| s.matches(header)).collect();
        candidates.sort_by_key(|s| (s.offset(), std::cmp::Reverse(s.magic().len())));
        candidates.into_iter().next()
    }

    /// Returns all registered signatures
    pub fn signatures(&self) -> &[FileSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
