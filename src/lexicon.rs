use std::fmt::{Debug, Formatter};

use crate::letter::{InvalidLetter, Letter, LETTER_COUNT};

/// One trie node. Each node exclusively owns its children.
pub(crate) struct LexiconNode {
    children: [Option<Box<LexiconNode>>; LETTER_COUNT],
    is_word: bool,
}

/// A dictionary stored as a prefix trie.
///
/// Both [is_word](Lexicon::is_word) and [has_prefix](Lexicon::has_prefix) run in
/// `O(len)` independent of dictionary size, which is what makes exhaustive rack
/// search tractable: a branch dies the moment its prefix leaves the trie.
///
/// Build once, then query; the trie is never mutated during search.
pub struct Lexicon {
    root: LexiconNode,
    words: usize,
}

impl LexiconNode {
    fn new() -> Self {
        const NONE: Option<Box<LexiconNode>> = None;
        LexiconNode {
            children: [NONE; LETTER_COUNT],
            is_word: false,
        }
    }

    pub(crate) fn is_word(&self) -> bool {
        self.is_word
    }

    pub(crate) fn child(&self, letter: Letter) -> Option<&LexiconNode> {
        self.children[letter.index() as usize].as_deref()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = (Letter, &LexiconNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.as_deref().map(move |c| (Letter::from_index(i as u8), c)))
    }
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon {
            root: LexiconNode::new(),
            words: 0,
        }
    }

    /// Build a lexicon from any collection of words.
    pub fn build<I>(words: I) -> Result<Lexicon, InvalidLetter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// Insert a word, case-normalized. Idempotent.
    ///
    /// A word with a non-letter character is rejected whole, leaving the trie
    /// untouched.
    pub fn insert(&mut self, word: &str) -> Result<(), InvalidLetter> {
        let letters = word
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = &mut self.root;
        for letter in letters {
            let child = node.children[letter.index() as usize].get_or_insert_with(|| Box::new(LexiconNode::new()));
            node = &mut **child;
        }

        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
        Ok(())
    }

    /// Whether `word` was inserted. Absent paths and non-letter characters are
    /// `false`, never an error.
    pub fn is_word(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.is_word)
    }

    /// Whether any inserted word starts with `prefix`. Always true for the
    /// empty prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub(crate) fn root(&self) -> &LexiconNode {
        &self.root
    }

    fn walk(&self, s: &str) -> Option<&LexiconNode> {
        let mut node = &self.root;
        for c in s.chars() {
            node = node.child(Letter::from_char(c).ok()?)?;
        }
        Some(node)
    }
}

impl Debug for Lexicon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lexicon({} words)", self.words)
    }
}
