use std::collections::HashSet;
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::lexicon::{Lexicon, LexiconNode};
use crate::rack::Rack;

/// Backtracking enumeration of every lexicon word buildable from a rack.
///
/// The recursion walks the trie alongside the rack, so a branch is abandoned the
/// instant its prefix has no continuation in the lexicon. Blank tiles branch
/// only over letters the current trie node can actually extend, which is
/// equivalent to trying the whole alphabet and pruning.
///
/// The same word can be yielded more than once when a blank can stand in for a
/// letter also held on the rack; collect into a set ([find_words]) to dedupe.
#[derive(Debug)]
pub struct RackWords<'a> {
    lexicon: &'a Lexicon,
    rack: Rack,
}

impl<'a> RackWords<'a> {
    pub fn new(lexicon: &'a Lexicon, rack: Rack) -> Self {
        RackWords { lexicon, rack }
    }

    #[must_use]
    fn recurse<R>(
        &self,
        node: &LexiconNode,
        rack: Rack,
        curr: &mut String,
        f: &mut impl FnMut(String) -> ControlFlow<R>,
    ) -> ControlFlow<R> {
        if cfg!(debug_assertions) {
            rack.assert_valid();
        }

        // the empty prefix is never a word
        if node.is_word() && !curr.is_empty() {
            f(curr.clone())?;
        }

        // place a rack letter
        for (letter, _) in rack.letter_counts() {
            if let Some(child) = node.child(letter) {
                let mut next = rack;
                next.remove(letter, 1);

                curr.push(letter.to_char());
                self.recurse(child, next, curr, f)?;
                curr.pop();
            }
        }

        // spend a blank on any letter the trie can extend
        if rack.wildcards() > 0 {
            let mut next = rack;
            next.use_wildcard();

            for (letter, child) in node.children() {
                curr.push(letter.to_char());
                self.recurse(child, next, curr, f)?;
                curr.pop();
            }
        }

        ControlFlow::Continue(())
    }
}

impl InternalIterator for RackWords<'_> {
    type Item = String;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let mut curr = String::new();
        self.recurse(self.lexicon.root(), self.rack, &mut curr, &mut f)?;
        debug_assert!(curr.is_empty());

        ControlFlow::Continue(())
    }
}

/// The distinct words buildable from `rack`, as a freshly created set.
pub fn find_words(lexicon: &Lexicon, rack: Rack) -> HashSet<String> {
    let mut result = HashSet::new();
    RackWords::new(lexicon, rack).for_each(|word| {
        result.insert(word);
    });
    result
}
