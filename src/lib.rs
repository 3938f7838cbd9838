#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! Find every dictionary word buildable from a rack of Scrabble tiles.
//!
//! The dictionary is stored in a [Lexicon](crate::lexicon::Lexicon), a prefix trie with
//! `O(len)` word and prefix queries. [RackWords](crate::search::RackWords) then runs a
//! backtracking search over the rack, walking the trie as it goes so that any branch
//! whose prefix cannot extend to a dictionary word is abandoned immediately. Blank
//! tiles (written `_`) can stand in for any letter.
//!
//! The search core is independent of scoring: [score](crate::score) ranks the result
//! with a per-letter value table that can be swapped out for a different edition.
//!
//! # Examples
//!
//! ```
//! use rack_solver::lexicon::Lexicon;
//! use rack_solver::rack::Rack;
//! use rack_solver::score::{ranked_words, LetterValues};
//!
//! let words = ["ACE", "BA", "CAB", "BE", "CE", "FACE", "BARE", "CARE"];
//! let lexicon = Lexicon::build(words).unwrap();
//!
//! // one blank tile, usable as any letter
//! let rack = Rack::from_letters("ABC_E").unwrap();
//!
//! let ranked = ranked_words(&lexicon, rack, &LetterValues::STANDARD);
//! assert_eq!(
//!     ranked,
//!     vec!["FACE", "CAB", "BARE", "CARE", "ACE", "BA", "BE", "CE"],
//! );
//! ```
//!
//! ## Streaming words without collecting them
//!
//! ```
//! use internal_iterator::InternalIterator;
//! use rack_solver::lexicon::Lexicon;
//! use rack_solver::rack::Rack;
//! use rack_solver::search::RackWords;
//!
//! let lexicon = Lexicon::build(["CAB", "BA"]).unwrap();
//! let rack = Rack::from_letters("ABC").unwrap();
//!
//! let found = RackWords::new(&lexicon, rack).any(|word| word == "CAB");
//! assert!(found);
//! ```

pub mod letter;
pub mod lexicon;
pub mod rack;
pub mod score;
pub mod search;

pub mod util;
