//! Greedy highest-card decomposition with language-directed merging.
//!
//! The engine for Western European languages. A locale supplies a strictly
//! decreasing table of magnitude cards such as `(1000, "thousand")` and
//! `(90, "ninety")`, plus a merge function that composes the text of two
//! adjacent word pairs. The engine finds the highest card not exceeding the
//! value, splits into quotient, card, and remainder, recurses, and reduces
//! the resulting tree pairwise from the left.
//!
//! Composition stays language-agnostic at the value level: merging `(l, r)`
//! multiplies when `r` is the larger value ("two" × "hundred") and adds
//! otherwise ("twenty" + "one"). Only the text is up to the locale, which
//! is where elision ("one ten" → "ten"), hyphens, and scale pluralization
//! happen.
//!
//! # Invariants
//!
//! 1. The card table is strictly decreasing and ends with the 1 and 0
//!    cards; anything else is a defect in locale data and panics at
//!    construction.
//! 2. Reducing a decomposition yields a pair whose value equals the input.
//! 3. Every recursive split strictly decreases the value: the matched card
//!    exceeds 1, so quotient and remainder are both smaller than the input.
//!
//! # Failure Modes
//!
//! - [`Error::MissingVocabulary`] when the 1-card is the best match for a
//!   value above 1, i.e. the table has a gap below its smallest compound
//!   card.
//! - [`Error::MissingVocabulary`] for values at or beyond the square of the
//!   largest card, where the quotient would reach the card itself and no
//!   multiplicative reading exists.

use std::collections::VecDeque;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::convert::IntegerWords;
use crate::error::Error;

/// A magnitude card: a threshold value and its word.
#[derive(Debug, Clone)]
pub struct Card {
    pub value: BigUint,
    pub word: &'static str,
}

/// A (text, value) pair produced and consumed during reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub text: String,
    pub value: BigUint,
}

impl WordPair {
    #[must_use]
    pub fn new(text: impl Into<String>, value: BigUint) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    /// Whether the value is below `limit`. Values beyond `u64` are never
    /// below any limit.
    #[must_use]
    pub fn below(&self, limit: u64) -> bool {
        self.value.to_u64().is_some_and(|v| v < limit)
    }

    /// Whether the value is `limit` or more.
    #[must_use]
    pub fn at_least(&self, limit: u64) -> bool {
        !self.below(limit)
    }

    /// Whether the value is exactly `exact`.
    #[must_use]
    pub fn is(&self, exact: u64) -> bool {
        self.value.to_u64().is_some_and(|v| v == exact)
    }
}

/// One node of a partially reduced decomposition.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(WordPair),
    List(Vec<Node>),
}

/// Language-supplied text composition for two adjacent pairs.
pub type MergeFn = fn(&WordPair, &WordPair) -> String;

/// The CardMatch engine.
pub struct CardsEngine {
    lang: &'static str,
    cards: Vec<Card>,
    merge: MergeFn,
}

impl CardsEngine {
    /// Build from a strictly decreasing `(value, word)` table.
    ///
    /// # Panics
    ///
    /// Panics if the table is not strictly decreasing or does not end with
    /// the 1 and 0 cards. Both are construction-time defects in locale
    /// data, not runtime conditions.
    #[must_use]
    pub fn new(
        lang: &'static str,
        table: &'static [(u128, &'static str)],
        merge: MergeFn,
    ) -> Self {
        assert!(
            table.windows(2).all(|pair| pair[0].0 > pair[1].0),
            "{lang}: card table must be strictly decreasing"
        );
        let len = table.len();
        assert!(
            len >= 2 && table[len - 1].0 == 0 && table[len - 2].0 == 1,
            "{lang}: card table must end with the 1 and 0 cards"
        );
        let cards = table
            .iter()
            .map(|&(value, word)| Card {
                value: BigUint::from(value),
                word,
            })
            .collect();
        Self { lang, cards, merge }
    }

    fn zero_word(&self) -> &'static str {
        self.cards[self.cards.len() - 1].word
    }

    fn one_word(&self) -> &'static str {
        self.cards[self.cards.len() - 2].word
    }

    /// Split a value into a decomposition tree along the card table.
    ///
    /// A quotient of exactly one still produces an explicit 1-leaf, so the
    /// locale merge decides whether "one hundred" keeps or elides its
    /// "one".
    pub fn decompose(&self, value: &BigUint) -> Result<Node, Error> {
        if value.is_zero() {
            return Ok(Node::Leaf(WordPair::new(self.zero_word(), BigUint::zero())));
        }
        for card in &self.cards {
            if card.value.is_zero() || card.value > *value {
                continue;
            }
            if card.value.is_one() {
                if value.is_one() {
                    return Ok(Node::Leaf(WordPair::new(self.one_word(), BigUint::one())));
                }
                // The 1-card matched a compound value: the table has a gap.
                return Err(self.no_card_for(value));
            }

            let (quotient, remainder) = value.div_rem(&card.value);
            // A quotient reaching the card itself would reduce additively
            // ("ten decillion decillion") and corrupt the value; the table
            // simply has no word for numbers this large.
            if quotient >= card.value {
                return Err(self.no_card_for(value));
            }
            let mut nodes = Vec::with_capacity(3);
            if quotient.is_one() {
                nodes.push(Node::Leaf(WordPair::new(self.one_word(), BigUint::one())));
            } else {
                nodes.push(self.decompose(&quotient)?);
            }
            nodes.push(Node::Leaf(WordPair::new(card.word, card.value.clone())));
            if !remainder.is_zero() {
                nodes.push(self.decompose(&remainder)?);
            }
            return Ok(Node::List(nodes));
        }
        Err(self.no_card_for(value))
    }

    /// Reduce a tree to a single pair, merging left to right.
    #[must_use]
    pub fn reduce(&self, node: Node) -> WordPair {
        match node {
            Node::Leaf(pair) => pair,
            Node::List(nodes) => {
                let mut worklist: VecDeque<WordPair> =
                    nodes.into_iter().map(|n| self.reduce(n)).collect();
                let mut merged = match worklist.pop_front() {
                    Some(first) => first,
                    None => WordPair::new(self.zero_word(), BigUint::zero()),
                };
                while let Some(next) = worklist.pop_front() {
                    merged = self.merge_pair(&merged, &next);
                }
                merged
            }
        }
    }

    fn merge_pair(&self, left: &WordPair, right: &WordPair) -> WordPair {
        let value = if right.value > left.value {
            &left.value * &right.value
        } else {
            &left.value + &right.value
        };
        WordPair {
            text: (self.merge)(left, right),
            value,
        }
    }

    fn no_card_for(&self, value: &BigUint) -> Error {
        Error::MissingVocabulary {
            lang: self.lang,
            item: format!("card covering {value}"),
        }
    }
}

impl IntegerWords for CardsEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        let tree = self.decompose(value)?;
        Ok(self.reduce(tree).text)
    }

    fn digit_word(&self, digit: u8) -> Result<&'static str, Error> {
        let wanted = BigUint::from(digit);
        self.cards
            .iter()
            .find(|card| card.value == wanted)
            .map(|card| card.word)
            .ok_or_else(|| self.no_card_for(&wanted))
    }
}
