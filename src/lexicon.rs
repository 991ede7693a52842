//! Kansei word lexicon: curated descriptive words keyed by bucket-label pair.
//!
//! The lexicon is a frozen 6×6 table, one cell per `(x, y)` pair, indexed by
//! [`BucketLabel::index`]. Each cell holds one to four words. Nothing here
//! mutates after compilation.
//!
//! A quadrant's word list is the concatenation of every cell inside it, outer
//! loop over x ascending, inner loop over y ascending. No deduplication is
//! applied. Neutral quadrants, [`Quadrant::Unclassifiable`], and empty
//! aggregations all fall back to [`NOT_APPLICABLE`].

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Deref;

use crate::bucket::BucketLabel;
use crate::region::Quadrant;

/// Sole word returned when a quadrant has no lexicon entries.
pub const NOT_APPLICABLE: &str = "not applicable";

/// Frozen lexicon layout: `table[x.index()][y.index()]`.
pub type LexiconTable = [[&'static [&'static str]; 6]; 6];

// Rows are x = -3, -2, -1, 1, 2, 3; columns are y in the same order.
static CURATED: LexiconTable = [
    // x = -3
    [
        &["絶望", "恐怖", "悲劇"],
        &["後悔", "苦い記憶", "屈辱"],
        &["切ない", "物悲しい", "哀愁"],
        &["思い出", "懐かしさ", "優しさ"],
        &["ほっとする", "癒される", "ふるさと"],
        &["懐かしい", "微笑ましい", "優しい"],
    ],
    // x = -2
    [
        &["喪失", "崩壊", "絶体絶命"],
        &["屈折", "恨み", "悔しさ"],
        &["寂しさ", "胸苦しさ", "胸が痛む"],
        &["涙", "静けさ", "柔らかい"],
        &["安らぎ", "やさしさ", "包まれる"],
        &["思い出深い", "しみじみ", "穏やか"],
    ],
    // x = -1
    [
        &["深い悲しみ", "絶望的", "闇"],
        &["孤独", "心配", "閉塞感"],
        &["感傷的", "涙ぐむ", "やるせない"],
        &["静か", "控えめな幸福", "静かな喜び"],
        &["安心", "和やか", "満たされる"],
        &["ノスタルジー", "郷愁", "情緒的"],
    ],
    // x = 1
    [
        &["虚無", "混乱", "崩れ落ちる"],
        &["無力感", "疲弊", "空虚"],
        &["不安", "焦り", "違和感"],
        &["落ち着く", "平穏", "自然体"],
        &["安定", "信頼", "心地よい"],
        &["感動", "感激", "胸が熱くなる"],
    ],
    // x = 2
    [
        &["絶望感", "破滅", "終焉"],
        &["焦燥", "恐れ", "動揺"],
        &["迷い", "不確か", "揺らぎ"],
        &["興味", "関心", "好奇心"],
        &["期待", "楽しみ", "前向き"],
        &["ワクワク", "高揚", "胸躍る"],
    ],
    // x = 3
    [
        &["滅亡", "無価値", "未来喪失感"],
        &["不信", "諦め", "破綻の予感"],
        &["漠然とした不安", "予測不能", "緊張感"],
        &["予感", "兆し", "可能性の芽"],
        &["成長", "挑戦", "飛躍", "未来志向"],
        &["希望", "夢", "可能性", "輝き"],
    ],
];

// ─── WordList ───────────────────────────────────────────────────────────────

/// Ordered words for one quadrant, or the single-element fallback.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordList(Vec<&'static str>);

impl WordList {
    /// The `["not applicable"]` fallback list.
    pub fn not_applicable() -> Self {
        let mut words = Vec::with_capacity(1);
        words.push(NOT_APPLICABLE);
        Self(words)
    }

    /// True if this list is exactly the fallback.
    pub fn is_not_applicable(&self) -> bool {
        self.0.len() == 1 && self.0[0] == NOT_APPLICABLE
    }

    /// Borrow the words as a slice.
    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    /// Consume the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<&'static str> {
        self.0
    }
}

impl Deref for WordList {
    type Target = [&'static str];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a &'static str;
    type IntoIter = core::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─── Lexicon ────────────────────────────────────────────────────────────────

/// Read-only view over a frozen [`LexiconTable`].
///
/// `Copy` and pointer-sized; share it freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct Lexicon {
    table: &'static LexiconTable,
}

impl Lexicon {
    /// The curated kansei word lexicon.
    pub const fn curated() -> Self {
        Self { table: &CURATED }
    }

    /// Wrap an alternative frozen table.
    pub const fn from_table(table: &'static LexiconTable) -> Self {
        Self { table }
    }

    /// Words stored for a single `(x, y)` pair. Empty when the cell is empty.
    pub fn entry(&self, x: BucketLabel, y: BucketLabel) -> &'static [&'static str] {
        self.table[x.index()][y.index()]
    }

    /// Aggregate the word list for `region`.
    pub fn words_for(&self, region: Quadrant) -> WordList {
        let Some((era, tone)) = region.parts() else {
            tracing::trace!(region = region.label(), "no era for region; using fallback");
            return WordList::not_applicable();
        };

        let mut words = Vec::new();
        for x in era.x_labels() {
            for &y in tone.y_labels() {
                words.extend_from_slice(self.entry(x, y));
            }
        }

        if words.is_empty() {
            tracing::trace!(region = region.label(), "no lexicon entries; using fallback");
            return WordList::not_applicable();
        }
        WordList(words)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::curated()
    }
}

/// Word list for `region` from the curated lexicon.
pub fn words_for(region: Quadrant) -> WordList {
    Lexicon::curated().words_for(region)
}

/// Word list for a region given by name (kebab-case or Japanese).
///
/// Unrecognized names yield the fallback rather than an error.
pub fn words_for_label(region: &str) -> WordList {
    match region.parse::<Quadrant>() {
        Ok(q) => words_for(q),
        Err(_) => WordList::not_applicable(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::BucketLabel::*;

    const EMPTY_CELL: &[&str] = &[];

    fn concat(pairs: &[(BucketLabel, BucketLabel)]) -> Vec<&'static str> {
        let lex = Lexicon::curated();
        let mut out = Vec::new();
        for &(x, y) in pairs {
            out.extend_from_slice(lex.entry(x, y));
        }
        out
    }

    #[test]
    fn test_every_cell_has_one_to_four_words() {
        let lex = Lexicon::curated();
        for x in BucketLabel::ALL {
            for y in BucketLabel::ALL {
                let n = lex.entry(x, y).len();
                assert!((1..=4).contains(&n), "cell ({}, {}) has {} words", x, y, n);
            }
        }
    }

    #[test]
    fn test_entry_indexing_matches_pairs() {
        let lex = Lexicon::curated();
        assert_eq!(lex.entry(MinusThree, MinusThree), &["絶望", "恐怖", "悲劇"]);
        assert_eq!(lex.entry(PlusOne, MinusOne), &["不安", "焦り", "違和感"]);
        assert_eq!(lex.entry(PlusThree, PlusOne), &["予感", "兆し", "可能性の芽"]);
        assert_eq!(lex.entry(PlusThree, PlusThree), &["希望", "夢", "可能性", "輝き"]);
    }

    #[test]
    fn test_future_positive_concatenation_order() {
        let expected = concat(&[
            (PlusTwo, PlusOne),
            (PlusTwo, PlusTwo),
            (PlusTwo, PlusThree),
            (PlusThree, PlusOne),
            (PlusThree, PlusTwo),
            (PlusThree, PlusThree),
        ]);
        let words = words_for(Quadrant::FuturePositive);
        assert_eq!(words.as_slice(), expected.as_slice());
        assert_eq!(words.len(), 20);
        assert_eq!(words[0], "興味");
        // The (3, 1) entry follows the nine x = 2 words.
        assert_eq!(words[9], "予感");
    }

    #[test]
    fn test_past_negative_concatenation_order() {
        let expected = concat(&[
            (MinusThree, MinusThree),
            (MinusThree, MinusTwo),
            (MinusThree, MinusOne),
            (MinusTwo, MinusThree),
            (MinusTwo, MinusTwo),
            (MinusTwo, MinusOne),
        ]);
        assert_eq!(words_for(Quadrant::PastNegative).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_present_spans_minus_one_and_plus_one() {
        let words = words_for(Quadrant::PresentPositive);
        assert_eq!(words.first(), Some(&"静か"));
        assert_eq!(words.last(), Some(&"胸が熱くなる"));
        assert_eq!(words.len(), 18);
    }

    #[test]
    fn test_neutral_and_unclassifiable_fall_back() {
        for q in [
            Quadrant::PastNeutral,
            Quadrant::PresentNeutral,
            Quadrant::FutureNeutral,
            Quadrant::Unclassifiable,
        ] {
            let words = words_for(q);
            assert!(words.is_not_applicable(), "{} should fall back", q);
            assert_eq!(words.as_slice(), &[NOT_APPLICABLE]);
        }
    }

    #[test]
    fn test_empty_table_falls_back() {
        static EMPTY: LexiconTable = [[EMPTY_CELL; 6]; 6];
        let lex = Lexicon::from_table(&EMPTY);
        for q in Quadrant::ALL {
            assert!(lex.words_for(q).is_not_applicable());
        }
    }

    #[test]
    fn test_sparse_table_skips_missing_pairs() {
        static SPARSE: LexiconTable = {
            let mut t: LexiconTable = [[EMPTY_CELL; 6]; 6];
            t[5][3] = &["only"];
            t
        };
        let lex = Lexicon::from_table(&SPARSE);
        assert_eq!(lex.words_for(Quadrant::FuturePositive).as_slice(), &["only"]);
        assert!(lex.words_for(Quadrant::FutureNegative).is_not_applicable());
    }

    #[test]
    fn test_words_for_label_accepts_both_names() {
        assert_eq!(words_for_label("future-positive"), words_for(Quadrant::FuturePositive));
        assert_eq!(words_for_label("過去ネガティブ"), words_for(Quadrant::PastNegative));
        assert!(words_for_label("nowhere").is_not_applicable());
    }
}
