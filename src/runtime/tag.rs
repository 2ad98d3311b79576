//! Bit layout shared with the code generator. Every constant here must
//! match what the compiler emits into `scheme_entry`.

use std::fmt::Display;

use super::Word;

pub const FIXNUM_MASK: isize = 0b11;
pub const FIXNUM_TAG: isize = 0b00;
pub const FIXNUM_SHIFT: u32 = 2;

pub const CHAR_MASK: isize = 0xFF;
pub const CHAR_TAG: isize = 0b0000_0111;
pub const CHAR_SHIFT: u32 = 8;

pub const BOOL_MASK: isize = 0xFF;
pub const BOOL_TAG: isize = 0b0000_1111;
pub const BOOL_SHIFT: u32 = 8;

/// Heap pointers are 8 byte aligned, so their low three bits carry the tag.
pub const PTR_MASK: isize = 0b111;

/// Tags the compiler reserves for heap objects. The runtime has no
/// representation for them, it only recognizes them so a decode failure
/// can say what the word was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapTag {
    Pair = 0b001,
    Vector = 0b010,
    Str = 0b011,
    Symbol = 0b101,
    Closure = 0b110,
}

pub const HEAP_TAGS: [HeapTag; 5] = [
    HeapTag::Pair,
    HeapTag::Vector,
    HeapTag::Str,
    HeapTag::Symbol,
    HeapTag::Closure,
];

impl HeapTag {
    pub fn of(word: Word) -> Option<HeapTag> {
        HEAP_TAGS
            .iter()
            .copied()
            .find(|tag| *tag as isize == word.0 & PTR_MASK)
    }
}

impl Display for HeapTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapTag::Pair => write!(f, "pair"),
            HeapTag::Vector => write!(f, "vector"),
            HeapTag::Str => write!(f, "string"),
            HeapTag::Symbol => write!(f, "symbol"),
            HeapTag::Closure => write!(f, "closure"),
        }
    }
}

/// Two tag tests are disjoint when no word can pass both, that is when
/// the tags disagree on some bit covered by both masks.
pub const fn disjoint(mask_a: isize, tag_a: isize, mask_b: isize, tag_b: isize) -> bool {
    let common = mask_a & mask_b;
    tag_a & common != tag_b & common
}

const fn fits(mask: isize, tag: isize) -> bool {
    tag & !mask == 0
}

// Classification tries the tags in a fixed order, but must never depend on
// it: a new tag that overlaps an existing one fails the build here.
const _: () = {
    assert!(fits(FIXNUM_MASK, FIXNUM_TAG), "fixnum tag wider than its mask");
    assert!(fits(CHAR_MASK, CHAR_TAG), "char tag wider than its mask");
    assert!(fits(BOOL_MASK, BOOL_TAG), "boolean tag wider than its mask");

    assert!(
        disjoint(FIXNUM_MASK, FIXNUM_TAG, CHAR_MASK, CHAR_TAG),
        "char tag overlaps fixnums"
    );
    assert!(
        disjoint(FIXNUM_MASK, FIXNUM_TAG, BOOL_MASK, BOOL_TAG),
        "boolean tag overlaps fixnums"
    );
    assert!(
        disjoint(CHAR_MASK, CHAR_TAG, BOOL_MASK, BOOL_TAG),
        "boolean tag overlaps chars"
    );

    let mut i = 0;
    while i < HEAP_TAGS.len() {
        let tag = HEAP_TAGS[i] as isize;
        assert!(fits(PTR_MASK, tag), "heap tag wider than the pointer mask");
        assert!(
            disjoint(PTR_MASK, tag, FIXNUM_MASK, FIXNUM_TAG),
            "heap tag overlaps fixnums"
        );
        assert!(
            disjoint(PTR_MASK, tag, CHAR_MASK, CHAR_TAG),
            "heap tag overlaps chars"
        );
        assert!(
            disjoint(PTR_MASK, tag, BOOL_MASK, BOOL_TAG),
            "heap tag overlaps booleans"
        );
        i += 1;
    }
};
