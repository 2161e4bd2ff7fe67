mod sequences;

use quickcheck::{Arbitrary, Gen};

/// A level-order slot: either a value or a gap.
#[derive(Copy, Clone, Debug)]
pub struct Slot(pub Option<i8>);

impl Arbitrary for Slot {
    /// Gaps are common enough to exercise the skipped-subtree path without emptying most trees.
    fn arbitrary(g: &mut Gen) -> Self {
        if *g.choose(&[true, false, false, false]).unwrap() {
            Slot(None)
        } else {
            Slot(Some(i8::arbitrary(g)))
        }
    }
}
