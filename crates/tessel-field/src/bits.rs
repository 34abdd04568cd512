//! Bit-packed binary storage.

use tessel_core::{CloningPolicy, Extent};

use crate::error::FieldError;
use crate::field::CellField;
use crate::grid;
use crate::policy::PolicyCell;

const WORD_BITS: usize = u64::BITS as usize;

/// A binary field packing 64 cells per `u64` word, row-major.
///
/// `bool` never supports deep cloning, so the cloning policy is kept
/// only to honour the [`CellField`] contract.
#[derive(Clone, Debug)]
pub struct BitField {
    extent: Extent,
    words: Vec<u64>,
    policy: PolicyCell,
}

impl BitField {
    /// An all-`false` field.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        let extent = grid::check_dims(width, height)?;
        Ok(Self {
            extent,
            words: vec![0; extent.cell_count().div_ceil(WORD_BITS)],
            policy: PolicyCell::default(),
        })
    }

    /// Number of `true` cells.
    pub fn count_live(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Packed storage words. Bits past the last cell are always zero.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn locate(&self, x: u32, y: u32) -> (usize, u64) {
        debug_assert!(
            x < self.extent.width && y < self.extent.height,
            "({x}, {y}) outside {} bit field",
            self.extent
        );
        let i = grid::flat_index(x, y, self.extent.width);
        (i / WORD_BITS, 1u64 << (i % WORD_BITS))
    }

    fn mask_tail(&mut self) {
        let used = self.extent.cell_count() % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl PartialEq for BitField {
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent && self.words == other.words
    }
}

impl CellField for BitField {
    type Value = bool;

    fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> bool {
        let (word, bit) = self.locate(x, y);
        self.words[word] & bit != 0
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32, value: bool) {
        let (word, bit) = self.locate(x, y);
        if value {
            self.words[word] |= bit;
        } else {
            self.words[word] &= !bit;
        }
    }

    fn blank_like(&self, width: u32, height: u32) -> Result<Self, FieldError> {
        let mut out = Self::new(width, height)?;
        out.policy = self.policy.clone();
        Ok(out)
    }

    fn cloning_policy(&self) -> CloningPolicy {
        self.policy.get()
    }

    fn set_cloning_policy(&mut self, policy: CloningPolicy) {
        self.policy.set(policy);
    }

    fn resolved_cloning_policy(&self) -> CloningPolicy {
        self.policy.resolve(|| false)
    }

    fn fill_all(&mut self, value: bool, _deep: bool) {
        let fill = if value { u64::MAX } else { 0 };
        self.words.iter_mut().for_each(|w| *w = fill);
        self.mask_tail();
    }

    fn fill_empty(&mut self, value: bool, deep: bool) {
        // Every false cell becomes `value`; true cells are untouched.
        if value {
            self.fill_all(true, deep);
        }
    }

    fn any_deep_cloneable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    #[test]
    fn packs_across_word_boundary() {
        let mut f = BitField::new(10, 7).unwrap();
        assert_eq!(f.words().len(), 2);
        f.set(3, 6, true);
        f.set(4, 6, true);
        assert!(f.get(3, 6));
        assert!(f.get(4, 6));
        assert!(!f.get(5, 6));
        assert_eq!(f.count_live(), 2);
        f.set(3, 6, false);
        assert_eq!(f.count_live(), 1);
    }

    #[test]
    fn fill_all_leaves_padding_clear() {
        let mut f = BitField::new(5, 3).unwrap();
        f.fill_all(true, false);
        assert_eq!(f.count_live(), 15);
        assert_eq!(f.words()[0], (1u64 << 15) - 1);
        f.clear_with_default();
        assert_eq!(f.count_live(), 0);
    }

    #[test]
    fn fill_empty_true_sets_everything() {
        let mut f = BitField::new(3, 3).unwrap();
        f.set(1, 1, true);
        f.fill_empty(false, false);
        assert_eq!(f.count_live(), 1);
        f.fill_empty(true, false);
        assert_eq!(f.count_live(), 9);
    }

    #[test]
    fn auto_detect_settles_shallow() {
        let mut f = BitField::new(2, 2).unwrap();
        f.set_cloning_policy(CloningPolicy::AutoDetect);
        assert_eq!(
            f.resolved_cloning_policy(),
            CloningPolicy::DoNotTryDeepClone
        );
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_bits() {
        compliance::run_full_compliance(|w, h| BitField::new(w, h).unwrap(), |i| i % 3 != 1);
    }

    proptest! {
        #[test]
        fn set_get_matches_model(
            w in 1u32..20,
            h in 1u32..20,
            ops in prop::collection::vec((0u32..20, 0u32..20, any::<bool>()), 0..60),
        ) {
            let mut f = BitField::new(w, h).unwrap();
            let mut model = vec![false; (w * h) as usize];
            for (x, y, v) in ops {
                let (x, y) = (x % w, y % h);
                f.set(x, y, v);
                model[(y * w + x) as usize] = v;
            }
            for y in 0..h {
                for x in 0..w {
                    prop_assert_eq!(f.get(x, y), model[(y * w + x) as usize]);
                }
            }
            prop_assert_eq!(f.count_live(), model.iter().filter(|v| **v).count());
        }
    }
}
