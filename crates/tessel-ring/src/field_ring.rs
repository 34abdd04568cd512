//! Ring buffers of cell-field snapshots.

use tessel_core::{Extent, Point};
use tracing::debug;

use tessel_field::CellField;

use crate::end::{ResizeOptions, RingEnd};
use crate::error::RingError;
use crate::ring::RingBuffer;
use crate::source::SlotSource;

/// Prototype fields for new ring slots.
///
/// `template` is cloned as is; `zeroed` is the same field cleared to
/// default values and is cloned when cleared content is requested. Both
/// share the template's cloning policy. Neither is ever handed out: the
/// ring only stores clones.
#[derive(Clone, Debug)]
pub struct FieldTemplates<F> {
    template: F,
    zeroed: F,
}

impl<F: CellField> FieldTemplates<F> {
    /// Derive both prototypes from `template`.
    pub fn new(template: F) -> Self {
        let mut zeroed = template.clone();
        zeroed.clear_with_default();
        Self { template, zeroed }
    }

    /// Size every stored field must have.
    pub fn extent(&self) -> Extent {
        self.template.extent()
    }

    /// The as-is prototype.
    pub fn template(&self) -> &F {
        &self.template
    }

    /// The cleared prototype.
    pub fn zeroed(&self) -> &F {
        &self.zeroed
    }
}

impl<F: CellField> SlotSource<F> for FieldTemplates<F> {
    fn create(&self, cleared: bool) -> F {
        if cleared {
            self.zeroed.clone()
        } else {
            self.template.clone()
        }
    }

    fn reset(&self, value: &mut F) {
        if value.extent() == self.extent() {
            value.clear_with_default();
        } else {
            *value = self.zeroed.clone();
        }
    }

    fn check(&self, value: &F) -> Result<(), RingError> {
        if value.extent() == self.extent() {
            Ok(())
        } else {
            Err(RingError::DimensionMismatch {
                expected: self.extent(),
                found: value.extent(),
            })
        }
    }
}

/// A ring of generations of one field type, all of one size.
pub type FieldRing<F> = RingBuffer<F, FieldTemplates<F>>;

impl<F: CellField> RingBuffer<F, FieldTemplates<F>> {
    /// An empty ring whose slots are filled from clones of `template`.
    pub fn with_template(capacity: usize, template: F) -> Result<Self, RingError> {
        Self::with_source(capacity, FieldTemplates::new(template))
    }

    /// Size of every stored field.
    pub fn extent(&self) -> Extent {
        self.source().extent()
    }

    /// Columns per stored field.
    pub fn width(&self) -> u32 {
        self.extent().width
    }

    /// Rows per stored field.
    pub fn height(&self) -> u32 {
        self.extent().height
    }

    /// A standalone field cloned from the template, cleared on request.
    pub fn create_field(&self, cleared: bool) -> F {
        self.source().create(cleared)
    }

    /// Rebuild in place for a new capacity and field size.
    ///
    /// As many generations as fit are kept, taken from `options.keep`,
    /// in their original order. Each keeps the top-left
    /// `min(old, new)` intersection of its cells; any new area holds
    /// default values. With an unchanged field size the snapshots are
    /// moved rather than copied. On error the ring is left untouched.
    pub fn resize_to(
        &mut self,
        capacity: usize,
        width: u32,
        height: u32,
        options: ResizeOptions,
    ) -> Result<(), RingError> {
        let old = self.extent();
        if old == Extent::new(width, height) {
            return self.resize_capacity(capacity, options);
        }

        let template = self.source().template().resized_clone(width, height)?;
        let mut out = Self::with_template(capacity, template)?;
        let common = old.intersect(out.extent());
        let kept = self.len().min(capacity);
        let skip = match options.keep {
            RingEnd::Oldest => 0,
            RingEnd::Newest => self.len() - kept,
        };
        for i in skip..skip + kept {
            out.add_last(true)
                .copy_region_from(self.get(i)?, common, Point::ORIGIN, Point::ORIGIN)?;
        }
        debug!(
            capacity,
            from = %old,
            to = %out.extent(),
            kept = out.len(),
            "field ring resized"
        );
        *self = out;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tessel_core::CloningPolicy;
    use tessel_field::{BinaryField, BinaryStorage, DenseField};

    fn stamped(w: u32, h: u32, stamp: u8) -> DenseField<u8> {
        let mut f = DenseField::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                f.set(x, y, stamp * 10 + (y * w + x) as u8);
            }
        }
        f
    }

    fn ring_of(capacity: usize, w: u32, h: u32, stamps: &[u8]) -> FieldRing<DenseField<u8>> {
        let mut ring = FieldRing::with_template(capacity, DenseField::new(w, h).unwrap()).unwrap();
        for &s in stamps {
            *ring.add_last(true) = stamped(w, h, s);
        }
        ring
    }

    #[test]
    fn new_slots_come_from_templates() {
        let mut template = DenseField::<u8>::new(2, 2).unwrap();
        template.fill_all(3, false);
        let mut ring = FieldRing::with_template(3, template).unwrap();
        assert_eq!(ring.add_last(false).cells(), &[3, 3, 3, 3]);
        assert_eq!(ring.add_last(true).cells(), &[0, 0, 0, 0]);
        assert_eq!(ring.width(), 2);
        assert_eq!(ring.create_field(false).cells(), &[3, 3, 3, 3]);
    }

    #[test]
    fn templates_are_never_aliased() {
        let mut ring = FieldRing::with_template(2, DenseField::<u8>::new(2, 2).unwrap()).unwrap();
        ring.add_last(true).set(0, 0, 9);
        assert_eq!(ring.source().zeroed().get(0, 0), 0);
        assert_eq!(ring.source().template().get(0, 0), 0);
    }

    #[test]
    fn recycled_slot_is_cleared_in_place() {
        let mut ring = ring_of(2, 2, 2, &[1, 2]);
        let recycled = ring.add_last(true);
        assert_eq!(recycled.cells(), &[0, 0, 0, 0]);
        assert_eq!(ring.first().unwrap().get(0, 0), 20);
    }

    #[test]
    fn set_rejects_mismatched_dimensions() {
        let mut ring = ring_of(3, 2, 2, &[1]);
        match ring.set(0, stamped(3, 2, 5)) {
            Err(RingError::DimensionMismatch { expected, found }) => {
                assert_eq!(expected, Extent::new(2, 2));
                assert_eq!(found, Extent::new(3, 2));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
        assert!(ring.set(0, stamped(2, 2, 5)).is_ok());
        assert_eq!(ring.first().unwrap().get(0, 0), 50);
    }

    #[test]
    fn deep_policy_carries_into_slots() {
        let mut template =
            DenseField::<Option<Rc<RefCell<u8>>>>::with_policy(1, 1, CloningPolicy::TryDeepClone)
                .unwrap();
        template.set(0, 0, Some(Rc::new(RefCell::new(1))));
        let mut ring = FieldRing::with_template(2, template).unwrap();
        let a = ring.add_last(false).clone();
        let b = ring.add_last(false);
        if let Some(cell) = b.cell(0, 0) {
            *cell.borrow_mut() = 2;
        }
        assert_eq!(a.cell(0, 0).as_ref().map(|c| *c.borrow()), Some(1));
        assert_eq!(ring.source().zeroed().cloning_policy(), CloningPolicy::TryDeepClone);
    }

    // ── resize_to ───────────────────────────────────────────────

    #[test]
    fn grow_cells_pads_with_defaults() {
        let mut ring = ring_of(3, 2, 2, &[1, 2]);
        ring.resize_to(4, 3, 3, ResizeOptions::default()).unwrap();
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.extent(), Extent::new(3, 3));
        assert_eq!(ring.len(), 2);
        let newest = ring.last().unwrap();
        assert_eq!(newest.cells(), &[20, 21, 0, 22, 23, 0, 0, 0, 0]);
        assert_eq!(ring.first().unwrap().get(1, 1), 13);
    }

    #[test]
    fn shrink_cells_and_capacity_keeps_newest() {
        let mut ring = ring_of(4, 3, 2, &[1, 2, 3, 4]);
        ring.resize_to(2, 2, 1, ResizeOptions::default()).unwrap();
        let firsts: Vec<_> = ring.iter().map(|f| f.cells().to_vec()).collect();
        assert_eq!(firsts, vec![vec![30, 31], vec![40, 41]]);
    }

    #[test]
    fn shrink_keeps_oldest_when_asked() {
        let mut ring = ring_of(4, 2, 2, &[1, 2, 3]);
        ring.resize_to(2, 1, 2, ResizeOptions::keep(RingEnd::Oldest))
            .unwrap();
        let firsts: Vec<_> = ring.iter().map(|f| f.cells().to_vec()).collect();
        assert_eq!(firsts, vec![vec![10, 12], vec![20, 22]]);
    }

    #[test]
    fn same_size_resize_moves_snapshots() {
        let mut ring = ring_of(2, 2, 2, &[1, 2, 3]);
        ring.resize_to(5, 2, 2, ResizeOptions::default()).unwrap();
        assert_eq!(ring.capacity(), 5);
        let firsts: Vec<_> = ring.iter().map(|f| f.get(0, 0)).collect();
        assert_eq!(firsts, vec![20, 30]);
    }

    #[test]
    fn empty_ring_resizes_to_empty() {
        let mut ring = ring_of(3, 2, 2, &[]);
        ring.resize_to(3, 4, 4, ResizeOptions::default()).unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.extent(), Extent::new(4, 4));
    }

    #[test]
    fn resize_rejects_bad_arguments() {
        let mut ring = ring_of(3, 2, 2, &[1]);
        assert!(matches!(
            ring.resize_to(1, 3, 3, ResizeOptions::default()),
            Err(RingError::CapacityTooSmall { requested: 1 })
        ));
        assert!(matches!(
            ring.resize_to(3, 0, 3, ResizeOptions::default()),
            Err(RingError::Field(_))
        ));
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.extent(), Extent::new(2, 2));
    }

    #[test]
    fn binary_ring_over_packed_storage() {
        let template = BinaryField::new(BinaryStorage::Packed, 4, 4).unwrap();
        let mut ring = FieldRing::with_template(2, template).unwrap();
        ring.add_last(true).set(3, 3, true);
        ring.resize_to(2, 5, 5, ResizeOptions::default()).unwrap();
        let f = ring.last().unwrap();
        assert!(f.get(3, 3));
        assert!(!f.get(4, 4));
        assert_eq!(f.storage(), BinaryStorage::Packed);
    }
}
