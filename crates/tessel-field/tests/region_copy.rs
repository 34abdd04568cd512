//! Region copies inside one field against hand-computed grids.

use tessel_core::{Extent, Point};
use tessel_field::{CellField, GenericField, Storage};

fn numbered(storage: Storage) -> GenericField<u8> {
    let mut f = GenericField::new(storage, 4, 3).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            f.set(x, y, (y * 4 + x + 1) as u8);
        }
    }
    f
}

fn rows(f: &GenericField<u8>) -> Vec<Vec<u8>> {
    (0..f.height())
        .map(|y| (0..f.width()).map(|x| f.get(x, y)).collect())
        .collect()
}

#[test]
fn shift_right_by_one_matches_expected_grid() {
    for storage in [Storage::Dense, Storage::Mesh] {
        let mut f = numbered(storage);
        f.copy_region_within(Extent::new(3, 3), Point::new(0, 0), Point::new(1, 0), None)
            .unwrap();
        assert_eq!(
            rows(&f),
            vec![vec![1, 1, 2, 3], vec![5, 5, 6, 7], vec![9, 9, 10, 11]],
            "{storage:?}"
        );
    }
}

#[test]
fn shift_left_by_one_matches_expected_grid() {
    let mut f = numbered(Storage::Dense);
    f.copy_region_within(Extent::new(3, 3), Point::new(1, 0), Point::new(0, 0), None)
        .unwrap();
    assert_eq!(
        rows(&f),
        vec![vec![2, 3, 4, 4], vec![6, 7, 8, 8], vec![10, 11, 12, 12]]
    );
}

#[test]
fn staged_copy_equals_copy_through_explicit_temporary() {
    let mut via_self = numbered(Storage::Dense);
    let mut scratch = Vec::with_capacity(1);
    via_self
        .copy_region_within(
            Extent::new(3, 3),
            Point::new(0, 0),
            Point::new(1, 0),
            Some(&mut scratch),
        )
        .unwrap();

    let mut via_temp = numbered(Storage::Dense);
    let temp = via_temp.clone();
    via_temp
        .copy_region_from(&temp, Extent::new(3, 3), Point::new(0, 0), Point::new(1, 0))
        .unwrap();

    assert!(via_self.same_cells(&via_temp));
    assert!(scratch.is_empty(), "scratch is drained after staging");
    assert!(scratch.capacity() >= 9, "scratch grows to the region size");
}

#[test]
fn disjoint_regions_copy_directly() {
    let mut f = numbered(Storage::Mesh);
    f.copy_region_within(Extent::new(2, 1), Point::new(0, 0), Point::new(2, 2), None)
        .unwrap();
    assert_eq!(rows(&f)[2], vec![9, 10, 1, 2]);
}
