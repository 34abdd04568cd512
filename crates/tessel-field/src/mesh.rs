//! Mesh storage: an arena of cells, each holding the indices of its
//! eight wrapped neighbours.
//!
//! Links are computed once at construction. Wrap lookups then cost two
//! array reads and no modulo arithmetic, at the price of 32 extra bytes
//! per cell and an O(cells) build.

use tessel_core::{CellValue, CloningPolicy, DeepClone, Direction, Extent};

use crate::error::FieldError;
use crate::field::CellField;
use crate::grid;
use crate::policy::PolicyCell;

#[derive(Debug)]
struct MeshNode<V> {
    value: V,
    /// Arena index of the wrapped neighbour, by [`Direction::index`].
    links: [u32; 8],
}

/// A field stored as a cell arena with precomputed torus links.
#[derive(Debug)]
pub struct MeshField<V> {
    extent: Extent,
    nodes: Vec<MeshNode<V>>,
    policy: PolicyCell,
}

fn build_links(extent: Extent, index: usize) -> [u32; 8] {
    let x = (index % extent.width as usize) as u32;
    let y = (index / extent.width as usize) as u32;
    let mut links = [0u32; 8];
    for dir in Direction::ALL {
        let p = grid::wrapped_neighbour(extent, x, y, dir);
        // check_dims bounds the cell count by u32::MAX.
        links[dir.index()] = grid::flat_index(p.x, p.y, extent.width) as u32;
    }
    links
}

impl<V: CellValue> MeshField<V> {
    /// A `width × height` mesh of `V::default()` with the default policy.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        Self::with_policy(width, height, CloningPolicy::default())
    }

    /// A `width × height` mesh of `V::default()` with `policy`.
    pub fn with_policy(
        width: u32,
        height: u32,
        policy: CloningPolicy,
    ) -> Result<Self, FieldError> {
        let extent = grid::check_dims(width, height)?;
        let nodes = (0..extent.cell_count())
            .map(|i| MeshNode {
                value: V::default(),
                links: build_links(extent, i),
            })
            .collect();
        Ok(Self {
            extent,
            nodes,
            policy: PolicyCell::new(policy),
        })
    }

    /// Arena index of the wrapped neighbour of `(x, y)` in `dir`.
    pub fn link(&self, x: u32, y: u32, dir: Direction) -> usize {
        self.debug_check(x, y);
        self.nodes[grid::flat_index(x, y, self.extent.width)].links[dir.index()] as usize
    }

    /// Borrow the cell at `(x, y)`.
    pub fn cell(&self, x: u32, y: u32) -> &V {
        self.debug_check(x, y);
        &self.nodes[grid::flat_index(x, y, self.extent.width)].value
    }

    #[inline]
    fn debug_check(&self, x: u32, y: u32) {
        debug_assert!(
            x < self.extent.width && y < self.extent.height,
            "({x}, {y}) outside {} mesh",
            self.extent
        );
    }
}

impl<V: CellValue> Clone for MeshField<V> {
    fn clone(&self) -> Self {
        let policy = self.resolved_cloning_policy();
        Self {
            extent: self.extent,
            nodes: self
                .nodes
                .iter()
                .map(|n| MeshNode {
                    value: n.value.clone_with(policy),
                    links: n.links,
                })
                .collect(),
            policy: PolicyCell::new(policy),
        }
    }
}

impl<V: CellValue> PartialEq for MeshField<V> {
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.value == b.value)
    }
}

impl<V: CellValue> CellField for MeshField<V> {
    type Value = V;

    fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> V {
        self.cell(x, y).clone()
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32, value: V) {
        self.debug_check(x, y);
        let i = grid::flat_index(x, y, self.extent.width);
        self.nodes[i].value = value;
    }

    #[inline]
    fn get_with_wrap(&self, x: u32, y: u32, dir: Direction) -> V {
        self.nodes[self.link(x, y, dir)].value.clone()
    }

    fn blank_like(&self, width: u32, height: u32) -> Result<Self, FieldError> {
        Self::with_policy(width, height, self.policy.get())
    }

    fn cloning_policy(&self) -> CloningPolicy {
        self.policy.get()
    }

    fn set_cloning_policy(&mut self, policy: CloningPolicy) {
        self.policy.set(policy);
    }

    fn resolved_cloning_policy(&self) -> CloningPolicy {
        self.policy.resolve(|| self.any_deep_cloneable())
    }

    fn any_deep_cloneable(&self) -> bool {
        self.nodes.iter().any(|n| n.value.supports_deep_clone())
    }
}
