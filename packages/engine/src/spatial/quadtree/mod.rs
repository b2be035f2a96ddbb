//! Region quadtree used as the collision broad phase.
//!
//! The tree covers a fixed world rectangle and is torn down and rebuilt from
//! scratch every tick. Each entry lives in exactly one node: the shallowest
//! one whose single quadrant cannot hold it, or a leaf. A body that straddles
//! a midline stays with the parent, so both sides of the line pick it up
//! during retrieval without it ever being duplicated.
//!
//! Children are owned outright (`Box<[QuadTree; 4]>`). A node is either a
//! leaf or has all four children; there is no partial split.

mod quadrant;

use serde::{Deserialize, Serialize};

use crate::core::math::Rect;
use crate::domain::error::{EngineError, EngineResult};

pub use quadrant::{quadrant_for, Quadrant};

/// Entries a node holds before it tries to subdivide
pub const MAX_OBJECTS: usize = 10;
/// Deepest level a node may split into
pub const MAX_LEVELS: u32 = 5;

/// Index of a body in the slice the tree was built from
pub type BodyHandle = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadTreeLimits {
    pub max_objects: usize,
    pub max_levels: u32,
}

impl Default for QuadTreeLimits {
    fn default() -> Self {
        Self { max_objects: MAX_OBJECTS, max_levels: MAX_LEVELS }
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    handle: BodyHandle,
    bounds: Rect,
}

#[derive(Clone, Debug)]
pub struct QuadTree {
    level: u32,
    region: Rect,
    limits: QuadTreeLimits,
    contained: Vec<Entry>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    /// Create an empty leaf covering `region` at depth `level`.
    pub fn new(level: u32, region: Rect) -> EngineResult<Self> {
        Self::with_limits(level, region, QuadTreeLimits::default())
    }

    pub fn with_limits(level: u32, region: Rect, limits: QuadTreeLimits) -> EngineResult<Self> {
        if !region.is_valid() {
            return Err(EngineError::InvalidRegion {
                width: region.width,
                height: region.height,
            });
        }
        if limits.max_objects == 0 {
            return Err(EngineError::InvalidConfig("max_objects must be >= 1".into()));
        }
        Ok(Self::node(level, region, limits))
    }

    // Children of a valid region are valid, so `split` skips the checks.
    fn node(level: u32, region: Rect, limits: QuadTreeLimits) -> Self {
        Self {
            level,
            region,
            limits,
            contained: Vec::new(),
            children: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn limits(&self) -> QuadTreeLimits {
        self.limits
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Child node for `quadrant`, if this node is split.
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children.as_ref().map(|c| &c[quadrant.index()])
    }

    /// Handles stored at this node only (straddlers, or a leaf's contents).
    pub fn own_handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.contained.iter().map(|e| e.handle)
    }

    /// Drop all entries and children, back to an empty leaf.
    pub fn clear(&mut self) {
        self.contained.clear();
        self.children = None;
    }

    fn split(&mut self) {
        debug_assert!(self.children.is_none(), "split on an already split node");

        let next = self.level + 1;
        let region = self.region;
        let limits = self.limits;
        self.children = Some(Box::new(
            Quadrant::ALL.map(|q| Self::node(next, q.sub_region(&region), limits)),
        ));
    }

    /// Which child quadrant fully contains `rect`; `None` for straddlers.
    pub fn quadrant_of(&self, rect: &Rect) -> Option<Quadrant> {
        quadrant_for(&self.region, rect)
    }

    /// Insert a body by handle and its current bounds.
    pub fn insert(&mut self, handle: BodyHandle, bounds: Rect) {
        self.insert_entry(Entry { handle, bounds });
    }

    fn insert_entry(&mut self, entry: Entry) {
        if let Some(children) = self.children.as_mut() {
            if let Some(q) = quadrant_for(&self.region, &entry.bounds) {
                children[q.index()].insert_entry(entry);
                return;
            }
        }

        self.contained.push(entry);

        if self.contained.len() > self.limits.max_objects && self.level < self.limits.max_levels {
            if self.children.is_none() {
                self.split();
            }
            self.push_down();
        }
    }

    /// Move every entry that fits a single child into it. Order of the
    /// entries left behind is preserved.
    fn push_down(&mut self) {
        let region = self.region;
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let mut i = 0;
        while i < self.contained.len() {
            match quadrant_for(&region, &self.contained[i].bounds) {
                Some(q) => {
                    let entry = self.contained.remove(i);
                    children[q.index()].insert_entry(entry);
                }
                None => i += 1,
            }
        }
    }

    /// Collect collision candidates for `bounds`.
    ///
    /// Walks only the single child branch that fully contains `bounds`, then
    /// appends this node's own entries on the way back up. Sibling branches
    /// are never visited: an entry in a sibling sits strictly on the other
    /// side of a midline, so it can only overlap `bounds` if `bounds`
    /// straddles, and in that case the sibling's own retrieval reaches the
    /// straddler at this level instead.
    pub fn retrieve<'a>(
        &self,
        out: &'a mut Vec<BodyHandle>,
        bounds: &Rect,
    ) -> &'a mut Vec<BodyHandle> {
        if let Some(children) = self.children.as_ref() {
            if let Some(q) = quadrant_for(&self.region, bounds) {
                children[q.index()].retrieve(out, bounds);
            }
        }
        out.extend(self.contained.iter().map(|e| e.handle));
        out
    }

    /// Exhaustive region query: every entry whose bounds touch `area`.
    ///
    /// Unlike [`retrieve`](Self::retrieve) this descends into every child the
    /// area reaches, so the result is a per-query superset of true overlaps.
    pub fn query(&self, out: &mut Vec<BodyHandle>, area: &Rect) {
        if let Some(children) = self.children.as_ref() {
            for q in Quadrant::ALL {
                if q.reaches(&self.region, area) {
                    children[q.index()].query(out, area);
                }
            }
        }
        out.extend(
            self.contained
                .iter()
                .filter(|e| e.bounds.intersects(area))
                .map(|e| e.handle),
        );
    }

    /// Total entries in this subtree.
    pub fn len(&self) -> usize {
        let below = self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(QuadTree::len).sum());
        self.contained.len() + below
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(QuadTree::node_count).sum())
    }

    /// Deepest level present in this subtree.
    pub fn depth(&self) -> u32 {
        self.children
            .as_ref()
            .map_or(self.level, |c| c.iter().map(QuadTree::depth).max().unwrap_or(self.level))
    }

    /// Visit every node's region, parent before children (debug drawing).
    pub fn for_each_region<F: FnMut(&Rect, u32)>(&self, f: &mut F) {
        f(&self.region, self.level);
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.for_each_region(f);
            }
        }
    }

    pub fn regions(&self) -> Vec<(Rect, u32)> {
        let mut out = Vec::with_capacity(self.node_count());
        self.for_each_region(&mut |r, level| out.push((*r, level)));
        out
    }
}
