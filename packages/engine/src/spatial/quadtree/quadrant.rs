use crate::core::math::Rect;

/// Child slot of a split node. Discriminants are the child array indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sub-rectangle of `region` covered by this quadrant.
    pub fn sub_region(self, region: &Rect) -> Rect {
        let half_w = region.width / 2.0;
        let half_h = region.height / 2.0;
        let (x, y) = (region.x, region.y);
        match self {
            Quadrant::NorthEast => Rect::new(x + half_w, y, half_w, half_h),
            Quadrant::NorthWest => Rect::new(x, y, half_w, half_h),
            Quadrant::SouthWest => Rect::new(x, y + half_h, half_w, half_h),
            Quadrant::SouthEast => Rect::new(x + half_w, y + half_h, half_w, half_h),
        }
    }

    /// True when `area` reaches into this quadrant's half-planes of `region`.
    ///
    /// Entries routed here sit strictly on this side of both midpoints, even
    /// when they lie outside `region` itself, so this is the pruning test for
    /// exhaustive queries.
    pub fn reaches(self, region: &Rect, area: &Rect) -> bool {
        let mid = region.center();
        let east = area.right() > mid.x;
        let west = area.x < mid.x;
        let north = area.y < mid.y;
        let south = area.bottom() > mid.y;
        match self {
            Quadrant::NorthEast => east && north,
            Quadrant::NorthWest => west && north,
            Quadrant::SouthWest => west && south,
            Quadrant::SouthEast => east && south,
        }
    }
}

/// Which single quadrant of `region` fully contains `rect`.
///
/// Midpoint ties use strict comparisons on both sides: a rect belongs to the
/// low half of an axis only if `min < mid && max < mid`, and to the high half
/// only if `min > mid`. A rect touching a midpoint is a straddler (`None`)
/// and stays with the parent node.
pub fn quadrant_for(region: &Rect, rect: &Rect) -> Option<Quadrant> {
    let mid = region.center();

    let north = rect.y < mid.y && rect.bottom() < mid.y;
    let south = rect.y > mid.y;
    let west = rect.x < mid.x && rect.right() < mid.x;
    let east = rect.x > mid.x;

    if west {
        if north {
            return Some(Quadrant::NorthWest);
        }
        if south {
            return Some(Quadrant::SouthWest);
        }
    } else if east {
        if north {
            return Some(Quadrant::NorthEast);
        }
        if south {
            return Some(Quadrant::SouthEast);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rect {
        Rect::centered(20.0, 20.0)
    }

    #[test]
    fn rect_inside_each_quadrant() {
        let w = world();
        assert_eq!(quadrant_for(&w, &Rect::new(2.0, -5.0, 1.0, 1.0)), Some(Quadrant::NorthEast));
        assert_eq!(quadrant_for(&w, &Rect::new(-5.0, -5.0, 1.0, 1.0)), Some(Quadrant::NorthWest));
        assert_eq!(quadrant_for(&w, &Rect::new(-5.0, 5.0, 1.0, 1.0)), Some(Quadrant::SouthWest));
        assert_eq!(quadrant_for(&w, &Rect::new(5.0, 5.0, 1.0, 1.0)), Some(Quadrant::SouthEast));
    }

    #[test]
    fn straddlers_have_no_quadrant() {
        let w = world();
        // Crosses the vertical midline.
        assert_eq!(quadrant_for(&w, &Rect::new(-0.5, 3.0, 1.0, 1.0)), None);
        // Crosses the horizontal midline.
        assert_eq!(quadrant_for(&w, &Rect::new(3.0, -0.5, 1.0, 1.0)), None);
    }

    #[test]
    fn touching_midline_is_a_straddler() {
        let w = world();
        // Right edge exactly on x = 0.
        assert_eq!(quadrant_for(&w, &Rect::new(-1.0, 3.0, 1.0, 1.0)), None);
        // Left edge exactly on x = 0.
        assert_eq!(quadrant_for(&w, &Rect::new(0.0, 3.0, 1.0, 1.0)), None);
        // Bottom edge exactly on y = 0.
        assert_eq!(quadrant_for(&w, &Rect::new(3.0, -1.0, 1.0, 1.0)), None);
    }

    #[test]
    fn outside_region_still_routes_by_midpoint() {
        let w = world();
        assert_eq!(quadrant_for(&w, &Rect::new(30.0, 30.0, 1.0, 1.0)), Some(Quadrant::SouthEast));
    }

    #[test]
    fn sub_regions_tile_parent() {
        let w = world();
        let area: f32 = Quadrant::ALL.iter().map(|q| {
            let r = q.sub_region(&w);
            r.width * r.height
        }).sum();
        assert_eq!(area, w.width * w.height);
        assert_eq!(Quadrant::NorthEast.sub_region(&w), Rect::new(0.0, -10.0, 10.0, 10.0));
        assert_eq!(Quadrant::SouthWest.sub_region(&w), Rect::new(-10.0, 0.0, 10.0, 10.0));
    }
}
