/// Collision detection for Starfall
///
/// This module provides the axis-aligned bounding box type shared by the physics
/// step and the overlap callbacks, plus the pure intersection helpers built on it.
///
/// # Architecture
///
/// - `Aabb`: Centre + half extents in world pixels (f32, sub-pixel positions)
/// - `Collidable` trait: Implemented by anything that can be overlap-tested
/// - AABB functions: Pure functions for rectangle intersection and penetration
///
/// Overlaps (player vs stars, player vs bombs) only *detect*. Separation against
/// platforms lives in `physics`, which moves bodies one axis at a time.
use sdl2::rect::Rect;

/// Axis-aligned bounding box stored as centre and half extents.
///
/// Sprites in the scene are positioned by their centre, so storing the centre
/// keeps scaling (which grows around the centre) a one-line change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    /// Creates a box centred on `(x, y)` with the given full size.
    pub fn from_center(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb {
            center_x: x,
            center_y: y,
            half_w: width / 2.0,
            half_h: height / 2.0,
        }
    }

    /// Creates a box from its top-left corner and full size.
    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_center(x + width / 2.0, y + height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.center_x - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.center_x + self.half_w
    }

    pub fn top(&self) -> f32 {
        self.center_y - self.half_h
    }

    pub fn bottom(&self) -> f32 {
        self.center_y + self.half_h
    }

    pub fn width(&self) -> f32 {
        self.half_w * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_h * 2.0
    }

    /// Returns true if the point lies inside the box (edges inclusive).
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Rounds the box to an SDL rectangle for drawing.
    ///
    /// Zero-sized boxes are clamped to 1x1 because SDL rects cannot be empty.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left().round() as i32,
            self.top().round() as i32,
            (self.width().round() as u32).max(1),
            (self.height().round() as u32).max(1),
        )
    }
}

/// Trait for objects that participate in overlap detection.
///
/// # Example
///
/// ```ignore
/// impl Collidable for Star {
///     fn bounds(&self) -> Aabb {
///         self.body.bounds()
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the current bounding box in world coordinates.
    fn bounds(&self) -> Aabb;

    /// Whether this object currently takes part in collision.
    ///
    /// Disabled bodies (collected stars, hidden players) return false.
    fn is_collidable(&self) -> bool {
        true
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two boxes intersect if they overlap on both the X and Y axes. Boxes that only
/// share an edge do not intersect, so a body resting exactly on a platform is
/// not "inside" it.
pub fn aabb_intersect(a: &Aabb, b: &Aabb) -> bool {
    let x_overlap = (a.center_x - b.center_x).abs() < a.half_w + b.half_w;
    let y_overlap = (a.center_y - b.center_y).abs() < a.half_h + b.half_h;

    x_overlap && y_overlap
}

/// Calculates the signed penetration between two intersecting boxes.
///
/// # Returns
///
/// - `overlap_x`: Positive if `a` sits to the left of `b` (push `a` left), negative otherwise
/// - `overlap_y`: Positive if `a` sits above `b` (push `a` up), negative otherwise
///
/// # Note
///
/// Assumes the boxes intersect. For disjoint boxes the values are meaningless.
pub fn calculate_overlap(a: &Aabb, b: &Aabb) -> (f32, f32) {
    let overlap_x = if a.center_x <= b.center_x {
        a.right() - b.left()
    } else {
        a.left() - b.right()
    };

    let overlap_y = if a.center_y <= b.center_y {
        a.bottom() - b.top()
    } else {
        a.top() - b.bottom()
    };

    (overlap_x, overlap_y)
}

/// Checks one collidable against a collection and returns the indices it overlaps.
///
/// Items (and the entity itself) that report `is_collidable() == false` are skipped.
/// Indices are returned in ascending order.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    items: &[T],
) -> Vec<usize> {
    if !entity.is_collidable() {
        return Vec::new();
    }

    let entity_bounds = entity.bounds();

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_collidable())
        .filter(|(_, item)| aabb_intersect(&entity_bounds, &item.bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        bounds: Aabb,
        active: bool,
    }

    impl Collidable for Dummy {
        fn bounds(&self) -> Aabb {
            self.bounds
        }

        fn is_collidable(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let a = Aabb::from_top_left(0.0, 0.0, 32.0, 32.0);
        let b = Aabb::from_top_left(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&a, &b));
        assert!(aabb_intersect(&b, &a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let a = Aabb::from_top_left(0.0, 0.0, 32.0, 32.0);
        let b = Aabb::from_top_left(32.0, 0.0, 32.0, 32.0);

        assert!(!aabb_intersect(&a, &b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Aabb::from_top_left(0.0, 0.0, 100.0, 100.0);
        let small = Aabb::from_top_left(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_calculate_overlap_from_above() {
        // a is falling onto b and has sunk 4px into it
        let a = Aabb::from_top_left(0.0, 0.0, 32.0, 48.0);
        let b = Aabb::from_top_left(0.0, 44.0, 400.0, 32.0);

        let (_, overlap_y) = calculate_overlap(&a, &b);
        assert_eq!(overlap_y, 4.0);
    }

    #[test]
    fn test_calculate_overlap_from_right() {
        let a = Aabb::from_top_left(20.0, 0.0, 32.0, 32.0);
        let b = Aabb::from_top_left(0.0, 0.0, 32.0, 32.0);

        let (overlap_x, _) = calculate_overlap(&a, &b);
        assert_eq!(overlap_x, -12.0);
    }

    #[test]
    fn test_check_collisions_skips_inactive() {
        let player = Dummy {
            bounds: Aabb::from_center(50.0, 50.0, 20.0, 20.0),
            active: true,
        };
        let items = vec![
            Dummy { bounds: Aabb::from_center(55.0, 55.0, 10.0, 10.0), active: true },
            Dummy { bounds: Aabb::from_center(52.0, 50.0, 10.0, 10.0), active: false },
            Dummy { bounds: Aabb::from_center(500.0, 50.0, 10.0, 10.0), active: true },
            Dummy { bounds: Aabb::from_center(45.0, 45.0, 10.0, 10.0), active: true },
        ];

        assert_eq!(check_collisions_with_collection(&player, &items), vec![0, 3]);
    }

    #[test]
    fn test_inactive_entity_hits_nothing() {
        let hidden = Dummy {
            bounds: Aabb::from_center(50.0, 50.0, 20.0, 20.0),
            active: false,
        };
        let items = vec![Dummy { bounds: Aabb::from_center(50.0, 50.0, 10.0, 10.0), active: true }];

        assert!(check_collisions_with_collection(&hidden, &items).is_empty());
    }

    #[test]
    fn test_to_rect_rounds() {
        let rect = Aabb::from_center(100.0, 450.0, 32.0, 48.0).to_rect();
        assert_eq!((rect.x(), rect.y(), rect.width(), rect.height()), (84, 426, 32, 48));
    }
}
