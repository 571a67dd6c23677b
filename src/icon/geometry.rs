/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    fn from_pixel(x: i64, y: i64) -> Self {
        Point::new(x as f64, y as f64)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        distance_to_segment(p, &self.start, &self.end)
    }
}

/// Euclidean distance from `p` to the closest point of the segment `a`-`b`.
///
/// The projection of `p` onto the line through `a` and `b` is clamped to the
/// segment. A zero-length segment degrades to the distance between `p` and `a`.
pub fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance(&closest)
}

/// Layout of the checkmark icon for a given edge length.
///
/// Every value is derived from the size with truncating integer division, so
/// the same size always yields the same geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckmarkGeometry {
    pub size: u32,
    /// Width of the dark border around the inset panel
    pub margin: u32,
    /// Short stroke, falling from the left towards the vertex
    pub left: Segment,
    /// Long stroke, rising from the vertex to the upper right
    pub right: Segment,
    /// Pixels closer than this to either stroke are glyph coloured
    pub thickness: u32,
}

impl CheckmarkGeometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as i64;
        let cx = s / 2;
        let cy = s / 2;
        let check_w = s / 3;

        let vertex = Point::from_pixel(cx - check_w / 6, cy + check_w / 3);
        let left = Segment::new(Point::from_pixel(cx - check_w / 2, cy), vertex);
        let right = Segment::new(vertex, Point::from_pixel(cx + check_w / 2, cy - check_w / 3));

        CheckmarkGeometry {
            size,
            margin: size / 8,
            left,
            right,
            thickness: (size / 24).max(2),
        }
    }

    /// True if the pixel lies strictly inside the margin-inset panel.
    pub fn in_panel(&self, x: u32, y: u32) -> bool {
        let lo = self.margin;
        let hi = self.size.saturating_sub(self.margin);
        lo < x && x < hi && lo < y && y < hi
    }

    /// True if the pixel is within the stroke thickness of the checkmark.
    pub fn in_glyph(&self, x: u32, y: u32) -> bool {
        let p = Point::from_pixel(x as i64, y as i64);
        let thickness = self.thickness as f64;
        self.left.distance_to(&p) < thickness || self.right.distance_to(&p) < thickness
    }
}
