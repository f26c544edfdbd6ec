//! Region quadtree answering nearest-neighbour distance queries.
use crate::linalg::Vec2;

/// Points held by a leaf before it splits.
pub const MAX_POINTS_PER_NODE: usize = 32;

/// Leaves this small stop splitting, so coincident points cannot recurse forever.
const MIN_HALF_SIZE: f32 = 1e-6;

/// Quadrant indices. Traversal walks them round-robin from the query's own quadrant.
const PXNY: usize = 0;
const NXNY: usize = 1;
const NXPY: usize = 2;
const PXPY: usize = 3;

/// Insert-only point index over the square `[min_x, min_x + size] x [min_y, min_y + size]`.
///
/// Points are expected to lie inside the square; points outside it are stored but may
/// be missed by the pruning in distance queries.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    min_x: f32,
    min_y: f32,
    half: f32,
    content: Content,
}

#[derive(Debug, Clone)]
enum Content {
    Leaf(Vec<Vec2<f32>>),
    Split(Box<[Node; 4]>),
}

impl QuadTree {
    pub fn new(min_x: f32, min_y: f32, size: f32) -> Self {
        Self {
            root: Node::leaf(min_x, min_y, size * 0.5),
            len: 0,
        }
    }

    pub fn insert(&mut self, point: Vec2<f32>) {
        self.root.insert(point);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance from `(x, y)` to the closest point, or `+inf` if the tree is empty.
    pub fn nearest_distance(&self, x: f32, y: f32) -> f32 {
        self.root.nearest(x, y, 0.0, f32::INFINITY)
    }

    /// Like [`nearest_distance`](Self::nearest_distance), but `+inf` unless the closest
    /// point is strictly nearer than `radius`.
    pub fn nearest_distance_within(&self, x: f32, y: f32, radius: f32) -> f32 {
        let d = self.root.nearest(x, y, 0.0, radius);
        if d < radius {
            d
        } else {
            f32::INFINITY
        }
    }

    /// Bounded search used by best-candidate sampling.
    ///
    /// Returns `lower` as soon as any point within `lower` is found. Otherwise returns
    /// the smaller of `upper` and the true nearest distance.
    pub fn nearest_bounded(&self, x: f32, y: f32, lower: f32, upper: f32) -> f32 {
        self.root.nearest(x, y, lower, upper)
    }
}

impl Node {
    fn leaf(min_x: f32, min_y: f32, half: f32) -> Self {
        Self {
            min_x,
            min_y,
            half,
            content: Content::Leaf(Vec::with_capacity(MAX_POINTS_PER_NODE)),
        }
    }

    fn quadrant(&self, x: f32, y: f32) -> usize {
        let px = x >= self.min_x + self.half;
        let py = y >= self.min_y + self.half;
        match (px, py) {
            (true, false) => PXNY,
            (false, false) => NXNY,
            (false, true) => NXPY,
            (true, true) => PXPY,
        }
    }

    fn child(&self, quadrant: usize) -> Node {
        let h = self.half;
        let (ox, oy) = match quadrant {
            PXNY => (h, 0.0),
            NXNY => (0.0, 0.0),
            NXPY => (0.0, h),
            _ => (h, h),
        };
        Node::leaf(self.min_x + ox, self.min_y + oy, h * 0.5)
    }

    fn insert(&mut self, point: Vec2<f32>) {
        let q = self.quadrant(point.x, point.y);
        let unbounded = self.half <= MIN_HALF_SIZE;
        match &mut self.content {
            Content::Split(children) => children[q].insert(point),
            Content::Leaf(points) if points.len() < MAX_POINTS_PER_NODE || unbounded => {
                points.push(point)
            }
            Content::Leaf(_) => self.split(point),
        }
    }

    fn split(&mut self, point: Vec2<f32>) {
        let mut children = Box::new([
            self.child(PXNY),
            self.child(NXNY),
            self.child(NXPY),
            self.child(PXPY),
        ]);
        let old = std::mem::replace(&mut self.content, Content::Leaf(Vec::new()));
        if let Content::Leaf(points) = old {
            for p in points.into_iter().chain(std::iter::once(point)) {
                children[self.quadrant(p.x, p.y)].insert(p);
            }
        }
        self.content = Content::Split(children);
    }

    fn nearest(&self, x: f32, y: f32, lower: f32, upper: f32) -> f32 {
        let size = self.half * 2.0;
        if x < self.min_x - upper
            || x > self.min_x + size + upper
            || y < self.min_y - upper
            || y > self.min_y + size + upper
        {
            return upper;
        }
        match &self.content {
            Content::Split(children) => {
                let mut upper = upper;
                let mut q = self.quadrant(x, y);
                for _ in 0..4 {
                    upper = upper.min(children[q].nearest(x, y, lower, upper));
                    if upper <= lower {
                        return lower;
                    }
                    q = (q + 1) & 3;
                }
                upper
            }
            Content::Leaf(points) => {
                let lower2 = lower * lower;
                let mut upper2 = upper * upper;
                let mut improved = false;
                for p in points {
                    let dx = p.x - x;
                    let dy = p.y - y;
                    let d2 = dx * dx + dy * dy;
                    if d2 <= lower2 {
                        return lower;
                    }
                    if d2 < upper2 {
                        upper2 = d2;
                        improved = true;
                    }
                }
                if improved {
                    upper2.sqrt()
                } else {
                    upper
                }
            }
        }
    }
}
