//! Octree counterpart of [`QuadTree`](crate::sampling::QuadTree) for 3D samples.
use crate::linalg::Vec3;
use crate::sampling::quadtree::MAX_POINTS_PER_NODE;

const MIN_HALF_SIZE: f32 = 1e-6;

/// Insert-only point index over the cube with corner `(min_x, min_y, min_z)` and edge
/// length `size`.
#[derive(Debug, Clone)]
pub struct Octree {
    root: Node,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    min: Vec3<f32>,
    half: f32,
    content: Content,
}

#[derive(Debug, Clone)]
enum Content {
    Leaf(Vec<Vec3<f32>>),
    Split(Box<[Node; 8]>),
}

impl Octree {
    pub fn new(min_x: f32, min_y: f32, min_z: f32, size: f32) -> Self {
        Self {
            root: Node::leaf(Vec3::new(min_x, min_y, min_z), size * 0.5),
            len: 0,
        }
    }

    pub fn insert(&mut self, point: Vec3<f32>) {
        self.root.insert(point);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance to the closest point, or `+inf` if the tree is empty.
    pub fn nearest_distance(&self, x: f32, y: f32, z: f32) -> f32 {
        self.root.nearest(Vec3::new(x, y, z), 0.0, f32::INFINITY)
    }

    /// See [`QuadTree::nearest_bounded`](crate::sampling::QuadTree::nearest_bounded).
    pub fn nearest_bounded(&self, x: f32, y: f32, z: f32, lower: f32, upper: f32) -> f32 {
        self.root.nearest(Vec3::new(x, y, z), lower, upper)
    }
}

impl Node {
    fn leaf(min: Vec3<f32>, half: f32) -> Self {
        Self {
            min,
            half,
            content: Content::Leaf(Vec::with_capacity(MAX_POINTS_PER_NODE)),
        }
    }

    /// Bit 0 selects +x, bit 1 +y, bit 2 +z.
    fn octant(&self, p: Vec3<f32>) -> usize {
        let h = self.half;
        usize::from(p.x >= self.min.x + h)
            | usize::from(p.y >= self.min.y + h) << 1
            | usize::from(p.z >= self.min.z + h) << 2
    }

    fn child(&self, octant: usize) -> Node {
        let h = self.half;
        let offset = |bit: usize| if octant & bit != 0 { h } else { 0.0 };
        Node::leaf(
            self.min + Vec3::new(offset(1), offset(2), offset(4)),
            h * 0.5,
        )
    }

    fn insert(&mut self, point: Vec3<f32>) {
        let o = self.octant(point);
        let unbounded = self.half <= MIN_HALF_SIZE;
        match &mut self.content {
            Content::Split(children) => children[o].insert(point),
            Content::Leaf(points) if points.len() < MAX_POINTS_PER_NODE || unbounded => {
                points.push(point)
            }
            Content::Leaf(_) => self.split(point),
        }
    }

    fn split(&mut self, point: Vec3<f32>) {
        let mut children: Box<[Node; 8]> = Box::new(std::array::from_fn(|o| self.child(o)));
        let old = std::mem::replace(&mut self.content, Content::Leaf(Vec::new()));
        if let Content::Leaf(points) = old {
            for p in points.into_iter().chain(std::iter::once(point)) {
                children[self.octant(p)].insert(p);
            }
        }
        self.content = Content::Split(children);
    }

    fn nearest(&self, q: Vec3<f32>, lower: f32, upper: f32) -> f32 {
        let size = self.half * 2.0;
        let outside = |v: f32, min: f32| v < min - upper || v > min + size + upper;
        if outside(q.x, self.min.x) || outside(q.y, self.min.y) || outside(q.z, self.min.z) {
            return upper;
        }
        match &self.content {
            Content::Split(children) => {
                let mut upper = upper;
                let mut o = self.octant(q);
                for _ in 0..8 {
                    upper = upper.min(children[o].nearest(q, lower, upper));
                    if upper <= lower {
                        return lower;
                    }
                    o = (o + 1) & 7;
                }
                upper
            }
            Content::Leaf(points) => {
                let lower2 = lower * lower;
                let mut upper2 = upper * upper;
                let mut improved = false;
                for p in points {
                    let d2 = p.distance_squared(q);
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
