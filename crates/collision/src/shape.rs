//! Collider shapes and their recomputed-on-read world-space views.

use glam::{Vec2, Vec3};

use crate::body::Body;
use crate::bounds::Aabb;
use crate::math::{Rotation, Vector};

/// Shape variant tag, used as the narrow-phase dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Convex,
    Box,
}

/// Variant-specific geometry, in local (untransformed) space.
#[derive(Debug, Clone)]
pub enum ShapeData<V> {
    /// Circle in 2D, sphere in 3D.
    Circle { radius: f32 },
    /// Convex polygon (2D) or polyhedron (3D): raw vertices plus outward
    /// face normals.
    Convex { vertices: Vec<V>, normals: Vec<V> },
    /// Axis-aligned box in local space; a convex specialization whose
    /// world vertices and face normals are derived on read.
    Box { half_extents: V },
}

/// A collider: local geometry, uniform scale, center offset and the index
/// of the owning body in the world's body list.
///
/// Shapes are created standalone and registered into a world explicitly
/// (`World2::add_shape` / `World3::add_shape`); removal is explicit too.
#[derive(Debug, Clone)]
pub struct Shape<V: Vector> {
    pub data: ShapeData<V>,
    /// Uniform scale applied to the local geometry.
    pub scale: f32,
    /// Offset of the shape center from the body position, in body space.
    pub offset: V,
    /// Index of the owning body.
    pub body: usize,
    /// Bounciness consumed by the 3D impulse pass; the 2D positional
    /// policy does not read it.
    pub restitution: f32,
}

impl<V: Vector> Shape<V> {
    pub fn circle(radius: f32, body: usize) -> Self {
        Self {
            data: ShapeData::Circle { radius },
            scale: 1.0,
            offset: V::ZERO,
            body,
            restitution: 0.0,
        }
    }

    pub fn cuboid(half_extents: V, body: usize) -> Self {
        Self {
            data: ShapeData::Box { half_extents },
            scale: 1.0,
            offset: V::ZERO,
            body,
            restitution: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: V) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        match self.data {
            ShapeData::Circle { .. } => ShapeKind::Circle,
            ShapeData::Convex { .. } => ShapeKind::Convex,
            ShapeData::Box { .. } => ShapeKind::Box,
        }
    }

    /// Compute the world-space view of this shape for its owning body's
    /// current transform. Derived quantities are recomputed on every read
    /// and never cached, so a view taken after a correction step reflects
    /// the corrected transform.
    pub fn world_view<R: Rotation<V>>(&self, body: &Body<V, R>) -> WorldShape<V> {
        let rotation = body.rotation();
        let center = body.position() + rotation.rotate(self.offset * self.scale);
        match &self.data {
            ShapeData::Circle { radius } => {
                let radius = radius * self.scale;
                WorldShape {
                    kind: ShapeKind::Circle,
                    body: self.body,
                    center,
                    radius,
                    vertices: Vec::new(),
                    normals: Vec::new(),
                    bounds: Aabb::from_center_half_extents(center, V::splat(radius)),
                    restitution: self.restitution,
                }
            }
            ShapeData::Convex { vertices, normals } => {
                let vertices: Vec<V> = vertices
                    .iter()
                    .map(|&v| center + rotation.rotate(v * self.scale))
                    .collect();
                let normals = normals.iter().map(|&n| rotation.rotate(n)).collect();
                let bounds = bounds_of(&vertices);
                WorldShape {
                    kind: ShapeKind::Convex,
                    body: self.body,
                    center,
                    radius: 0.0,
                    vertices,
                    normals,
                    bounds,
                    restitution: self.restitution,
                }
            }
            ShapeData::Box { half_extents } => {
                let half = *half_extents * self.scale;
                let vertices: Vec<V> = box_corners(half)
                    .into_iter()
                    .map(|v| center + rotation.rotate(v))
                    .collect();
                let normals = (0..V::DIM)
                    .map(|axis| rotation.rotate(V::unit_axis(axis)))
                    .collect();
                let bounds = bounds_of(&vertices);
                WorldShape {
                    kind: ShapeKind::Box,
                    body: self.body,
                    center,
                    radius: 0.0,
                    vertices,
                    normals,
                    bounds,
                    restitution: self.restitution,
                }
            }
        }
    }
}

impl Shape<Vec2> {
    /// Convex polygon from counter-clockwise vertices (shape-local space).
    /// Outward edge normals are derived here once.
    pub fn convex_polygon(vertices: Vec<Vec2>, body: usize) -> Self {
        let normals = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| {
                let edge = b - a;
                Vec2::new(edge.y, -edge.x).normalize_or_zero()
            })
            .collect();
        Self {
            data: ShapeData::Convex { vertices, normals },
            scale: 1.0,
            offset: Vec2::ZERO,
            body,
            restitution: 0.0,
        }
    }
}

impl Shape<Vec3> {
    /// Sphere: the 3D spelling of [`Shape::circle`].
    pub fn sphere(radius: f32, body: usize) -> Self {
        Self::circle(radius, body)
    }

    /// Convex polyhedron from vertices and outward face normals
    /// (shape-local space). The caller supplies the normals; boxes and
    /// other fixed solids should prefer [`Shape::cuboid`].
    pub fn convex_polyhedron(vertices: Vec<Vec3>, normals: Vec<Vec3>, body: usize) -> Self {
        Self {
            data: ShapeData::Convex { vertices, normals },
            scale: 1.0,
            offset: Vec3::ZERO,
            body,
            restitution: 0.0,
        }
    }
}

/// World-space snapshot of one shape: everything the narrow phase reads.
#[derive(Debug, Clone)]
pub struct WorldShape<V: Vector> {
    pub kind: ShapeKind,
    pub body: usize,
    pub center: V,
    /// World radius; zero for non-circles.
    pub radius: f32,
    /// World vertices; empty for circles.
    pub vertices: Vec<V>,
    /// World face-normal axis candidates; empty for circles.
    pub normals: Vec<V>,
    pub bounds: Aabb<V>,
    pub restitution: f32,
}

fn bounds_of<V: Vector>(vertices: &[V]) -> Aabb<V> {
    let mut bounds = Aabb::inverted();
    for &v in vertices {
        bounds.include_point(v);
    }
    bounds
}

/// Local-space box corners: an explicit counter-clockwise quad in 2D (the
/// convex/circle refinement walks edges in order), all 8 sign
/// combinations in 3D.
fn box_corners<V: Vector>(half: V) -> Vec<V> {
    if V::DIM == 2 {
        let x = V::unit_axis(0) * half.component(0);
        let y = V::unit_axis(1) * half.component(1);
        vec![-x - y, x - y, x + y, -x + y]
    } else {
        let mut corners = Vec::with_capacity(1 << V::DIM);
        for signs in 0..(1u32 << V::DIM) {
            let mut corner = V::ZERO;
            for axis in 0..V::DIM {
                let sign = if signs & (1 << axis) == 0 { -1.0 } else { 1.0 };
                corner = corner + V::unit_axis(axis) * (half.component(axis) * sign);
            }
            corners.push(corner);
        }
        corners
    }
}
