//! Procedural meshes used by the demos. All triangle meshes index into an
//! interleaved vertex array; `axes` and `grid` produce line-pair indices.

use crate::MeshData;
use glam::{Vec2, Vec3};
use glint_common::Vertex;
use std::f32::consts::PI;

fn vert(pos: [f32; 3], color: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex::new(
        Vec3::from_array(pos),
        Vec3::from_array(color),
        Vec3::from_array(normal),
        Vec2::from_array(uv),
    )
}

/// Single RGB triangle in the XY plane.
pub fn triangle() -> MeshData {
    let vertices = vec![
        vert([0.5, -0.5, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        vert([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.5, 1.0]),
    ];
    MeshData::new(vertices, vec![0, 1, 2])
}

/// Unit quad in the XY plane, two triangles.
pub fn quad() -> MeshData {
    let vertices = vec![
        vert([0.5, 0.5, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
        vert([0.5, -0.5, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        vert([-0.5, -0.5, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([-0.5, 0.5, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    ];
    MeshData::new(vertices, vec![0, 1, 3, 1, 2, 3])
}

/// Unit cube, 24 vertices (4 per face so normals stay flat), 36 indices.
pub fn cube() -> MeshData {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let faces: [([f32; 3], [f32; 3], [[f32; 3]; 4]); 6] = [
        // (normal, face color, corners)
        ([0.0, 0.0,  1.0], [1.0, 0.0, 0.0],
         [[-p, -p,  p], [ p, -p,  p], [ p,  p,  p], [-p,  p,  p]]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0],
         [[ p, -p, -p], [-p, -p, -p], [-p,  p, -p], [ p,  p, -p]]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0],
         [[-p, -p, -p], [-p, -p,  p], [-p,  p,  p], [-p,  p, -p]]),
        ([1.0, 0.0, 0.0], [1.0, 1.0, 0.0],
         [[ p, -p,  p], [ p, -p, -p], [ p,  p, -p], [ p,  p,  p]]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 1.0],
         [[-p, -p, -p], [ p, -p, -p], [ p, -p,  p], [-p, -p,  p]]),
        ([0.0, 1.0, 0.0], [0.0, 1.0, 1.0],
         [[-p,  p,  p], [ p,  p,  p], [ p,  p, -p], [-p,  p, -p]]),
    ];
    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, color, corners)) in faces.iter().enumerate() {
        let base = (face * 4) as u32;
        for (corner, uv) in corners.iter().zip(uvs) {
            vertices.push(vert(*corner, *color, *normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData::new(vertices, indices)
}

/// UV sphere. Vertex count is `(stacks + 1) * (sectors + 1)`.
pub fn sphere(radius: f32, sectors: u32, stacks: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let sector_step = 2.0 * PI / sectors as f32;
    let stack_step = PI / stacks as f32;
    let inv_len = 1.0 / radius;

    for i in 0..=stacks {
        let stack_angle = PI / 2.0 - i as f32 * stack_step;
        let xy = radius * stack_angle.cos();
        let z = radius * stack_angle.sin();

        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step;
            let x = xy * sector_angle.cos();
            let y = xy * sector_angle.sin();
            let uv = [j as f32 / sectors as f32, i as f32 / stacks as f32];
            vertices.push(vert(
                [x, y, z],
                [1.0, 1.0, 1.0],
                [x * inv_len, y * inv_len, z * inv_len],
                uv,
            ));
        }
    }

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;
        for _ in 0..sectors {
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    MeshData::new(vertices, indices)
}

/// Segmented plane in the XY plane, facing +Z.
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let grid_x = width / width_segments as f32;
    let grid_y = height / height_segments as f32;

    for iy in 0..=height_segments {
        let y = -half_h + iy as f32 * grid_y;
        for ix in 0..=width_segments {
            let x = -half_w + ix as f32 * grid_x;
            vertices.push(vert(
                [x, y, 0.0],
                [1.0, 1.0, 1.0],
                [0.0, 0.0, 1.0],
                [
                    ix as f32 / width_segments as f32,
                    iy as f32 / height_segments as f32,
                ],
            ));
        }
    }

    let row = width_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData::new(vertices, indices)
}

/// Open-ended side wall plus two center-fan caps.
pub fn cylinder(radius: f32, height: f32, sectors: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let sector_step = 2.0 * PI / sectors as f32;
    let half_h = height * 0.5;

    // Side wall: a bottom/top vertex pair per sector.
    for i in 0..=sectors {
        let angle = i as f32 * sector_step;
        let x = radius * angle.cos();
        let z = radius * angle.sin();
        let n = [x / radius, 0.0, z / radius];
        let u = i as f32 / sectors as f32;
        vertices.push(vert([x, -half_h, z], [1.0, 0.0, 0.0], n, [u, 0.0]));
        vertices.push(vert([x, half_h, z], [1.0, 0.0, 0.0], n, [u, 1.0]));
    }
    for i in 0..sectors {
        let k1 = i * 2;
        let k2 = k1 + 2;
        indices.extend_from_slice(&[k1, k1 + 1, k2, k2, k1 + 1, k2 + 1]);
    }

    // Caps.
    for (y, ny) in [(-half_h, -1.0_f32), (half_h, 1.0)] {
        let center = vertices.len() as u32;
        vertices.push(vert([0.0, y, 0.0], [0.8, 0.8, 0.8], [0.0, ny, 0.0], [0.5, 0.5]));
        for i in 0..=sectors {
            let angle = i as f32 * sector_step;
            let (x, z) = (radius * angle.cos(), radius * angle.sin());
            vertices.push(vert(
                [x, y, z],
                [0.8, 0.8, 0.8],
                [0.0, ny, 0.0],
                [0.5 + angle.cos() * 0.5, 0.5 + angle.sin() * 0.5],
            ));
        }
        for i in 0..sectors {
            let a = center + 1 + i;
            let b = center + 2 + i;
            if ny < 0.0 {
                indices.extend_from_slice(&[center, a, b]);
            } else {
                indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    MeshData::new(vertices, indices)
}

/// Cone: fan side wall toward an apex plus a base cap.
pub fn cone(radius: f32, height: f32, sectors: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let sector_step = 2.0 * PI / sectors as f32;
    let half_h = height * 0.5;
    // Slant normal tilt factor for the side wall.
    let slope = radius / height;

    for i in 0..=sectors {
        let angle = i as f32 * sector_step;
        let (cos_a, sin_a) = (angle.cos(), angle.sin());
        let n = Vec3::new(cos_a, slope, sin_a).normalize().to_array();
        let u = i as f32 / sectors as f32;
        vertices.push(vert(
            [radius * cos_a, -half_h, radius * sin_a],
            [1.0, 0.5, 0.0],
            n,
            [u, 0.0],
        ));
        vertices.push(vert([0.0, half_h, 0.0], [1.0, 0.5, 0.0], n, [u, 1.0]));
    }
    for i in 0..sectors {
        let k = i * 2;
        indices.extend_from_slice(&[k, k + 1, k + 2]);
    }

    let center = vertices.len() as u32;
    vertices.push(vert(
        [0.0, -half_h, 0.0],
        [0.8, 0.8, 0.8],
        [0.0, -1.0, 0.0],
        [0.5, 0.5],
    ));
    for i in 0..=sectors {
        let angle = i as f32 * sector_step;
        vertices.push(vert(
            [radius * angle.cos(), -half_h, radius * angle.sin()],
            [0.8, 0.8, 0.8],
            [0.0, -1.0, 0.0],
            [0.5 + angle.cos() * 0.5, 0.5 + angle.sin() * 0.5],
        ));
    }
    for i in 0..sectors {
        indices.extend_from_slice(&[center, center + 1 + i, center + 2 + i]);
    }

    MeshData::new(vertices, indices)
}

/// XYZ axis gizmo: three colored line segments from the origin.
/// 6 vertices, 6 indices, drawn with `draw_lines`.
pub fn axes(length: f32) -> MeshData {
    let origin = [0.0, 0.0, 0.0];
    let red = [1.0, 0.0, 0.0];
    let green = [0.0, 1.0, 0.0];
    let blue = [0.0, 0.0, 1.0];
    let up = [0.0, 1.0, 0.0];
    let vertices = vec![
        vert(origin, red, up, [0.0, 0.0]),
        vert([length, 0.0, 0.0], red, up, [0.0, 0.0]),
        vert(origin, green, up, [0.0, 0.0]),
        vert([0.0, length, 0.0], green, up, [0.0, 0.0]),
        vert(origin, blue, up, [0.0, 0.0]),
        vert([0.0, 0.0, length], blue, up, [0.0, 0.0]),
    ];
    MeshData::new(vertices, vec![0, 1, 2, 3, 4, 5])
}

/// Floor grid in the XZ plane, line pairs along both axes.
pub fn grid(half_extent: i32, spacing: f32) -> MeshData {
    let mut vertices = Vec::new();
    let color = [0.4, 0.4, 0.4];
    let up = [0.0, 1.0, 0.0];
    let extent = half_extent as f32 * spacing;

    for i in -half_extent..=half_extent {
        let offset = i as f32 * spacing;
        // Lines along X
        vertices.push(vert([-extent, 0.0, offset], color, up, [0.0, 0.0]));
        vertices.push(vert([extent, 0.0, offset], color, up, [0.0, 0.0]));
        // Lines along Z
        vertices.push(vert([offset, 0.0, -extent], color, up, [0.0, 0.0]));
        vertices.push(vert([offset, 0.0, extent], color, up, [0.0, 0.0]));
    }
    let indices = (0..vertices.len() as u32).collect();
    MeshData::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_minimal() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn quad_two_triangles() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn cube_flat_normals() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn sphere_counts_match_formula() {
        let mesh = sphere(1.0, 36, 18);
        assert_eq!(mesh.vertex_count(), 37 * 19);
        assert!(mesh.validate().is_ok());
        // Poles contribute one triangle per sector, interior stacks two.
        assert_eq!(mesh.index_count() as u32, 3 * (2 * 36 * (18 - 1)));
    }

    #[test]
    fn plane_segment_grid() {
        let mesh = plane(2.0, 2.0, 4, 3);
        assert_eq!(mesh.vertex_count(), 5 * 4);
        assert_eq!(mesh.index_count(), 6 * 4 * 3);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn cylinder_and_cone_valid() {
        assert!(cylinder(1.0, 2.0, 36).validate().is_ok());
        assert!(cone(1.0, 2.0, 36).validate().is_ok());
    }

    #[test]
    fn axes_is_three_line_pairs() {
        let mesh = axes(2.0);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn grid_line_pairs() {
        let mesh = grid(2, 1.0);
        assert_eq!(mesh.vertex_count() % 2, 0);
        assert_eq!(mesh.index_count(), mesh.vertex_count());
        assert!(mesh.validate().is_ok());
    }
}
