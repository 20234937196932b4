//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::consts::{CRAFT_NOSE_LENGTH, CRAFT_TAIL_LENGTH, CRAFT_TAIL_SPREAD};
use crate::heading_vector;

/// Corner points of the craft triangle: nose first, then the two tails
pub fn craft_outline(pos: Vec2, heading: f32) -> [Vec2; 3] {
    [
        pos + heading_vector(heading) * CRAFT_NOSE_LENGTH,
        pos + heading_vector(heading + CRAFT_TAIL_SPREAD) * CRAFT_TAIL_LENGTH,
        pos + heading_vector(heading - CRAFT_TAIL_SPREAD) * CRAFT_TAIL_LENGTH,
    ]
}

/// Generate vertices for the heading-oriented craft triangle
pub fn craft_triangle(pos: Vec2, heading: f32, color: [f32; 4]) -> Vec<Vertex> {
    craft_outline(pos, heading)
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    let step = TAU / segments as f32;
    let rim = |i: u32| center + heading_vector(i as f32 * step) * radius;

    // Fan of triangles around the center
    for i in 0..segments {
        let (a, b) = (rim(i), rim(i + 1));
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_craft_nose_leads_heading() {
        let [nose, tail_a, tail_b] = craft_outline(Vec2::new(100.0, 100.0), 0.0);
        assert_relative_eq!(nose.x, 120.0);
        assert_relative_eq!(nose.y, 100.0);
        assert_relative_eq!(tail_a.distance(Vec2::new(100.0, 100.0)), 15.0, epsilon = 1e-4);
        // Tails mirror each other across the heading axis
        assert_relative_eq!(tail_a.x, tail_b.x, epsilon = 1e-4);
        assert_relative_eq!(tail_a.y - 100.0, 100.0 - tail_b.y, epsilon = 1e-4);
        assert!(tail_a.x < 100.0);
    }

    #[test]
    fn test_circle_vertex_count_and_radius() {
        let verts = circle(Vec2::new(10.0, 10.0), 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        let rim = Vec2::from(verts[1].position);
        assert_relative_eq!(rim.distance(Vec2::new(10.0, 10.0)), 10.0, epsilon = 1e-4);
        // Last fan triangle closes back onto the first rim point
        let closing = Vec2::from(verts[47].position);
        assert_relative_eq!(closing.x, rim.x, epsilon = 1e-4);
        assert_relative_eq!(closing.y, rim.y, epsilon = 1e-4);
    }
}
