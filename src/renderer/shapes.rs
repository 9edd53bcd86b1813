//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned box (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let [bl, tl, tr, br] = r.corners();
    vec![
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(bl.x, bl.y, color),
    ]
}

/// Generate vertices for a filled ellipse inscribed in a box
pub fn ellipse(r: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let center = r.center();
    let radii = r.size * 0.5;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        center + Vec2::new(radii.x * theta.cos(), radii.y * theta.sin())
    };

    for i in 0..segments {
        let p1 = point(i);
        let p2 = point(i + 1);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a five-pointed star inscribed in a box
pub fn star(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let center = r.center();
    let outer = r.size * 0.5;
    let inner = outer * 0.4;
    let mut vertices = Vec::with_capacity(30);

    let point = |i: u32| {
        let theta = PI / 2.0 + i as f32 * PI / 5.0;
        let radii = if i % 2 == 0 { outer } else { inner };
        center + Vec2::new(radii.x * theta.cos(), radii.y * theta.sin())
    };

    for i in 0..10 {
        let p1 = point(i);
        let p2 = point(i + 1);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}
