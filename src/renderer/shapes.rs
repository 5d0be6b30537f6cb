//! Shape generation for 2D primitives
//!
//! The whole frame is axis-aligned rectangles, built CPU-side in field
//! coordinates and mapped to NDC at upload time.

use super::vertex::{Vertex, colors};
use crate::sim::Snapshot;

/// Net dash geometry: 4 px wide, 18 px tall, every 30 px from y = 10
const NET_DASH_WIDTH: f32 = 4.0;
const NET_DASH_HEIGHT: f32 = 18.0;
const NET_DASH_STRIDE: f32 = 30.0;
const NET_DASH_START_Y: f32 = 10.0;

/// Append a filled axis-aligned rectangle as two triangles
pub fn push_rect(vertices: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x0, y0, x1, y1) = (x, y, x + w, y + h);

    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));

    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y1, color));
}

/// Append the dashed center net down the middle of the field
pub fn push_net(vertices: &mut Vec<Vertex>, field_width: f32, field_height: f32) {
    let x = field_width / 2.0 - NET_DASH_WIDTH / 2.0;
    let mut y = NET_DASH_START_Y;
    while y < field_height {
        push_rect(vertices, x, y, NET_DASH_WIDTH, NET_DASH_HEIGHT, colors::NET);
        y += NET_DASH_STRIDE;
    }
}

/// Build the full frame in draw order: net, paddles, ball
pub fn scene(snap: &Snapshot) -> Vec<Vertex> {
    // 13 net dashes on the reference field plus three quads
    let mut vertices = Vec::with_capacity(16 * 6);

    push_net(&mut vertices, snap.field.width, snap.field.height);
    for paddle in [snap.left, snap.right] {
        push_rect(
            &mut vertices,
            paddle.x,
            paddle.y,
            paddle.width,
            paddle.height,
            colors::PADDLE,
        );
    }
    push_rect(
        &mut vertices,
        snap.ball.pos.x,
        snap.ball.pos.y,
        snap.ball.size,
        snap.ball.size,
        colors::BALL,
    );

    vertices
}
