use super::types::{Point, SNAKE_SIZE};

pub fn advance(pos: Point, bearing: Point, board_width: i32, board_height: i32) -> Point {
    Point::new(
        next_axis(pos.x, bearing.x, board_width),
        next_axis(pos.y, bearing.y, board_height),
    )
}

fn next_axis(position: i32, bearing: i32, boundary: i32) -> i32 {
    let axis = position + SNAKE_SIZE * bearing;
    if axis < 0 {
        axis + boundary
    } else if axis + SNAKE_SIZE > boundary {
        axis - boundary
    } else {
        axis
    }
}

// Strict intersection: rectangles that only share an edge do not collide.
pub fn rects_intersect(a: Point, a_size: i32, b: Point, b_size: i32) -> bool {
    a.x < b.x + b_size && b.x < a.x + a_size && a.y < b.y + b_size && b.y < a.y + a_size
}
