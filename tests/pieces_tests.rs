//! Pieces tests - shape table, spawning and rotation

use tui_blockfall::core::{rotate_points, spawn_points, template_points, GameState, SHAPES};
use tui_blockfall::types::{Point, SHAPE_COUNT, SQUARE_SHAPE};

#[test]
fn test_shape_table() {
    assert_eq!(SHAPES.len(), SHAPE_COUNT as usize);
    assert_eq!(SHAPES[0], [1, 3, 5, 7]);
    assert_eq!(SHAPES[6], [2, 3, 4, 5]);
}

#[test]
fn test_template_uses_two_column_grid() {
    assert_eq!(
        template_points(3),
        [
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(0, 2),
            Point::new(1, 3),
        ]
    );
}

#[test]
fn test_spawn_is_centered_above_field() {
    for shape in 0..SHAPE_COUNT {
        let cells = spawn_points(shape, 10);
        for p in cells {
            assert!(p.x == 5 || p.x == 6, "shape {shape} spawned at {p:?}");
            assert!((-3..=0).contains(&p.y), "shape {shape} spawned at {p:?}");
        }
    }

    let vertical = spawn_points(0, 10);
    assert!(vertical.iter().all(|p| p.x == 6));
    assert_eq!(vertical.map(|p| p.y), [-3, -2, -1, 0]);
}

#[test]
fn test_rotation_turns_about_second_cell() {
    let vertical = [
        Point::new(4, 2),
        Point::new(4, 3),
        Point::new(4, 4),
        Point::new(4, 5),
    ];
    let rotated = rotate_points(&vertical);
    assert_eq!(
        rotated,
        [
            Point::new(5, 3),
            Point::new(4, 3),
            Point::new(3, 3),
            Point::new(2, 3),
        ]
    );
}

#[test]
fn test_four_rotations_return_home() {
    let start = spawn_points(4, 10).map(|p| p.offset(0, 8));
    let mut cells = start;
    for _ in 0..4 {
        cells = rotate_points(&cells);
    }
    assert_eq!(cells, start);
}

#[test]
fn test_square_never_rotates() {
    let mut state = GameState::new(10, 20, 1);
    state.start();
    let cells = spawn_points(SQUARE_SHAPE, 10).map(|p| p.offset(0, 5));
    state.set_current_piece(SQUARE_SHAPE, 7, cells);

    assert!(!state.rotate());
    assert_eq!(state.current_piece(), &cells);
}
