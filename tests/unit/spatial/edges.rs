//! Tests for perimeter walk order and side enumeration

#[cfg(test)]
mod tests {

    use std::collections::HashSet;

    use gridprims::io::error::GeometryError;
    use gridprims::spatial::orientation::{Direction, YAxis};
    use gridprims::spatial::point::Point;
    use gridprims::spatial::rectangle::Rectangle;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    // Clockwise from top-left in array coordinates, each corner visited once
    #[test]
    fn test_perimeter_order_y_downward() {
        let walked: Vec<Point> = Rectangle::new(0, 0, 4, 3)
            .perimeter_positions(YAxis::Downward)
            .collect();
        let expected = points(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]);
        assert_eq!(walked, expected);
    }

    // With y increasing upward the top row is the maximum y row
    #[test]
    fn test_perimeter_order_y_upward() {
        let walked: Vec<Point> = Rectangle::new(0, 0, 4, 3)
            .perimeter_positions(YAxis::Upward)
            .collect();
        let expected = points(&[
            (0, 2),
            (1, 2),
            (2, 2),
            (3, 2),
            (3, 1),
            (3, 0),
            (2, 0),
            (1, 0),
            (0, 0),
            (0, 1),
        ]);
        assert_eq!(walked, expected);
    }

    #[test]
    fn test_perimeter_of_thin_rectangles_has_no_repeats() {
        let row: Vec<Point> = Rectangle::new(0, 0, 3, 1)
            .perimeter_positions(YAxis::Downward)
            .collect();
        assert_eq!(row, points(&[(0, 0), (1, 0), (2, 0)]));

        let column: Vec<Point> = Rectangle::new(0, 0, 1, 3)
            .perimeter_positions(YAxis::Downward)
            .collect();
        assert_eq!(column, points(&[(0, 0), (0, 1), (0, 2)]));

        let single: Vec<Point> = Rectangle::new(4, 4, 1, 1)
            .perimeter_positions(YAxis::Upward)
            .collect();
        assert_eq!(single, points(&[(4, 4)]));
    }

    #[test]
    fn test_perimeter_of_empty_rectangle() {
        assert_eq!(
            Rectangle::EMPTY.perimeter_positions(YAxis::Downward).count(),
            0
        );
        assert_eq!(
            Rectangle::new(0, 0, -2, 5)
                .perimeter_positions(YAxis::Downward)
                .count(),
            0
        );
    }

    #[test]
    fn test_perimeter_covers_boundary_exactly_once() {
        let rect = Rectangle::new(2, 3, 5, 6);
        let walk = rect.perimeter_positions(YAxis::Downward);
        assert_eq!(walk.len(), 18);

        let walked: Vec<Point> = walk.collect();
        let unique: HashSet<Point> = walked.iter().copied().collect();
        assert_eq!(unique.len(), walked.len());
        for pos in &walked {
            assert!(
                rect.is_on_left_edge(*pos)
                    || rect.is_on_right_edge(*pos)
                    || rect.is_on_top_edge(*pos, YAxis::Downward)
                    || rect.is_on_bottom_edge(*pos, YAxis::Downward)
            );
        }
    }

    #[test]
    fn test_perimeter_walk_is_restartable() {
        let walk = Rectangle::new(0, 0, 3, 3).perimeter_positions(YAxis::Downward);
        let first: Vec<Point> = walk.clone().collect();
        let second: Vec<Point> = walk.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_and_bottom_edges_follow_orientation() {
        let rect = Rectangle::new(1, 1, 2, 3);
        let top_down: Vec<Point> = rect.top_edge_positions(YAxis::Downward).collect();
        let top_up: Vec<Point> = rect.top_edge_positions(YAxis::Upward).collect();
        let bottom_down: Vec<Point> = rect.bottom_edge_positions(YAxis::Downward).collect();

        assert_eq!(top_down, points(&[(1, 1), (2, 1)]));
        assert_eq!(top_up, points(&[(1, 3), (2, 3)]));
        assert_eq!(bottom_down, top_up);
    }

    #[test]
    fn test_left_and_right_edges() {
        let rect = Rectangle::new(1, 1, 2, 3);
        let left: Vec<Point> = rect.left_edge_positions().collect();
        let right: Vec<Point> = rect.right_edge_positions().collect();
        assert_eq!(left, points(&[(1, 1), (1, 2), (1, 3)]));
        assert_eq!(right, points(&[(2, 1), (2, 2), (2, 3)]));
    }

    #[test]
    fn test_positions_on_side() {
        let rect = Rectangle::new(0, 0, 3, 2);

        let up: Vec<Point> = rect
            .positions_on_side(Direction::Up, YAxis::Downward)
            .expect("Failed to retrieve side positions")
            .collect();
        assert_eq!(up, rect.min_y_positions().collect::<Vec<_>>());

        let up_flipped: Vec<Point> = rect
            .positions_on_side(Direction::Up, YAxis::Upward)
            .expect("Failed to retrieve side positions")
            .collect();
        assert_eq!(up_flipped, rect.max_y_positions().collect::<Vec<_>>());

        let right: Vec<Point> = rect
            .positions_on_side(Direction::Right, YAxis::Downward)
            .expect("Failed to retrieve side positions")
            .collect();
        assert_eq!(right, rect.max_x_positions().collect::<Vec<_>>());

        let left: Vec<Point> = rect
            .positions_on_side(Direction::Left, YAxis::Upward)
            .expect("Failed to retrieve side positions")
            .collect();
        assert_eq!(left, rect.min_x_positions().collect::<Vec<_>>());
    }

    #[test]
    fn test_non_cardinal_side_is_rejected() {
        let rect = Rectangle::new(0, 0, 3, 2);
        for direction in [Direction::UpLeft, Direction::DownRight, Direction::None] {
            let err = rect
                .positions_on_side(direction, YAxis::Downward)
                .unwrap_err();
            assert_eq!(err, GeometryError::NonCardinalSide { direction });
        }
    }

    #[test]
    fn test_edge_predicates() {
        let rect = Rectangle::new(0, 0, 4, 4);
        assert!(rect.is_on_top_edge(Point::new(2, 0), YAxis::Downward));
        assert!(!rect.is_on_top_edge(Point::new(2, 0), YAxis::Upward));
        assert!(rect.is_on_bottom_edge(Point::new(2, 0), YAxis::Upward));
        assert!(rect.is_on_left_edge(Point::new(0, 3)));
        assert!(!rect.is_on_left_edge(Point::new(0, 4)));
        assert!(rect.is_on_right_edge(Point::new(3, 1)));
        assert!(!rect.is_on_top_edge(Point::new(4, 0), YAxis::Downward));
    }
}
