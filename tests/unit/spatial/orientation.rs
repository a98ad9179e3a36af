//! Tests for y-axis orientation and compass direction deltas

#[cfg(test)]
mod tests {

    use gridprims::spatial::orientation::{Direction, YAxis};
    use gridprims::spatial::point::Point;

    #[test]
    fn test_top_and_bottom_follow_orientation() {
        assert_eq!(YAxis::Downward.top(2, 9), 2);
        assert_eq!(YAxis::Downward.bottom(2, 9), 9);
        assert_eq!(YAxis::Upward.top(2, 9), 9);
        assert_eq!(YAxis::Upward.bottom(2, 9), 2);
    }

    #[test]
    fn test_default_is_array_coordinates() {
        assert_eq!(YAxis::default(), YAxis::Downward);
    }

    #[test]
    fn test_vertical_deltas_flip_with_orientation() {
        assert_eq!(Direction::Up.delta(YAxis::Downward), Point::new(0, -1));
        assert_eq!(Direction::Up.delta(YAxis::Upward), Point::new(0, 1));
        assert_eq!(Direction::DownLeft.delta(YAxis::Downward), Point::new(-1, 1));
        assert_eq!(Direction::DownLeft.delta(YAxis::Upward), Point::new(-1, -1));
        assert_eq!(Direction::Right.delta(YAxis::Upward), Point::new(1, 0));
        assert_eq!(Direction::None.delta(YAxis::Downward), Point::ZERO);
    }

    #[test]
    fn test_only_axis_directions_are_cardinal() {
        let all = [
            Direction::None,
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::DownRight,
            Direction::Down,
            Direction::DownLeft,
            Direction::Left,
            Direction::UpLeft,
        ];
        let cardinal: Vec<Direction> = all.into_iter().filter(|d| d.is_cardinal()).collect();
        assert_eq!(cardinal, Direction::CARDINALS.to_vec());
    }
}
