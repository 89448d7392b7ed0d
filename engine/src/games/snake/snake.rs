use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::types::{Direction, Point};

/// One body cell together with the heading it had when it entered that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Point,
    pub direction: Direction,
}

impl Segment {
    pub fn new(position: Point, direction: Direction) -> Self {
        Self { position, direction }
    }
}

/// Head first, tail last. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Segment>,
}

impl Snake {
    pub fn new(start: Point, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([Segment::new(start, direction)]),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Result<Self, String> {
        let body: VecDeque<Segment> = segments.into_iter().collect();
        if body.is_empty() {
            return Err("Snake needs at least one segment".to_string());
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Segment {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Segment {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.iter().any(|segment| segment.position == point)
    }

    /// Pushes a new head and drops the tail: every segment takes the place of
    /// the one in front of it.
    pub fn advance(&mut self, new_head: Segment) {
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    pub fn grow(&mut self, new_tail: Segment) {
        self.body.push_back(new_tail);
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head().position;
        self.body.iter().skip(1).any(|segment| segment.position == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x: u32, y: u32) -> Segment {
        Segment::new(Point::new(x, y), Direction::Right)
    }

    #[test]
    fn test_advance_shifts_every_segment() {
        let mut snake = Snake::from_segments([segment(20, 0), segment(10, 0), segment(0, 0)]).unwrap();
        snake.advance(Segment::new(Point::new(20, 10), Direction::Down));

        let positions: Vec<Point> = snake.segments().map(|s| s.position).collect();
        assert_eq!(positions, vec![Point::new(20, 10), Point::new(20, 0), Point::new(10, 0)]);
        assert_eq!(snake.head().direction, Direction::Down);
        assert_eq!(snake.tail().direction, Direction::Right);
    }

    #[test]
    fn test_grow_appends_after_tail() {
        let mut snake = Snake::new(Point::new(0, 0), Direction::Right);
        snake.grow(segment(90, 0));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail().position, Point::new(90, 0));
    }

    #[test]
    fn test_head_hits_body() {
        let snake = Snake::from_segments([segment(0, 0), segment(10, 0), segment(0, 0)]).unwrap();
        assert!(snake.head_hits_body());

        let snake = Snake::from_segments([segment(0, 0), segment(10, 0)]).unwrap();
        assert!(!snake.head_hits_body());
    }

    #[test]
    fn test_empty_snake_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_err());
    }
}
