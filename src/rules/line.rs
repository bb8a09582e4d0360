//! Line scanning shared by win detection, forbidden moves and evaluation
//!
//! A scan walks outward from an origin cell in both senses of one axis and
//! reports how many contiguous stones of one color it found and how many of
//! the two ends are blocked (board edge or opposing stone).

use crate::board::{Board, Pos, Stone};

/// The four line axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (0, 1)
    Horizontal,
    /// (1, 0)
    Vertical,
    /// (1, 1)
    DiagonalDown,
    /// (1, -1)
    DiagonalUp,
}

impl Direction {
    /// Scan order; win detection reports the first match in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Result of scanning one axis from one origin for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePattern {
    /// Contiguous stones including the origin (always >= 1)
    pub count: u8,
    /// Ends terminated by the edge or an opponent stone (0, 1 or 2)
    pub blocked_ends: u8,
}

impl LinePattern {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.blocked_ends == 0
    }
}

/// Walk away from `origin` along `(dr, dc)`.
/// Returns the number of matching stones passed and whether the walk was blocked.
#[inline]
fn walk(board: &Board, origin: Pos, dr: i32, dc: i32, stone: Stone) -> (u8, bool) {
    let mut steps = 0u8;
    let mut dist = 1;
    loop {
        let Some(pos) = origin.offset(dr, dc, dist) else {
            return (steps, true);
        };
        let cell = board.get(pos);
        if cell == stone {
            steps += 1;
            dist += 1;
        } else {
            return (steps, cell != Stone::Empty);
        }
    }
}

/// Scan one axis through `origin` for `stone`.
///
/// The origin itself is counted once whatever it holds; callers simulating a
/// placement pass a board copy with the origin already set.
pub fn scan(board: &Board, origin: Pos, direction: Direction, stone: Stone) -> LinePattern {
    let (dr, dc) = direction.delta();
    let (fwd, fwd_blocked) = walk(board, origin, dr, dc, stone);
    let (back, back_blocked) = walk(board, origin, -dr, -dc, stone);

    LinePattern {
        count: 1 + fwd + back,
        blocked_ends: u8::from(fwd_blocked) + u8::from(back_blocked),
    }
}

/// Scan all four axes in [`Direction::ALL`] order.
pub fn scan_all(board: &Board, origin: Pos, stone: Stone) -> [LinePattern; 4] {
    Direction::ALL.map(|dir| scan(board, origin, dir, stone))
}

/// Matched cells along one axis, ordered from the negative extreme to the
/// positive extreme (origin included).
pub fn scan_cells(board: &Board, origin: Pos, direction: Direction, stone: Stone) -> Vec<Pos> {
    let (dr, dc) = direction.delta();
    let mut line = vec![origin];

    let mut dist = 1;
    while let Some(prev) = origin.offset(-dr, -dc, dist) {
        if board.get(prev) != stone {
            break;
        }
        line.insert(0, prev);
        dist += 1;
    }

    dist = 1;
    while let Some(next) = origin.offset(dr, dc, dist) {
        if board.get(next) != stone {
            break;
        }
        line.push(next);
        dist += 1;
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_stone_center() {
        let board = Board::new().with_stone(Pos::center(), Stone::Black);
        for dir in Direction::ALL {
            let p = scan(&board, Pos::center(), dir, Stone::Black);
            assert_eq!(p, LinePattern { count: 1, blocked_ends: 0 });
        }
    }

    #[test]
    fn test_count_both_senses() {
        let mut board = Board::new();
        for col in 3..8 {
            board.place_stone(Pos::new(7, col), Stone::White);
        }
        let p = scan(&board, Pos::new(7, 5), Direction::Horizontal, Stone::White);
        assert_eq!(p.count, 5);
        assert_eq!(p.blocked_ends, 0);
    }

    #[test]
    fn test_opponent_and_edge_block() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        board.place_stone(Pos::new(0, 2), Stone::White);

        let p = scan(&board, Pos::new(0, 0), Direction::Horizontal, Stone::Black);
        assert_eq!(p.count, 2);
        assert_eq!(p.blocked_ends, 2);

        // Vertical: top edge blocked, below is empty
        let p = scan(&board, Pos::new(0, 0), Direction::Vertical, Stone::Black);
        assert_eq!(p, LinePattern { count: 1, blocked_ends: 1 });
    }

    #[test]
    fn test_diagonal_up_axis() {
        let mut board = Board::new();
        for i in 0..4u8 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::Black);
        }
        let p = scan(&board, Pos::new(5, 7), Direction::DiagonalUp, Stone::Black);
        assert_eq!(p.count, 4);
        assert!(p.is_open());
    }

    #[test]
    fn test_origin_counted_even_if_empty() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 6), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);
        let p = scan(&board, Pos::new(7, 7), Direction::Horizontal, Stone::Black);
        assert_eq!(p.count, 3);
    }

    #[test]
    fn test_scan_cells_ordered() {
        let mut board = Board::new();
        for i in 2..7u8 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        let cells = scan_cells(&board, Pos::new(4, 4), Direction::DiagonalDown, Stone::White);
        let expected: Vec<Pos> = (2..7u8).map(|i| Pos::new(i, i)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_scan_all_order() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 8), Stone::Black);
        let patterns = scan_all(&board, Pos::center(), Stone::Black);
        assert_eq!(patterns[0].count, 2);
        assert_eq!(patterns[1].count, 1);
    }
}
