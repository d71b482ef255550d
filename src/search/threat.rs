//! Four-threat detection
//!
//! A four is a window of five consecutive cells on one line holding four
//! stones of one color and a single empty cell that would complete a winning
//! line. Contiguous fours (`XXXX_`) and broken fours (`XX_XX`, `X_XXX`) are
//! both covered. Windows that share the same four stones are merged into one
//! [`Threat`], so an open four (`_XXXX_`) is a single threat with two
//! completion cells.

use crate::board::{Board, Direction, Pos, Stone};
use crate::rules::{run_length, Rule};

/// Simple four (one completion cell) or open four (two)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    Simple,
    Open,
}

/// A four-in-a-row pattern of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threat {
    /// Owner of the four
    pub color: Stone,
    /// Line the four lies on
    pub direction: Direction,
    /// The four occupied cells, ascending
    pub stones: [Pos; 4],
    /// Empty cells that complete a win, ascending (1 or 2 entries)
    pub completions: Vec<Pos>,
}

impl Threat {
    #[inline]
    pub fn kind(&self) -> ThreatKind {
        if self.completions.len() >= 2 {
            ThreatKind::Open
        } else {
            ThreatKind::Simple
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.kind() == ThreatKind::Open
    }

    /// True if an opposing stone on `pos` neutralizes this threat
    #[inline]
    pub fn is_blocked_by(&self, pos: Pos) -> bool {
        self.completions.len() == 1 && self.completions[0] == pos
    }
}

/// Scan one line (cells in order along `dir`) for fours of `color`,
/// merging windows with identical stones into `out`.
fn scan_line(
    board: &Board,
    cells: &[Pos],
    dir: Direction,
    color: Stone,
    rule: Rule,
    out: &mut Vec<Threat>,
) {
    if cells.len() < 5 {
        return;
    }

    let first_new = out.len();
    for window in cells.windows(5) {
        let mut stones = [window[0]; 4];
        let mut n_stones = 0;
        let mut empty = None;
        let mut n_empty = 0;

        for &p in window {
            match board.get(p) {
                s if s == color => {
                    if n_stones < 4 {
                        stones[n_stones] = p;
                    }
                    n_stones += 1;
                }
                Stone::Empty => {
                    empty = Some(p);
                    n_empty += 1;
                }
                _ => {
                    // Opponent stone kills the window
                    n_stones = 0;
                    break;
                }
            }
        }

        if n_stones != 4 || n_empty != 1 {
            continue;
        }
        let Some(eye) = empty else {
            continue;
        };
        // Filling the eye must win along this very line
        if !rule.is_win(run_length(board, eye, dir, color)) {
            continue;
        }

        match out[first_new..].iter_mut().find(|t| t.stones == stones) {
            Some(threat) => {
                if !threat.completions.contains(&eye) {
                    threat.completions.push(eye);
                    threat.completions.sort();
                }
            }
            None => out.push(Threat {
                color,
                direction: dir,
                stones,
                completions: vec![eye],
            }),
        }
    }
}

/// All cells of the line through `start` along `dir`, beginning at the edge
fn full_line(start: Pos, dir: Direction) -> Vec<Pos> {
    let mut cells = vec![start];
    let mut n = 1;
    while let Some(p) = start.offset(dir, n) {
        cells.push(p);
        n += 1;
    }
    cells
}

/// Find every four of `color` on the board.
///
/// Lines are scanned direction by direction, each from its edge cell in
/// ascending index order, so the result order is deterministic.
pub fn find_fours(board: &Board, color: Stone, rule: Rule) -> Vec<Threat> {
    let mut threats = Vec::new();
    if board.stones(color).map_or(true, |b| b.count() < 4) {
        return threats;
    }

    for &dir in &Direction::ALL {
        for idx in 0..crate::board::TOTAL_CELLS {
            let start = Pos::from_index(idx);
            // Only start at the first cell of each line
            if start.offset(dir, -1).is_some() {
                continue;
            }
            let cells = full_line(start, dir);
            scan_line(board, &cells, dir, color, rule, &mut threats);
        }
    }
    threats
}

/// Fours of `color` that include the stone at `pos`.
///
/// Only the four lines through `pos` are scanned.
pub fn fours_through(board: &Board, pos: Pos, color: Stone, rule: Rule) -> Vec<Threat> {
    let mut threats = Vec::new();

    for &dir in &Direction::ALL {
        let cells: Vec<Pos> = (-4..=4).filter_map(|n| pos.offset(dir, n)).collect();
        let before = threats.len();
        scan_line(board, &cells, dir, color, rule, &mut threats);

        // Windows near `pos` can still describe a four elsewhere on the line
        let mut i = before;
        while i < threats.len() {
            if threats[i].stones.contains(&pos) {
                i += 1;
            } else {
                threats.remove(i);
            }
        }
    }
    threats
}

/// Union of all completion cells, ascending and deduplicated
pub fn completion_cells(threats: &[Threat]) -> Vec<Pos> {
    let mut cells: Vec<Pos> = threats
        .iter()
        .flat_map(|t| t.completions.iter().copied())
        .collect();
    cells.sort();
    cells.dedup();
    cells
}

/// Cells where one opposing stone neutralizes every threat.
///
/// A cell blocks a threat only if it is that threat's sole completion cell,
/// so any open four, or two fours completing on different cells, leaves
/// this set empty: the owner wins on the next move.
pub fn blocking_cells(threats: &[Threat]) -> Vec<Pos> {
    let Some(first) = threats.first() else {
        return Vec::new();
    };
    if first.completions.len() != 1 {
        return Vec::new();
    }
    let cell = first.completions[0];
    if threats.iter().all(|t| t.is_blocked_by(cell)) {
        vec![cell]
    } else {
        Vec::new()
    }
}

/// Empty cells where `color` wins immediately, ascending
pub fn five_moves(board: &Board, color: Stone, rule: Rule) -> Vec<Pos> {
    completion_cells(&find_fours(board, color, rule))
}

/// Check if playing `color` at the empty cell `pos` creates a new four
/// (without already making five)
pub fn creates_four(board: &Board, pos: Pos, color: Stone, rule: Rule) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    if crate::rules::makes_five(board, pos, color, rule) {
        return false;
    }
    let mut after = *board;
    after.place_stone(pos, color);
    !fours_through(&after, pos, color, rule).is_empty()
}

/// Empty cells that create a four for `color` without winning, ascending.
///
/// Candidates come from windows holding three stones and two empty cells;
/// each is then confirmed with [`creates_four`].
pub fn four_moves(board: &Board, color: Stone, rule: Rule) -> Vec<Pos> {
    let mut candidates = Vec::new();
    let Some(stones) = board.stones(color) else {
        return candidates;
    };
    if stones.count() < 3 {
        return candidates;
    }

    for &dir in &Direction::ALL {
        for idx in 0..crate::board::TOTAL_CELLS {
            let start = Pos::from_index(idx);
            if start.offset(dir, -1).is_some() {
                continue;
            }
            let cells = full_line(start, dir);
            for window in cells.windows(5) {
                let mut n_stones = 0;
                let mut empties = Vec::with_capacity(2);
                for &p in window {
                    match board.get(p) {
                        s if s == color => n_stones += 1,
                        Stone::Empty => empties.push(p),
                        _ => {
                            n_stones = 0;
                            break;
                        }
                    }
                }
                if n_stones == 3 && empties.len() == 2 {
                    candidates.extend(empties);
                }
            }
        }
    }

    candidates.sort();
    candidates.dedup();
    candidates.retain(|&p| creates_four(board, p, color, rule));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a board from a list of stones
    fn setup_board(setup: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(row, col, stone) in setup {
            board.place_stone(Pos::new(row, col), stone);
        }
        board
    }

    fn black_row(row: u8, cols: &[u8]) -> Board {
        let stones: Vec<_> = cols.iter().map(|&c| (row, c, Stone::Black)).collect();
        setup_board(&stones)
    }

    #[test]
    fn test_open_four_is_one_threat() {
        // _ X X X X _
        let board = black_row(7, &[4, 5, 6, 7]);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);

        assert_eq!(threats.len(), 1);
        let t = &threats[0];
        assert_eq!(t.kind(), ThreatKind::Open);
        assert_eq!(t.direction, Direction::Horizontal);
        assert_eq!(t.completions, vec![Pos::new(7, 3), Pos::new(7, 8)]);
        assert_eq!(t.stones[0], Pos::new(7, 4));
    }

    #[test]
    fn test_blocked_four_is_simple() {
        // O X X X X _
        let mut board = black_row(7, &[4, 5, 6, 7]);
        board.place_stone(Pos::new(7, 3), Stone::White);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);

        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].kind(), ThreatKind::Simple);
        assert_eq!(threats[0].completions, vec![Pos::new(7, 8)]);
    }

    #[test]
    fn test_four_at_edge_is_simple() {
        // | X X X X _
        let board = black_row(3, &[0, 1, 2, 3]);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].completions, vec![Pos::new(3, 4)]);
    }

    #[test]
    fn test_broken_four() {
        // X X _ X X
        let board = black_row(7, &[3, 4, 6, 7]);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].completions, vec![Pos::new(7, 5)]);
    }

    #[test]
    fn test_diagonal_four() {
        let board = setup_board(&[
            (3, 3, Stone::White),
            (4, 4, Stone::White),
            (5, 5, Stone::White),
            (6, 6, Stone::White),
        ]);
        let threats = find_fours(&board, Stone::White, Rule::Freestyle);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].direction, Direction::DiagonalSE);
        assert!(threats[0].is_open());
        assert!(find_fours(&board, Stone::Black, Rule::Freestyle).is_empty());
    }

    #[test]
    fn test_three_is_not_four() {
        let board = black_row(7, &[4, 5, 6]);
        assert!(find_fours(&board, Stone::Black, Rule::Freestyle).is_empty());
    }

    #[test]
    fn test_exact_rule_drops_overline_completion() {
        // _ X X X X _ X : right completion would make six
        let board = black_row(7, &[2, 3, 4, 5, 7]);
        let free = find_fours(&board, Stone::Black, Rule::Freestyle);
        let exact = find_fours(&board, Stone::Black, Rule::Exact);

        assert_eq!(
            completion_cells(&free),
            vec![Pos::new(7, 1), Pos::new(7, 6)]
        );
        assert_eq!(completion_cells(&exact), vec![Pos::new(7, 1)]);
    }

    #[test]
    fn test_fours_through_filters_by_stone() {
        let mut board = black_row(7, &[4, 5, 6, 7]);
        // A second, unrelated four on another row
        for c in 0..4 {
            board.place_stone(Pos::new(11, c), Stone::Black);
        }
        let through = fours_through(&board, Pos::new(7, 5), Stone::Black, Rule::Freestyle);
        assert_eq!(through.len(), 1);
        assert!(through[0].stones.contains(&Pos::new(7, 5)));

        assert!(fours_through(&board, Pos::new(9, 9), Stone::Black, Rule::Freestyle).is_empty());
    }

    #[test]
    fn test_blocking_cells_single_four() {
        let mut board = black_row(7, &[4, 5, 6, 7]);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(blocking_cells(&threats), vec![Pos::new(7, 3)]);
    }

    #[test]
    fn test_blocking_cells_open_four_is_empty() {
        let board = black_row(7, &[4, 5, 6, 7]);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert!(blocking_cells(&threats).is_empty());
    }

    #[test]
    fn test_blocking_cells_double_four_is_empty() {
        // Two simple fours completing on different cells
        let mut board = setup_board(&[
            (7, 3, Stone::White),
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (2, 10, Stone::White),
            (3, 10, Stone::Black),
            (4, 10, Stone::Black),
            (5, 10, Stone::Black),
            (6, 10, Stone::Black),
        ]);
        board.place_stone(Pos::new(0, 0), Stone::White);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(threats.len(), 2);
        assert!(blocking_cells(&threats).is_empty());
        assert_eq!(
            completion_cells(&threats),
            vec![Pos::new(7, 8), Pos::new(7, 10)]
        );
    }

    #[test]
    fn test_blocking_cells_shared_completion() {
        // Two fours sharing one completion cell at (7, 7)
        let board = setup_board(&[
            (7, 2, Stone::White),
            (7, 3, Stone::Black),
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (2, 7, Stone::White),
            (3, 7, Stone::Black),
            (4, 7, Stone::Black),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (8, 7, Stone::White),
            (7, 8, Stone::White),
        ]);
        let threats = find_fours(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(threats.len(), 2);
        assert_eq!(blocking_cells(&threats), vec![Pos::new(7, 7)]);
        assert!(blocking_cells(&[]).is_empty());
    }

    #[test]
    fn test_five_moves() {
        let board = black_row(7, &[3, 4, 6, 7]);
        assert_eq!(
            five_moves(&board, Stone::Black, Rule::Freestyle),
            vec![Pos::new(7, 5)]
        );
        assert!(five_moves(&board, Stone::White, Rule::Freestyle).is_empty());
    }

    #[test]
    fn test_creates_four_horizontal() {
        // _ X X X _
        let board = black_row(7, &[5, 6, 7]);
        assert!(creates_four(&board, Pos::new(7, 4), Stone::Black, Rule::Freestyle));
        assert!(creates_four(&board, Pos::new(7, 8), Stone::Black, Rule::Freestyle));
        // Gap placement X X X _ X
        assert!(creates_four(&board, Pos::new(7, 9), Stone::Black, Rule::Freestyle));
        assert!(!creates_four(&board, Pos::new(8, 8), Stone::Black, Rule::Freestyle));
        // Occupied cell
        assert!(!creates_four(&board, Pos::new(7, 5), Stone::Black, Rule::Freestyle));
    }

    #[test]
    fn test_creates_four_blocked_both_sides() {
        // O X X X _ O : filling leaves no room for five
        let board = setup_board(&[
            (7, 3, Stone::White),
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 8, Stone::White),
        ]);
        assert!(!creates_four(&board, Pos::new(7, 7), Stone::Black, Rule::Freestyle));
    }

    #[test]
    fn test_four_moves_open_three() {
        // _ _ X X X _ _ on row 7: cols 2,3 and 7,8 (and none elsewhere)
        let board = black_row(7, &[4, 5, 6]);
        let moves = four_moves(&board, Stone::Black, Rule::Freestyle);
        assert_eq!(
            moves,
            vec![
                Pos::new(7, 2),
                Pos::new(7, 3),
                Pos::new(7, 7),
                Pos::new(7, 8)
            ]
        );
    }

    #[test]
    fn test_four_moves_excludes_five() {
        let board = black_row(7, &[4, 5, 6, 7]);
        let moves = four_moves(&board, Stone::Black, Rule::Freestyle);
        assert!(!moves.contains(&Pos::new(7, 3)));
        assert!(!moves.contains(&Pos::new(7, 8)));
    }

    #[test]
    fn test_four_moves_multiple_lines() {
        let board = setup_board(&[
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
            (9, 8, Stone::Black),
            (6, 5, Stone::Black),
            (7, 5, Stone::Black),
            (8, 5, Stone::Black),
        ]);
        let moves = four_moves(&board, Stone::Black, Rule::Freestyle);
        assert!(moves.contains(&Pos::new(9, 5)));
        assert!(moves.contains(&Pos::new(9, 9)));
        assert!(moves.contains(&Pos::new(5, 5)));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }
}
