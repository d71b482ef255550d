//! Cell encodings
//!
//! Two formats cross the crate boundary:
//! - bytes: one cell per stone, column-major (`col * 15 + row`, so byte 1 is
//!   `A2`), as used by [`solve_vcf`](crate::solve_vcf)
//! - text: comma separated points such as `H8,I9,J10`, and boards written as
//!   `blacks/whites`
//!
//! The byte order is independent of the row-major index [`Pos::to_index`]
//! used by bitboards and candidate scans.

use crate::board::{Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{Error, Result};
use crate::search::{Outcome, ProofPath};

/// Boundary byte of one cell
#[inline]
pub fn cell_byte(pos: Pos) -> u8 {
    pos.col * BOARD_SIZE as u8 + pos.row
}

/// Cell of one boundary byte
pub fn cell_from_byte(byte: u8) -> Result<Pos> {
    let idx = byte as usize;
    if idx >= TOTAL_CELLS {
        return Err(Error::CellOutOfRange(idx));
    }
    Ok(Pos::new((idx % BOARD_SIZE) as u8, (idx / BOARD_SIZE) as u8))
}

/// Proof path as cell bytes in play order
pub fn encode_path(path: &ProofPath) -> Vec<u8> {
    path.moves().iter().map(|m| cell_byte(m.pos)).collect()
}

/// Proven outcomes become their path; exhausted ones become `None`
pub fn encode_outcome(outcome: &Outcome) -> Option<Vec<u8>> {
    outcome.path().map(encode_path)
}

/// Decode cell bytes, rejecting anything off the board
pub fn decode_cells(bytes: &[u8]) -> Result<Vec<Pos>> {
    bytes.iter().map(|&b| cell_from_byte(b)).collect()
}

pub fn encode_cells(cells: &[Pos]) -> Vec<u8> {
    cells.iter().map(|&p| cell_byte(p)).collect()
}

pub fn format_points(points: &[Pos]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse `H8,I9,J10`. Blank input is an empty list.
pub fn parse_points(s: &str) -> Result<Vec<Pos>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|p| p.parse::<Pos>()).collect()
}

/// Parse `blacks/whites`, e.g. `H8,J10/I9`. Either side may be empty.
pub fn parse_board(s: &str) -> Result<(Vec<Pos>, Vec<Pos>)> {
    let Some((blacks, whites)) = s.trim().split_once('/') else {
        return Err(Error::InvalidNotation(s.to_string()));
    };
    if whites.contains('/') {
        return Err(Error::InvalidNotation(s.to_string()));
    }
    Ok((parse_points(blacks)?, parse_points(whites)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_encode_path_drops_colors() {
        let path = ProofPath::five(Pos::new(0, 4), Stone::Black).unshift(
            Pos::new(0, 3),
            Pos::new(1, 3),
            Stone::Black,
        );
        assert_eq!(encode_path(&path), vec![45, 46, 60]);
        assert_eq!(encode_outcome(&Outcome::Proven(path)), Some(vec![45, 46, 60]));
        assert_eq!(encode_outcome(&Outcome::Exhausted), None);
    }

    #[test]
    fn test_decode_cells() {
        let cells = decode_cells(&[0, 112, 224]).unwrap();
        assert_eq!(cells, vec![Pos::new(0, 0), Pos::new(7, 7), Pos::new(14, 14)]);
        assert_eq!(encode_cells(&cells), vec![0, 112, 224]);

        let err = decode_cells(&[10, 225]).unwrap_err();
        assert!(matches!(err, Error::CellOutOfRange(225)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_cell_bytes_are_column_major() {
        let a2 = cell_from_byte(1).unwrap();
        assert_eq!(a2, Pos::new(1, 0));
        assert_eq!(a2.to_string(), "A2");
        assert_eq!(cell_from_byte(15).unwrap().to_string(), "B1");
        assert_eq!(cell_byte("H9".parse().unwrap()), 7 * 15 + 8);
        assert_eq!(encode_cells(&parse_points("A2,B1,O15").unwrap()), vec![1, 15, 224]);
    }

    #[test]
    fn test_points_text() {
        let points = parse_points("H8, i9,J10").unwrap();
        assert_eq!(points, vec![Pos::new(7, 7), Pos::new(8, 8), Pos::new(9, 9)]);
        assert_eq!(format_points(&points), "H8,I9,J10");
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_points("H8,,I9").is_err());
        assert!(parse_points("P1").is_err());
        assert!(parse_points("A16").is_err());
    }

    #[test]
    fn test_parse_board() {
        let (blacks, whites) = parse_board("H8,J10/I9").unwrap();
        assert_eq!(blacks, vec![Pos::new(7, 7), Pos::new(9, 9)]);
        assert_eq!(whites, vec![Pos::new(8, 8)]);

        let (blacks, whites) = parse_board("/A1").unwrap();
        assert!(blacks.is_empty());
        assert_eq!(whites, vec![Pos::new(0, 0)]);

        assert!(parse_board("H8,I9").is_err());
        assert!(parse_board("H8/I9/J10").is_err());
    }
}
