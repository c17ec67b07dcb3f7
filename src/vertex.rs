//! GTP vertex text such as `D4` or `pass`.
//!
//! Go coordinates use letters A-Z (skipping I) for columns and numbers for
//! rows, counted from the bottom edge. Board row 0 is the top line, so on a
//! 9x9 board `A9` is `(0, 0)` and `A1` is `(8, 0)`.

use crate::board::Point;
use crate::constants::COLUMN_LETTERS;
use crate::error::VertexError;
use crate::state::Move;

/// Parse a vertex for a board of the given size.
///
/// `pass` (any case) yields [`Move::Pass`].
pub fn parse_vertex(s: &str, size: usize) -> Result<Move, VertexError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }

    let malformed = || VertexError::Malformed(s.to_string());
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return Err(malformed());
    }

    let col_char = bytes[0].to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&c| c == col_char)
        .ok_or_else(malformed)?;
    let digits = &s[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let number: usize = digits.parse().map_err(|_| malformed())?;

    if col >= size || number == 0 || number > size {
        return Err(VertexError::OffBoard {
            vertex: s.to_string(),
            size,
        });
    }
    Ok(Move::Place {
        row: size - number,
        col,
    })
}

/// Format a point as a vertex for a board of the given size.
///
/// Fails if the point is not on the board or the board is wider than the
/// vertex columns allow.
pub fn vertex_string((row, col): Point, size: usize) -> Result<String, VertexError> {
    if row >= size || col >= size || col >= COLUMN_LETTERS.len() {
        return Err(VertexError::PointOffBoard { row, col, size });
    }
    let c = COLUMN_LETTERS[col] as char;
    Ok(format!("{c}{}", size - row))
}

/// Format a move, using `pass` for passes.
pub fn move_string(mv: Move, size: usize) -> Result<String, VertexError> {
    match mv {
        Move::Place { row, col } => vertex_string((row, col), size),
        Move::Pass => Ok("pass".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_vertex("A9", 9), Ok(Move::Place { row: 0, col: 0 }));
        assert_eq!(parse_vertex("a1", 9), Ok(Move::Place { row: 8, col: 0 }));
        assert_eq!(parse_vertex("J1", 9), Ok(Move::Place { row: 8, col: 8 }));
        assert_eq!(parse_vertex("T19", 19), Ok(Move::Place { row: 0, col: 18 }));
    }

    #[test]
    fn test_parse_skips_i() {
        assert_eq!(parse_vertex("H5", 9), Ok(Move::Place { row: 4, col: 7 }));
        assert_eq!(parse_vertex("J5", 9), Ok(Move::Place { row: 4, col: 8 }));
        assert!(matches!(parse_vertex("I5", 9), Err(VertexError::Malformed(_))));
    }

    #[test]
    fn test_parse_pass() {
        assert_eq!(parse_vertex("pass", 9), Ok(Move::Pass));
        assert_eq!(parse_vertex("PASS", 19), Ok(Move::Pass));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_vertex("", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("Dx", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("K1", 9), Err(VertexError::OffBoard { .. })));
        assert!(matches!(parse_vertex("A10", 9), Err(VertexError::OffBoard { .. })));
        assert!(matches!(parse_vertex("A0", 9), Err(VertexError::OffBoard { .. })));
    }

    #[test]
    fn test_parse_rejects_signs_and_junk_in_row() {
        for s in ["A+5", "A-5", "A 5", "A5x", "A٥"] {
            assert!(
                matches!(parse_vertex(s, 9), Err(VertexError::Malformed(_))),
                "{s:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_vertex_string() {
        assert_eq!(vertex_string((0, 0), 9).unwrap(), "A9");
        assert_eq!(vertex_string((4, 8), 9).unwrap(), "J5");
        assert_eq!(move_string(Move::Pass, 9).unwrap(), "pass");
        for row in 0..9 {
            for col in 0..9 {
                let s = vertex_string((row, col), 9).unwrap();
                assert_eq!(parse_vertex(&s, 9), Ok(Move::Place { row, col }));
            }
        }
    }

    #[test]
    fn test_vertex_string_off_board() {
        for pt in [(9, 0), (0, 9), (10, 3), (0, 25), (usize::MAX, 0)] {
            assert_eq!(
                vertex_string(pt, 9),
                Err(VertexError::PointOffBoard {
                    row: pt.0,
                    col: pt.1,
                    size: 9
                })
            );
        }
        assert!(vertex_string((0, 25), 30).is_err());
        assert!(move_string(Move::Place { row: 9, col: 0 }, 9).is_err());
    }
}
