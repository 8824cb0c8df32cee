use crate::puzzle::error::ParseGridError;
use crate::puzzle::{geometry, Value, CELL_COUNT};

/// Parses the 81-character row-major encoding: digits `1`-`9` are values,
/// any other character is an empty cell.
pub(crate) fn parse_cells(text: &str) -> Result<[Option<Value>; CELL_COUNT], ParseGridError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != CELL_COUNT {
        return Err(ParseGridError::BadLength(chars.len()));
    }
    let mut cells = [None; CELL_COUNT];
    for (cell, c) in cells.iter_mut().zip(&chars) {
        *cell = c
            .to_digit(10)
            .filter(|&digit| digit != 0)
            .map(|digit| digit as Value);
    }
    check_groups(&cells)?;
    Ok(cells)
}

/// Rejects any value repeated within a row, column, or box
fn check_groups(cells: &[Option<Value>; CELL_COUNT]) -> Result<(), ParseGridError> {
    for (index, &cell) in cells.iter().enumerate() {
        let value = match cell {
            Some(value) => value,
            None => continue,
        };
        for &group in &geometry::cell_groups(index) {
            for &other in &geometry::GROUPS[group] {
                if other != index && cells[other] == Some(value) {
                    return Err(ParseGridError::Conflict { index, value });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::puzzle::parse::parse_cells;
    use crate::puzzle::ParseGridError;

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            Err(ParseGridError::BadLength(80)),
            parse_cells(&".".repeat(80))
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Err(ParseGridError::Conflict { index: 0, value: 1 }),
            parse_cells(&"1".repeat(81))
        );
    }

    #[test]
    fn normalizes_fillers() {
        // '0', letters, and spaces all mean an empty cell
        let mut text = String::from("10x 5");
        text.push_str(&".".repeat(76));
        let cells = parse_cells(&text).unwrap();
        assert_eq!(Some(1), cells[0]);
        assert_eq!(None, cells[1]);
        assert_eq!(None, cells[2]);
        assert_eq!(None, cells[3]);
        assert_eq!(Some(5), cells[4]);
    }
}
