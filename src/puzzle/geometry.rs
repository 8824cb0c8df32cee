//! Index arithmetic between cells and their row, column, and box groups

use once_cell::sync::Lazy;

use crate::puzzle::{CellId, CELL_COUNT, WIDTH};

const GROUP_COUNT: usize = WIDTH * 3;

/// Every group of cells that must hold distinct values:
/// rows 0..9, columns 9..18, boxes 18..27
pub(crate) static GROUPS: Lazy<[[CellId; WIDTH]; GROUP_COUNT]> = Lazy::new(|| {
    let mut groups = [[0; WIDTH]; GROUP_COUNT];
    for i in 0..WIDTH {
        for j in 0..WIDTH {
            groups[i][j] = i * WIDTH + j;
            groups[WIDTH + i][j] = j * WIDTH + i;
        }
        // a cell on the box's top row, leftmost column
        let origin = (i % 3) * 3 * WIDTH + (i / 3) * 3;
        groups[2 * WIDTH + i] = box_cells(origin);
    }
    groups
});

/// The three groups containing `index`
pub(crate) fn cell_groups(index: CellId) -> [usize; 3] {
    assert!(index < CELL_COUNT);
    [
        index / WIDTH,
        WIDTH + index % WIDTH,
        2 * WIDTH + box_id(index),
    ]
}

/// Identifies the 3×3 box containing `index`
pub(crate) fn box_id(index: CellId) -> usize {
    let row = index / WIDTH;
    let col = index % WIDTH;
    (col / 3) * 3 + row / 3
}

/// The cells of the 3×3 box containing `index`, in row-major order
pub(crate) fn box_cells(index: CellId) -> [CellId; WIDTH] {
    let row = index / WIDTH / 3 * 3;
    let col = index % WIDTH / 3 * 3;
    let mut cells = [0; WIDTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = (row + i / 3) * WIDTH + col + i % 3;
    }
    cells
}

#[cfg(test)]
mod tests {
    use crate::puzzle::geometry::{box_cells, box_id, cell_groups, GROUPS};
    use crate::puzzle::CELL_COUNT;

    #[test]
    fn box_ids() {
        assert_eq!(0, box_id(0));
        // boxes advance down a column of boxes first
        assert_eq!(1, box_id(27));
        assert_eq!(3, box_id(3));
        assert_eq!(8, box_id(80));
    }

    #[test]
    fn box_cells_of_center() {
        assert_eq!([30, 31, 32, 39, 40, 41, 48, 49, 50], box_cells(40));
    }

    #[test]
    fn every_cell_in_three_groups() {
        for index in 0..CELL_COUNT {
            let count = GROUPS
                .iter()
                .filter(|group| group.contains(&index))
                .count();
            assert_eq!(3, count);
        }
    }

    #[test]
    fn cell_groups_contain_cell() {
        for index in 0..CELL_COUNT {
            for &group in &cell_groups(index) {
                assert!(GROUPS[group].contains(&index));
            }
        }
    }
}
