//! Grid-tracing puzzle generation: snake and spiral templates transformed by
//! random rotation and mirroring, with ordinal anchors spread along the
//! solution path.

use rand::Rng;

use crate::path::{Anchor, Cell};

/// A solvable layout: the solution walk plus the path indices that host
/// anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipTemplate {
    pub id: String,
    pub size: usize,
    pub path: Vec<Cell>,
    pub anchor_steps: Vec<usize>,
}

/// A generated instance handed to the path engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipPuzzle {
    pub size: usize,
    pub anchors: Vec<Anchor>,
    /// The template's solution walk, kept for hint/debug surfaces.
    pub path: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnakeOrientation {
    Horizontal,
    Vertical,
}

fn snake_path(size: usize, orientation: SnakeOrientation) -> Vec<Cell> {
    let mut path = Vec::with_capacity(size * size);
    match orientation {
        SnakeOrientation::Horizontal => {
            for row in 0..size {
                if row % 2 == 0 {
                    for col in 0..size {
                        path.push(Cell::new(row, col));
                    }
                } else {
                    for col in (0..size).rev() {
                        path.push(Cell::new(row, col));
                    }
                }
            }
        }
        SnakeOrientation::Vertical => {
            for col in 0..size {
                if col % 2 == 0 {
                    for row in 0..size {
                        path.push(Cell::new(row, col));
                    }
                } else {
                    for row in (0..size).rev() {
                        path.push(Cell::new(row, col));
                    }
                }
            }
        }
    }
    path
}

fn spiral_path(size: usize, clockwise: bool) -> Vec<Cell> {
    let dirs: [(isize, isize); 4] = if clockwise {
        [(0, 1), (1, 0), (0, -1), (-1, 0)]
    } else {
        [(1, 0), (0, -1), (-1, 0), (0, 1)]
    };
    let mut visited = vec![vec![false; size]; size];
    let mut path = Vec::with_capacity(size * size);
    let mut row: isize = 0;
    let mut col: isize = if clockwise { 0 } else { size as isize - 1 };
    let mut dir = 0usize;

    for _ in 0..size * size {
        path.push(Cell::new(row as usize, col as usize));
        visited[row as usize][col as usize] = true;
        let mut next_row = row + dirs[dir].0;
        let mut next_col = col + dirs[dir].1;
        let out = |r: isize, c: isize| {
            r < 0 || c < 0 || r >= size as isize || c >= size as isize
        };
        if out(next_row, next_col) || visited[next_row as usize][next_col as usize] {
            dir = (dir + 1) % dirs.len();
            next_row = row + dirs[dir].0;
            next_col = col + dirs[dir].1;
        }
        row = next_row;
        col = next_col;
    }
    path
}

/// Spread `anchors` step indices evenly along a path of `length` cells,
/// always including the final cell.
fn anchor_steps(length: usize, anchors: usize) -> Vec<usize> {
    let gap = ((length - 1) / anchors.saturating_sub(1).max(1)).max(1);
    let mut steps: Vec<usize> = (0..anchors).map(|i| (i * gap).min(length - 1)).collect();
    if !steps.contains(&(length - 1)) {
        steps.push(length - 1);
    }
    steps.sort_unstable();
    steps.dedup();
    steps
}

fn template(id: &str, size: usize, path: Vec<Cell>, anchor_count: usize) -> ZipTemplate {
    let steps = anchor_steps(path.len(), anchor_count);
    ZipTemplate {
        id: id.to_string(),
        size,
        path,
        anchor_steps: steps,
    }
}

/// The six template families for one grid size.
#[must_use]
pub fn templates_for(size: usize) -> Vec<ZipTemplate> {
    let horizontal = snake_path(size, SnakeOrientation::Horizontal);
    let vertical = snake_path(size, SnakeOrientation::Vertical);
    let spiral_cw = spiral_path(size, true);
    let spiral_ccw = spiral_path(size, false);
    let reverse_snake: Vec<Cell> = horizontal.iter().rev().copied().collect();
    let reverse_spiral: Vec<Cell> = spiral_cw.iter().rev().copied().collect();
    let base = size.max(7);
    vec![
        template(&format!("snake-h-{size}"), size, horizontal, (base - 1).max(5)),
        template(&format!("snake-v-{size}"), size, vertical, base.max(5)),
        template(&format!("snake-h-rev-{size}"), size, reverse_snake, base.max(5)),
        template(&format!("spiral-cw-{size}"), size, spiral_cw, base.max(5)),
        template(&format!("spiral-ccw-{size}"), size, spiral_ccw, base.max(5)),
        template(&format!("spiral-out-{size}"), size, reverse_spiral, base.max(5)),
    ]
}

fn rotate(cell: Cell, size: usize, rotation: u8) -> Cell {
    match rotation % 4 {
        1 => Cell::new(cell.col, size - 1 - cell.row),
        2 => Cell::new(size - 1 - cell.row, size - 1 - cell.col),
        3 => Cell::new(size - 1 - cell.col, cell.row),
        _ => cell,
    }
}

fn mirror(cell: Cell, size: usize, mirrored: bool) -> Cell {
    if mirrored {
        Cell::new(cell.row, size - 1 - cell.col)
    } else {
        cell
    }
}

fn transform(cell: Cell, size: usize, rotation: u8, mirrored: bool) -> Cell {
    mirror(rotate(cell, size, rotation), size, mirrored)
}

/// Generate a daily instance: a 5×5 template under a random rotation and
/// optional mirror, anchors rebuilt with ordinals 1..K.
pub fn generate_zip_puzzle(rng: &mut impl Rng) -> ZipPuzzle {
    let pool = templates_for(5);
    let chosen = &pool[rng.gen_range(0..pool.len())];
    let rotation = rng.gen_range(0..4u8);
    let mirrored = rng.gen_bool(0.5);
    let path: Vec<Cell> = chosen
        .path
        .iter()
        .map(|cell| transform(*cell, chosen.size, rotation, mirrored))
        .collect();
    let anchors = chosen
        .anchor_steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let cell = path[(*step).min(path.len() - 1)];
            Anchor {
                row: cell.row,
                col: cell.col,
                value: index as u32 + 1,
            }
        })
        .collect();
    ZipPuzzle {
        size: chosen.size,
        anchors,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn assert_full_walk(path: &[Cell], size: usize) {
        assert_eq!(path.len(), size * size);
        let distinct: HashSet<Cell> = path.iter().copied().collect();
        assert_eq!(distinct.len(), size * size);
        for pair in path.windows(2) {
            let step = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            assert_eq!(step, 1, "walk must be 4-connected: {pair:?}");
        }
    }

    #[test]
    fn all_templates_are_hamiltonian_walks() {
        for size in 4..=6 {
            for template in templates_for(size) {
                assert_full_walk(&template.path, size);
                assert!(template.anchor_steps.first() == Some(&0));
                assert!(template.anchor_steps.last() == Some(&(size * size - 1)));
            }
        }
    }

    #[test]
    fn generated_puzzle_survives_transforms() {
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        for _ in 0..40 {
            let puzzle = generate_zip_puzzle(&mut rng);
            assert_full_walk(&puzzle.path, puzzle.size);
            // Ordinals must be 1..K over distinct cells, aligned with the path.
            let cells: HashSet<(usize, usize)> =
                puzzle.anchors.iter().map(|a| (a.row, a.col)).collect();
            assert_eq!(cells.len(), puzzle.anchors.len());
            for (index, anchor) in puzzle.anchors.iter().enumerate() {
                assert_eq!(anchor.value, index as u32 + 1);
            }
            assert_eq!(puzzle.anchors[0].cell(), puzzle.path[0]);
            assert_eq!(
                puzzle.anchors.last().map(|a| a.cell()),
                puzzle.path.last().copied()
            );
        }
    }

    #[test]
    fn solving_along_the_template_wins() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let puzzle = generate_zip_puzzle(&mut rng);
        let mut engine = crate::path::PathEngine::new(puzzle.size, &puzzle.anchors);
        for cell in &puzzle.path {
            assert_ne!(
                engine.visit(*cell),
                crate::path::VisitOutcome::Rejected(*cell),
                "solution walk must never be rejected"
            );
        }
        assert_eq!(engine.status(), crate::path::PathStatus::Won);
    }
}
