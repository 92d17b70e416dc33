//! Binary raster to symbol lines.

use super::pool::SymbolPool;
use super::rng::{SymbolRng, UniformSource};
use crate::error::{PoolKind, PreconditionError};
use crate::raster::Raster;

/// Binary value marking a light pixel.
const LIGHT: u8 = 255;

/// Scan order of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One output row per raster row, read left to right.
    #[default]
    Upright,
    /// One output row per raster column, each read bottom to top.
    ///
    /// Rotates the output by 90 degrees without copying the raster.
    Turned,
}

impl Orientation {
    /// Output `(rows, columns)` for a `width` x `height` raster.
    pub fn grid(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Upright => (height, width),
            Orientation::Turned => (width, height),
        }
    }

    /// Raster coordinate `(x, y)` sampled for output cell `(row, col)`.
    #[inline]
    pub fn source_coords(&self, row: u32, col: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Upright => (col, row),
            Orientation::Turned => (row, height - 1 - col),
        }
    }

    pub fn is_turned(&self) -> bool {
        matches!(self, Orientation::Turned)
    }
}

impl From<bool> for Orientation {
    fn from(turn: bool) -> Self {
        if turn {
            Orientation::Turned
        } else {
            Orientation::Upright
        }
    }
}

/// Result of a render that may be stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All rows were produced, in scan order.
    Complete(Vec<String>),
    /// The stop predicate fired; partial rows are dropped.
    Stopped,
}

fn check_pools(light: &SymbolPool, dark: &SymbolPool) -> Result<(), PreconditionError> {
    if light.is_empty() {
        return Err(PreconditionError::EmptySymbolPool(PoolKind::Light));
    }
    if dark.is_empty() {
        return Err(PreconditionError::EmptySymbolPool(PoolKind::Dark));
    }
    Ok(())
}

/// Render a binary raster as lines of symbols.
///
/// Light pixels (gray 255) draw from `light`, everything else from `dark`.
/// Symbols are picked with a freshly seeded generator, so two renders of the
/// same raster differ.
///
/// # Errors
/// `PreconditionError::EmptySymbolPool` when either pool is empty.
pub fn render(
    binary: &Raster,
    light: &SymbolPool,
    dark: &SymbolPool,
    orientation: Orientation,
) -> Result<Vec<String>, PreconditionError> {
    let mut rng = SymbolRng::from_entropy();
    match render_with(binary, light, dark, orientation, &mut rng, || false)? {
        RenderOutcome::Complete(lines) => Ok(lines),
        RenderOutcome::Stopped => unreachable!("stop predicate never fires"),
    }
}

/// Render with an explicit random source and a stop predicate.
///
/// `should_stop` is polled before each output row.
///
/// # Errors
/// `PreconditionError::EmptySymbolPool` when either pool is empty. Checked
/// before any row is produced.
pub fn render_with<R, F>(
    binary: &Raster,
    light: &SymbolPool,
    dark: &SymbolPool,
    orientation: Orientation,
    rng: &mut R,
    should_stop: F,
) -> Result<RenderOutcome, PreconditionError>
where
    R: UniformSource + ?Sized,
    F: Fn() -> bool,
{
    check_pools(light, dark)?;

    let (width, height) = binary.size();
    let (rows, cols) = orientation.grid(width, height);
    let light = light.as_slice();
    let dark = dark.as_slice();

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        if should_stop() {
            log::debug!("Render stopped at row {}/{}", row, rows);
            return Ok(RenderOutcome::Stopped);
        }

        let mut line = String::new();
        for col in 0..cols {
            let (x, y) = orientation.source_coords(row, col, height);
            let pool = if binary.get_gray(x, y) == LIGHT {
                light
            } else {
                dark
            };
            line.push_str(&pool[rng.next_index(pool.len())]);
        }
        lines.push(line);
    }

    Ok(RenderOutcome::Complete(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use unicode_segmentation::UnicodeSegmentation;

    fn binary_from_rows(rows: &[&[u8]]) -> Raster {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        let mut raster = Raster::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                raster.set_gray(x as u32, y as u32, v);
            }
        }
        raster
    }

    fn squares() -> (SymbolPool, SymbolPool) {
        (SymbolPool::from_text("□"), SymbolPool::from_text("■"))
    }

    #[test]
    fn test_orientation_from_flag() {
        assert_eq!(Orientation::from(false), Orientation::Upright);
        assert_eq!(Orientation::from(true), Orientation::Turned);
    }

    #[test]
    fn test_turned_coords_walk_column_in_reverse() {
        // 2x3 raster: row 0 of the turned output reads (0,2), (0,1), (0,0)
        let o = Orientation::Turned;
        assert_eq!(o.source_coords(0, 0, 3), (0, 2));
        assert_eq!(o.source_coords(0, 1, 3), (0, 1));
        assert_eq!(o.source_coords(0, 2, 3), (0, 0));
        assert_eq!(o.source_coords(1, 0, 3), (1, 2));
    }

    #[test]
    fn test_render_upright_two_by_one() {
        let binary = binary_from_rows(&[&[0, 255]]);
        let (light, dark) = squares();
        let lines = render(&binary, &light, &dark, Orientation::Upright).unwrap();
        assert_eq!(lines, vec!["■□".to_string()]);
    }

    #[test]
    fn test_render_turned_two_by_one() {
        let binary = binary_from_rows(&[&[0, 255]]);
        let (light, dark) = squares();
        let lines = render(&binary, &light, &dark, Orientation::Turned).unwrap();
        assert_eq!(lines, vec!["■".to_string(), "□".to_string()]);
    }

    #[test]
    fn test_render_turned_rotates_clockwise() {
        // a b
        // c d   -> turned rows: "c a", "d b"
        let binary = binary_from_rows(&[&[255, 0], &[0, 0]]);
        let (light, dark) = squares();
        let lines = render(&binary, &light, &dark, Orientation::Turned).unwrap();
        assert_eq!(lines, vec!["■□".to_string(), "■■".to_string()]);
    }

    #[test]
    fn test_render_rejects_empty_light_pool() {
        let binary = binary_from_rows(&[&[0]]);
        let result = render(
            &binary,
            &SymbolPool::default(),
            &SymbolPool::from_text("■"),
            Orientation::Upright,
        );
        assert_eq!(
            result,
            Err(PreconditionError::EmptySymbolPool(PoolKind::Light))
        );
    }

    #[test]
    fn test_render_rejects_empty_dark_pool() {
        let binary = binary_from_rows(&[&[0]]);
        let result = render(
            &binary,
            &SymbolPool::from_text("□"),
            &SymbolPool::default(),
            Orientation::Upright,
        );
        assert_eq!(result, Err(PreconditionError::EmptySymbolPool(PoolKind::Dark)));
    }

    #[test]
    fn test_render_empty_pool_rejected_even_for_empty_raster() {
        let binary = Raster::new(0, 0);
        let result = render(
            &binary,
            &SymbolPool::default(),
            &SymbolPool::default(),
            Orientation::Upright,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_render_row_and_symbol_counts() {
        let binary = Raster::new(5, 3);
        let light = SymbolPool::from_text("🍀😀");
        let dark = SymbolPool::from_text("🐳🐬🐋🐟");

        let upright = render(&binary, &light, &dark, Orientation::Upright).unwrap();
        assert_eq!(upright.len(), 3);
        for line in &upright {
            assert_eq!(line.graphemes(true).count(), 5);
        }

        let turned = render(&binary, &light, &dark, Orientation::Turned).unwrap();
        assert_eq!(turned.len(), 5);
        for line in &turned {
            assert_eq!(line.graphemes(true).count(), 3);
        }
    }

    #[test]
    fn test_render_symbols_come_from_matching_pool() {
        let binary = binary_from_rows(&[&[255, 0, 255, 0]]);
        let light = SymbolPool::from_text("🍀😀");
        let dark = SymbolPool::from_text("🐳🐬🐋🐟");
        let mut rng = SymbolRng::from_seed(99);
        let outcome =
            render_with(&binary, &light, &dark, Orientation::Upright, &mut rng, || false).unwrap();
        let RenderOutcome::Complete(lines) = outcome else {
            panic!("expected complete render");
        };
        let cells: Vec<&str> = lines[0].graphemes(true).collect();
        assert!(light.iter().any(|s| s == cells[0]));
        assert!(dark.iter().any(|s| s == cells[1]));
        assert!(light.iter().any(|s| s == cells[2]));
        assert!(dark.iter().any(|s| s == cells[3]));
    }

    #[test]
    fn test_render_stops_when_asked() {
        let binary = Raster::new(4, 4);
        let (light, dark) = squares();
        let polls = Cell::new(0);
        let mut rng = SymbolRng::from_seed(1);
        let outcome = render_with(
            &binary,
            &light,
            &dark,
            Orientation::Upright,
            &mut rng,
            || {
                polls.set(polls.get() + 1);
                polls.get() > 2
            },
        )
        .unwrap();
        assert_eq!(outcome, RenderOutcome::Stopped);
        assert_eq!(polls.get(), 3);
    }

    #[test]
    fn test_render_zero_width_raster() {
        let binary = Raster::new(0, 2);
        let (light, dark) = squares();
        let upright = render(&binary, &light, &dark, Orientation::Upright).unwrap();
        assert_eq!(upright, vec![String::new(), String::new()]);
        let turned = render(&binary, &light, &dark, Orientation::Turned).unwrap();
        assert!(turned.is_empty());
    }
}
