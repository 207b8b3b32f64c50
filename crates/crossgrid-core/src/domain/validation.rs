use crate::domain::{
    entities::{Cell, Grid},
    value_objects::{Orientation, Position},
};

/// Placement legality rules.
///
/// All checks are pure reads of the grid; nothing here mutates state.
pub struct PlacementValidator;

impl PlacementValidator {
    /// Decide whether `word` may occupy the cells starting at `origin`.
    ///
    /// Checks, in order:
    /// 1. the whole word fits inside the grid;
    /// 2. the cells just before and just after the word are vacant, so it
    ///    cannot merge with a neighbouring run;
    /// 3. every occupied target cell already holds the matching letter and
    ///    belongs only to a word on the other axis, so shared cells are
    ///    true crossings and never a collinear overlap;
    /// 4. every empty target cell has vacant neighbours on the
    ///    perpendicular axis, so the word never lies flush against another.
    pub fn can_place(grid: &Grid, word: &str, origin: Position, orientation: Orientation) -> bool {
        let len = word.chars().count();
        if len == 0 || !grid.contains(origin) {
            return false;
        }

        // 1. Bounds
        if !grid.contains(origin.advance(orientation, len - 1)) {
            return false;
        }

        // 2. End-of-word isolation
        if origin
            .retreat(orientation)
            .is_some_and(|before| !grid.is_vacant(before))
        {
            return false;
        }
        if !grid.is_vacant(origin.advance(orientation, len)) {
            return false;
        }

        let across = orientation.perpendicular();
        for (offset, ch) in word.chars().enumerate() {
            let pos = origin.advance(orientation, offset);
            match grid.get(pos) {
                // 3. Per-cell compatibility
                Some(Cell::Letter(existing)) if existing != ch => return false,
                Some(Cell::Letter(_)) if grid.is_covered(pos, orientation) => return false,
                Some(Cell::Letter(_)) => {}
                // 4. Perpendicular isolation
                Some(Cell::Empty) => {
                    let side_a = pos.retreat(across).is_some_and(|p| !grid.is_vacant(p));
                    let side_b = !grid.is_vacant(pos.advance(across, 1));
                    if side_a || side_b {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }

    /// `true` when at least one target cell already holds the word's letter.
    pub fn intersects(grid: &Grid, word: &str, origin: Position, orientation: Orientation) -> bool {
        word.chars().enumerate().any(|(offset, ch)| {
            grid.get(origin.advance(orientation, offset)) == Some(Cell::Letter(ch))
        })
    }

    /// Legal and crossing an existing word.
    pub fn accepts_crossing(
        grid: &Grid,
        word: &str,
        origin: Position,
        orientation: Orientation,
    ) -> bool {
        Self::can_place(grid, word, origin, orientation)
            && Self::intersects(grid, word, origin, orientation)
    }
}
