use crate::state::error::StateError;
use crate::state::snapshot::AppState;

/// Structural shape check run before a candidate is committed.
///
/// Checks:
/// - The board has at least one row
/// - Every row has the same, non-zero width
/// - The palette is not empty
/// - The brush is one of the palette colors
pub fn validate(candidate: &AppState) -> Result<(), StateError> {
    let rows = candidate.board.rows();
    let Some(first) = rows.first() else {
        return Err(StateError::invalid("board has no rows"));
    };

    let width = first.len();
    if width == 0 {
        return Err(StateError::invalid("board rows have no cells"));
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(StateError::invalid(format!(
            "row {} has {} cells, expected {}",
            index,
            row.len(),
            width
        )));
    }

    if candidate.colors.is_empty() {
        return Err(StateError::invalid("palette is empty"));
    }
    if !candidate.colors.contains(candidate.brush) {
        return Err(StateError::invalid(format!(
            "brush '{}' is not in the palette",
            candidate.brush
        )));
    }

    Ok(())
}

pub fn is_valid(candidate: &AppState) -> bool {
    validate(candidate).is_ok()
}
