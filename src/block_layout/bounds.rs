//! Block bounds
//!
//! Derives the block width, the width including attached children and the
//! shared statement edge from the spaced rows.

use super::constants::ConstantProvider;
use super::error::{LayoutError, Result};
use super::rows::Row;

/// Horizontal extents of a block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub width_with_children: f32,
    pub statement_edge: f32,
}

/// Inner width of a statement row: the right edge of whatever precedes
/// the statement socket, excluding the spacer that leads into it
fn statement_inner_width(index: usize, row: &Row) -> Result<f32> {
    let socket = row
        .elements
        .iter()
        .rposition(|elem| elem.is_statement_input())
        .ok_or(LayoutError::MissingStatementSocket { row: index })?;

    let lead_in = socket
        .checked_sub(1)
        .map(|before| &row.elements[before])
        .filter(|elem| elem.is_spacer())
        .map_or(0.0, |elem| elem.width);

    Ok(row.width - row.elements[socket].width - lead_in)
}

/// Measure every row, then compute the block's bounds and record the
/// statement edge on each statement row
pub fn compute_bounds(rows: &mut [Row], constants: &ConstantProvider) -> Result<Bounds> {
    let mut block_width: f32 = 0.0;
    let mut widest_statement: f32 = 0.0;
    let mut widest_connected: f32 = 0.0;
    let mut has_statement = false;

    for (index, row) in rows.iter_mut().enumerate() {
        row.measure();
        if row.has_statement {
            has_statement = true;
            widest_statement = widest_statement.max(statement_inner_width(index, row)?);
        } else {
            block_width = block_width.max(row.width);
        }
        widest_connected = widest_connected.max(row.width_with_connected_blocks);
    }

    let statement_edge = widest_statement;
    let width = if has_statement {
        block_width.max(statement_edge + constants.notch_width * 2.0)
    } else {
        block_width
    };

    for row in rows.iter_mut().filter(|row| row.has_statement) {
        row.statement_edge = statement_edge;
    }

    Ok(Bounds {
        width,
        width_with_children: block_width.max(widest_connected),
        statement_edge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_layout::measurables::Measurable;
    use crate::models::{Field, Input};

    fn statement_row(fields: &[f32], child: Option<f32>) -> Row {
        let constants = ConstantProvider::default();
        let mut row = Row::content();
        row.has_statement = true;
        row.elements.push(Measurable::spacer(10.0));
        for width in fields {
            row.elements
                .push(Measurable::field(0, 0, &Field::label(*width, 10.0)).unwrap());
            row.elements.push(Measurable::spacer(10.0));
        }
        let mut input = Input::statement();
        if let Some(width) = child {
            input = input.with_child(width, 30.0);
        }
        row.elements
            .push(Measurable::statement_input(0, &input, &constants).unwrap());
        row
    }

    #[test]
    fn test_statement_edge_is_right_edge_of_fields() {
        let constants = ConstantProvider::default();
        let mut rows = vec![statement_row(&[40.0], None)];
        let bounds = compute_bounds(&mut rows, &constants).unwrap();
        // leading spacer + field
        assert_eq!(bounds.statement_edge, 50.0);
        assert_eq!(bounds.width, 80.0);
        assert_eq!(rows[0].statement_edge, 50.0);
    }

    #[test]
    fn test_block_width_ignores_statement_rows() {
        let constants = ConstantProvider::default();
        let mut wide = Row::content();
        wide.elements.push(Measurable::spacer(100.0));
        let mut rows = vec![wide, statement_row(&[], None)];
        let bounds = compute_bounds(&mut rows, &constants).unwrap();
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.statement_edge, 0.0);
    }

    #[test]
    fn test_width_with_children_uses_connected_block() {
        let constants = ConstantProvider::default();
        let mut rows = vec![statement_row(&[], Some(120.0))];
        let bounds = compute_bounds(&mut rows, &constants).unwrap();
        // leading spacer (10) + child (120)
        assert_eq!(bounds.width_with_children, 130.0);
        assert_eq!(bounds.width, 30.0);
    }

    #[test]
    fn test_statement_row_without_socket_is_an_error() {
        let constants = ConstantProvider::default();
        let mut broken = Row::content();
        broken.has_statement = true;
        broken.elements.push(Measurable::spacer(10.0));
        let mut rows = vec![Row::header(), broken];
        assert_eq!(
            compute_bounds(&mut rows, &constants).unwrap_err(),
            LayoutError::MissingStatementSocket { row: 1 }
        );
    }
}
