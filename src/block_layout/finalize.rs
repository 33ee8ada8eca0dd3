//! Final positioning
//!
//! One top-to-bottom walk that assigns row y positions, element x
//! positions and centerlines, and pads the footer up to the minimum block
//! height. Returns the total height.

use super::constants::ConstantProvider;
use super::measurables::Measurable;
use super::rows::Row;

/// Absolute vertical center of `elem` within `row`
pub fn elem_centerline(row: &Row, elem: &Measurable, constants: &ConstantProvider) -> f32 {
    let mut result = row.y_pos;
    if elem.is_field() {
        result += elem.height / 2.0;
        if row.has_inline_input || row.has_statement {
            result += constants.tall_input_field_offset_y;
        }
    } else if elem.is_inline_input() {
        result += elem.height / 2.0;
    } else if elem.is_next_connection() {
        result += row.height + elem.height / 2.0;
    } else {
        result += row.height / 2.0;
    }
    result
}

pub fn finalize_rows(rows: &mut [Row], constants: &ConstantProvider) -> f32 {
    let mut y_cursor = 0.0;
    for row in rows.iter_mut() {
        row.y_pos = y_cursor;
        y_cursor += row.height;

        if row.is_footer() {
            if y_cursor < constants.min_block_height {
                row.height += constants.min_block_height - y_cursor;
                y_cursor = constants.min_block_height;
            }
            row.baseline = row.y_pos + row.height - row.descender_height;
        }

        if row.is_spacer() {
            continue;
        }
        let mut x_cursor = 0.0;
        for index in 0..row.elements.len() {
            let centerline = elem_centerline(row, &row.elements[index], constants);
            let elem = &mut row.elements[index];
            elem.x_pos = x_cursor;
            elem.centerline = centerline;
            x_cursor += elem.width;
        }
    }
    y_cursor
}
