//! In-row spacing
//!
//! `in_row_spacing` maps a pair of adjacent elements to the gap between
//! them. The rules form an ordered decision table: each rule may assume
//! that the rules above it did not match.

use super::constants::ConstantProvider;
use super::measurables::Measurable;
use super::rows::Row;

/// Width of the gap between `prev` and `next`. `None` marks the start or
/// the end of the row.
pub fn in_row_spacing(
    prev: Option<&Measurable>,
    next: Option<&Measurable>,
    rtl: bool,
    constants: &ConstantProvider,
) -> f32 {
    let prev = match prev {
        Some(prev) => prev,
        None => return row_start_spacing(next, constants),
    };

    let next = match next {
        Some(next) => next,
        None => return row_end_spacing(prev, constants),
    };

    // Between a non-input and an input
    if !prev.is_input() && next.is_input() {
        if prev.is_editable() {
            if next.is_inline_input() || next.is_external_input() {
                return constants.small_padding;
            }
        } else if next.is_inline_input() || next.is_external_input() {
            return constants.medium_large_padding;
        } else if next.is_statement_input() {
            return constants.large_padding;
        }
        return constants.large_padding - 1.0;
    }

    // Between an icon and an icon or field
    if prev.is_icon() && !next.is_input() {
        return constants.large_padding;
    }

    // Between an inline input and a field
    if prev.is_inline_input() && !next.is_input() {
        return if next.is_editable() {
            constants.medium_padding
        } else {
            constants.large_padding
        };
    }

    if prev.is_square_corner() {
        if next.is_hat() {
            return constants.no_padding;
        }
        if next.is_previous_connection() {
            return constants.notch_offset_left;
        }
        if next.is_next_connection() {
            return constants.notch_offset_left + constants.next_notch_dark_path_shift(rtl);
        }
    }

    if prev.is_rounded_corner() {
        if next.is_previous_connection() {
            return constants.notch_offset_rounded_corner_prev;
        }
        if next.is_next_connection() {
            return constants.notch_offset_rounded_corner_prev
                + constants.next_notch_dark_path_shift(rtl);
        }
    }

    // Between two fields of the same editability
    if !prev.is_input() && !next.is_input() && prev.is_editable() == next.is_editable() {
        return constants.large_padding;
    }

    if next.is_jagged_edge() {
        return constants.large_padding;
    }

    constants.medium_padding
}

fn row_start_spacing(next: Option<&Measurable>, constants: &ConstantProvider) -> f32 {
    match next {
        Some(next) if next.is_editable() => constants.medium_padding,
        Some(next) if next.is_inline_input() => constants.medium_large_padding,
        Some(next) if next.is_statement_input() => constants.statement_input_padding_left,
        _ => constants.large_padding,
    }
}

fn row_end_spacing(prev: &Measurable, constants: &ConstantProvider) -> f32 {
    if prev.is_input() {
        return if prev.is_inline_input() {
            constants.large_padding
        } else {
            // External and statement sockets sit flush with the row end
            constants.no_padding
        };
    }
    if prev.is_editable() {
        constants.medium_padding
    } else if prev.is_icon() {
        constants.large_padding * 2.0 + 1.0
    } else if prev.is_hat() || prev.is_jagged_edge() {
        constants.no_padding
    } else if prev.is_previous_connection() || prev.is_next_connection() {
        // Minimum width for a block with a previous or next connection
        constants.large_padding
    } else if prev.is_rounded_corner() {
        constants.min_block_width
    } else {
        constants.large_padding
    }
}

/// Rebuild the element list of every row with spacers between elements
pub fn add_elem_spacing(rows: &mut [Row], rtl: bool, constants: &ConstantProvider) {
    for row in rows.iter_mut().filter(|row| !row.is_spacer()) {
        let trailing = row.ends_with_elem_spacer();
        let old_elems = std::mem::take(&mut row.elements);
        let mut elems = Vec::with_capacity(old_elems.len() * 2 + 1);

        if row.starts_with_elem_spacer() {
            elems.push(Measurable::spacer(in_row_spacing(
                None,
                old_elems.first(),
                rtl,
                constants,
            )));
        }

        let last = old_elems.len().saturating_sub(1);
        for (index, elem) in old_elems.iter().enumerate() {
            elems.push(elem.clone());
            if index == last && !trailing {
                continue;
            }
            let spacing = in_row_spacing(Some(elem), old_elems.get(index + 1), rtl, constants);
            elems.push(Measurable::spacer(spacing));
        }

        row.elements = elems;
        row.width = row.element_width_sum();
    }
}
