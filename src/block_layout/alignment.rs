//! Alignment pass
//!
//! Pads rows that are narrower than the block so that every right edge
//! lines up, honouring the alignment of the row's last input.

use super::constants::ConstantProvider;
use super::rows::Row;
use crate::models::Align;

/// Width a row should be stretched to
fn desired_width(row: &Row, block_width: f32, constants: &ConstantProvider) -> f32 {
    if row.is_footer() && row.has_fixed_width {
        constants.max_bottom_width
    } else {
        block_width
    }
}

fn add_to_spacer(row: &mut Row, index: Option<usize>, amount: f32) {
    if let Some(index) = index {
        row.elements[index].width += amount;
    } else {
        log::warn!("no spacer to absorb {} px of padding on {:?} row", amount, row.kind);
    }
}

/// Stretch one row to the desired width. Statement rows and rows holding
/// inline inputs keep their natural width.
pub fn align_row(row: &mut Row, block_width: f32, constants: &ConstantProvider) {
    if row.is_spacer() || row.has_statement || row.has_inline_input {
        return;
    }
    let missing = desired_width(row, block_width, constants) - row.width;
    if missing <= 0.0 {
        return;
    }

    // The last spacer is the trailing one, or the one leading into an
    // external socket when the row ends in it
    let leading = row.first_spacer_index();
    let trailing = row.last_spacer_index();

    // Dummy inputs leave no element behind but still declare an alignment
    let align = if row.is_header_or_footer() {
        Align::Start
    } else {
        row.last_input_align.unwrap_or_default()
    };

    match align {
        Align::Start => add_to_spacer(row, trailing, missing),
        Align::Center => {
            add_to_spacer(row, leading, missing / 2.0);
            add_to_spacer(row, trailing, missing / 2.0);
        }
        Align::End => add_to_spacer(row, leading, missing),
    }
    row.width += missing;
}

pub fn align_rows(rows: &mut [Row], block_width: f32, constants: &ConstantProvider) {
    for row in rows.iter_mut() {
        align_row(row, block_width, constants);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_layout::measurables::Measurable;
    use crate::models::{Field, Input};

    fn external_row(align: Align) -> Row {
        let constants = ConstantProvider::default();
        let mut row = Row::content();
        row.has_external_input = true;
        row.last_input_align = Some(align);
        row.elements = vec![
            Measurable::spacer(10.0),
            Measurable::field(0, 0, &Field::label(20.0, 10.0)).unwrap(),
            Measurable::spacer(8.0),
            Measurable::external_value_input(0, &Input::value().with_align(align), &constants)
                .unwrap(),
        ];
        row.width = row.element_width_sum();
        row
    }

    #[test]
    fn test_start_pads_before_external_socket() {
        let constants = ConstantProvider::default();
        let mut row = external_row(Align::Start);
        align_row(&mut row, 100.0, &constants);
        assert_eq!(row.width, 100.0);
        assert_eq!(row.elements[0].width, 10.0);
        assert_eq!(row.elements[2].width, 8.0 + 52.0);
        assert_eq!(row.element_width_sum(), row.width);
    }

    #[test]
    fn test_center_splits_padding() {
        let constants = ConstantProvider::default();
        let mut row = external_row(Align::Center);
        align_row(&mut row, 100.0, &constants);
        assert_eq!(row.elements[0].width, 10.0 + 26.0);
        assert_eq!(row.elements[2].width, 8.0 + 26.0);
        assert_eq!(row.element_width_sum(), 100.0);
    }

    #[test]
    fn test_end_pads_leading_spacer() {
        let constants = ConstantProvider::default();
        let mut row = external_row(Align::End);
        align_row(&mut row, 100.0, &constants);
        assert_eq!(row.elements[0].width, 62.0);
        assert_eq!(row.elements[2].width, 8.0);
    }

    #[test]
    fn test_rows_without_inputs_pad_trailing_spacer() {
        let constants = ConstantProvider::default();
        let mut header = Row::header();
        header.elements = vec![Measurable::round_corner(&constants), Measurable::spacer(12.0)];
        header.width = 20.0;
        header.last_input_align = Some(Align::End);
        align_row(&mut header, 40.0, &constants);
        assert_eq!(header.elements[1].width, 32.0);
        assert_eq!(header.width, 40.0);
    }

    #[test]
    fn test_dummy_row_uses_declared_alignment() {
        let constants = ConstantProvider::default();
        let mut row = Row::content();
        row.has_dummy_input = true;
        row.last_input_align = Some(Align::End);
        row.elements = vec![
            Measurable::spacer(10.0),
            Measurable::field(0, 0, &Field::label(10.0, 10.0)).unwrap(),
            Measurable::spacer(10.0),
        ];
        row.width = 30.0;
        align_row(&mut row, 100.0, &constants);
        assert_eq!(row.elements[0].width, 80.0);
        assert_eq!(row.elements[2].width, 10.0);
    }

    #[test]
    fn test_icon_only_row_pads_trailing_spacer() {
        let constants = ConstantProvider::default();
        let mut row = Row::content();
        row.elements = vec![
            Measurable::spacer(10.0),
            Measurable::icon(0, &crate::models::Icon::new(16.0, 16.0)).unwrap(),
            Measurable::spacer(21.0),
        ];
        row.width = 47.0;
        align_row(&mut row, 60.0, &constants);
        assert_eq!(row.elements[0].width, 10.0);
        assert_eq!(row.elements[2].width, 34.0);
    }

    #[test]
    fn test_statement_and_inline_rows_are_untouched() {
        let constants = ConstantProvider::default();
        let mut row = Row::content();
        row.has_inline_input = true;
        row.elements = vec![Measurable::spacer(10.0)];
        row.width = 10.0;
        align_row(&mut row, 100.0, &constants);
        assert_eq!(row.width, 10.0);
    }

    #[test]
    fn test_fixed_width_footer_uses_max_bottom_width() {
        let constants = ConstantProvider::default();
        let mut footer = Row::footer();
        footer.has_fixed_width = true;
        footer.elements = vec![Measurable::round_corner(&constants), Measurable::spacer(12.0)];
        footer.width = 20.0;
        align_row(&mut footer, 200.0, &constants);
        assert_eq!(footer.width, 66.5);
    }

    #[test]
    fn test_wider_rows_are_not_shrunk() {
        let constants = ConstantProvider::default();
        let mut row = external_row(Align::Start);
        align_row(&mut row, 20.0, &constants);
        assert_eq!(row.width, 48.0);
    }
}
