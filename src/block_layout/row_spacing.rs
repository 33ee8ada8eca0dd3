//! Between-row spacers
//!
//! Interleaves a spacer row between every pair of adjacent rows. The
//! heights follow an ordered rule list; each rule may assume the ones
//! before it did not match.

use super::constants::ConstantProvider;
use super::rows::Row;

pub fn spacer_row_height(prev: &Row, next: &Row, constants: &ConstantProvider) -> f32 {
    // An empty block still needs some height
    if prev.is_header() && next.is_footer() {
        return constants.empty_block_spacer_height;
    }
    // Header and footer already pad themselves
    if prev.is_header() || next.is_footer() {
        return constants.no_padding;
    }
    if prev.has_external_input && next.has_external_input {
        return constants.large_padding;
    }
    if !prev.has_statement && next.has_statement {
        return constants.between_statement_padding_y;
    }
    if prev.has_statement && next.has_statement {
        return constants.large_padding;
    }
    if next.has_dummy_input {
        return constants.large_padding;
    }
    constants.medium_padding
}

pub fn spacer_row_width(next: &Row, block_width: f32) -> f32 {
    if next.is_footer() && next.has_fixed_width {
        next.width
    } else {
        block_width
    }
}

/// Build the final row sequence with spacer rows interleaved
pub fn add_row_spacing(rows: Vec<Row>, block_width: f32, constants: &ConstantProvider) -> Vec<Row> {
    let mut spaced = Vec::with_capacity(rows.len() * 2);
    let mut iter = rows.into_iter().peekable();

    while let Some(row) = iter.next() {
        let spacer = iter.peek().map(|next| {
            let mut spacer = Row::between_spacer(
                spacer_row_width(next, block_width),
                spacer_row_height(&row, next, constants),
            );
            spacer.follows_statement = row.has_statement;
            spacer
        });
        spaced.push(row);
        spaced.extend(spacer);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(setup: impl FnOnce(&mut Row)) -> Row {
        let mut row = Row::content();
        setup(&mut row);
        row
    }

    #[test]
    fn test_height_rules_in_order() {
        let c = ConstantProvider::default();
        let header = Row::header();
        let footer = Row::footer();
        let external = content(|row| row.has_external_input = true);
        let statement = content(|row| row.has_statement = true);
        let dummy = content(|row| row.has_dummy_input = true);
        let plain = Row::content();

        assert_eq!(spacer_row_height(&header, &footer, &c), 16.0);
        assert_eq!(spacer_row_height(&header, &statement, &c), 0.0);
        assert_eq!(spacer_row_height(&statement, &footer, &c), 0.0);
        assert_eq!(spacer_row_height(&external, &external, &c), 10.0);
        assert_eq!(spacer_row_height(&plain, &statement, &c), 4.0);
        assert_eq!(spacer_row_height(&statement, &statement, &c), 10.0);
        assert_eq!(spacer_row_height(&plain, &dummy, &c), 10.0);
        assert_eq!(spacer_row_height(&plain, &plain, &c), 5.0);
    }

    #[test]
    fn test_spacers_interleave_without_edges() {
        let c = ConstantProvider::default();
        let rows = vec![Row::header(), Row::content(), Row::footer()];
        let spaced = add_row_spacing(rows, 40.0, &c);
        assert_eq!(spaced.len(), 5);
        assert!(spaced[0].is_header());
        assert!(spaced[1].is_spacer());
        assert!(spaced[3].is_spacer());
        assert!(spaced[4].is_footer());
        assert_eq!(spaced[1].width, 40.0);
    }

    #[test]
    fn test_spacer_after_statement_is_flagged() {
        let c = ConstantProvider::default();
        let statement = content(|row| row.has_statement = true);
        let spaced = add_row_spacing(vec![Row::header(), statement, Row::footer()], 40.0, &c);
        assert!(!spaced[1].follows_statement);
        assert!(spaced[3].follows_statement);
    }

    #[test]
    fn test_spacer_before_fixed_footer_matches_footer() {
        let c = ConstantProvider::default();
        let mut footer = Row::footer();
        footer.has_fixed_width = true;
        footer.width = 66.5;
        let spaced = add_row_spacing(vec![Row::content(), footer], 200.0, &c);
        assert_eq!(spaced[1].width, 66.5);
    }
}
