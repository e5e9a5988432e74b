//! Text rendering of grid cells
//!
//! Cells are padded to a fixed display width so wide (CJK, emoji) and
//! zero-width (combining) characters keep columns aligned.

use unicode_width::UnicodeWidthChar;

use super::GridCell;

/// Display columns reserved per glyph
const GLYPH_WIDTH: usize = 2;

/// Glyph shown for characters with no visible width (combining marks, controls)
fn display_glyph(ch: char) -> (String, usize) {
    match ch.width() {
        Some(w) if w > 0 => (ch.to_string(), w),
        // Dotted circle base keeps combining marks visible
        Some(_) if !ch.is_control() => (format!("\u{25CC}{}", ch), 1),
        _ => ("\u{FFFD}".to_string(), 1),
    }
}

/// Render one cell: `[x]` when selected, ` x ` otherwise
pub fn render_cell(cell: &GridCell) -> String {
    let (glyph, width) = display_glyph(cell.ch);
    let pad = " ".repeat(GLYPH_WIDTH.saturating_sub(width));
    if cell.selected {
        format!("[{}{}]", glyph, pad)
    } else {
        format!(" {}{} ", glyph, pad)
    }
}

/// Lay out cells in rows of `columns`, each row prefixed with the index
/// of its first cell.
pub fn render_rows(cells: &[GridCell], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    cells
        .chunks(columns)
        .map(|row| {
            let mut line = format!("{:>6} ", row[0].index);
            for cell in row {
                line.push_str(&render_cell(cell));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: usize, ch: char, selected: bool) -> GridCell {
        GridCell {
            index,
            ch,
            code_point: ch as u32,
            selected,
        }
    }

    #[test]
    fn test_cell_widths_align() {
        let narrow = render_cell(&cell(0, 'A', false));
        let wide = render_cell(&cell(1, '漢', false));
        assert_eq!(narrow, " A  ");
        assert_eq!(wide, " 漢 ");
        assert_eq!(render_cell(&cell(2, 'A', true)), "[A ]");
    }

    #[test]
    fn test_zero_width_and_control() {
        assert_eq!(render_cell(&cell(0, '\u{0301}', false)), " \u{25CC}\u{0301}  ");
        assert_eq!(render_cell(&cell(0, '\u{0001}', false)), " \u{FFFD}  ");
    }

    #[test]
    fn test_rows() {
        let cells: Vec<GridCell> = "ABCDE"
            .chars()
            .enumerate()
            .map(|(i, c)| cell(i, c, false))
            .collect();
        let rows = render_rows(&cells, 2);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("     0 "));
        assert!(rows[2].starts_with("     4 "));
    }
}
