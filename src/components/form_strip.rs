use crate::components::theme::{ThemeColor, resolve, result_style};
use crate::season::fixture::MatchResult;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::widgets::Widget;

/// Row of coloured result boxes, oldest first:
///
/// ```text
///  W  W  L  W  D  W  W  D
/// ```
pub struct FormStrip<'a> {
    pub results: &'a [MatchResult],
}

/// Columns taken by one result box including the gap.
const CELL_WIDTH: u16 = 3;

impl<'a> Widget for FormStrip<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.results.is_empty() {
            buf.set_string(area.x, area.y, "no league results yet", resolve(ThemeColor::Dim));
            return;
        }

        let fits = (area.width / CELL_WIDTH) as usize;
        // Keep the newest results when the strip is too narrow.
        let shown = &self.results[self.results.len().saturating_sub(fits)..];
        let total_w = shown.len() as u16 * CELL_WIDTH;
        let mut x = area.x + area.width.saturating_sub(total_w) / 2;

        for result in shown {
            let style = result_style(*result).add_modifier(Modifier::REVERSED | Modifier::BOLD);
            buf.set_string(x, area.y, format!(" {} ", result.letter()), style);
            x += CELL_WIDTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchResult::{Draw as D, Loss as L, Win as W};

    fn rendered(results: &[MatchResult], width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        FormStrip { results }.render(area, &mut buf);
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn letters_render_in_order() {
        let line = rendered(&[W, D, L], 9);
        assert_eq!(line, " W  D  L ");
    }

    #[test]
    fn narrow_strip_keeps_the_newest_results() {
        let line = rendered(&[L, L, W, D], 6);
        assert_eq!(line, " W  D ");
    }

    #[test]
    fn empty_form_shows_a_hint() {
        assert!(rendered(&[], 30).starts_with("no league results"));
    }
}
