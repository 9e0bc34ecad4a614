use tui::layout::{Constraint, Layout, Rect, Size};
pub const TAB_BAR_HEIGHT: u16 = 3;
pub const LOG_PANE_HEIGHT: u16 = 8;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub tab_bar: [Rect; 2],
    pub main: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool, show_logs: bool) {
        *self = Self::from_rect(area, full_screen, show_logs);
    }

    fn from_rect(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        let (area, logs) = Self::split_logs(area, show_logs);

        if full_screen {
            let [main] = Layout::vertical([Constraint::Fill(1)]).areas(area);
            return LayoutAreas {
                tab_bar: [Rect::ZERO, Rect::ZERO],
                main,
                logs,
            };
        }

        let [tab, main] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        LayoutAreas {
            tab_bar: Self::split_tab_bar(tab),
            main,
            logs,
        }
    }

    fn split_logs(area: Rect, show_logs: bool) -> (Rect, Option<Rect>) {
        if !show_logs {
            return (area, None);
        }
        let [rest, logs] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(area);
        (rest, Some(logs))
    }

    fn split_tab_bar(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(85), Constraint::Percentage(15)]).areas(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_pane_takes_the_bottom_rows() {
        let mut layout = LayoutAreas::new(Size::new(100, 40));
        assert!(layout.logs.is_none());

        layout.update(Rect::new(0, 0, 100, 40), false, true);
        let logs = layout.logs.unwrap();
        assert_eq!(logs.height, LOG_PANE_HEIGHT);
        assert_eq!(logs.bottom(), 40);
        assert_eq!(layout.main.bottom(), logs.y);
    }

    #[test]
    fn full_screen_hides_the_tab_bar() {
        let mut layout = LayoutAreas::new(Size::new(100, 40));
        layout.update(Rect::new(0, 0, 100, 40), true, false);
        assert_eq!(layout.tab_bar, [Rect::ZERO, Rect::ZERO]);
        assert_eq!(layout.main, Rect::new(0, 0, 100, 40));
    }
}
