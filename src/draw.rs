use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::symbols;
use tui::text::{Line, Span};
use tui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Chart, Dataset, GraphType,
    Paragraph, Row, Table, Tabs,
};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::analytics::filter::DisplayRow;
use crate::analytics::goals::GoalTally;
use crate::analytics::venue::VenueRecord;
use crate::app::{App, MenuItem};
use crate::components::form_strip::FormStrip;
use crate::components::format::{clip, ordinal, percent, signed};
use crate::components::theme::{
    ThemeColor, competition_style, outlook_style, resolve, result_style, signed_style, tier_style,
    trend_style,
};
use crate::season::fixture::{MatchResult, SeasonRecord};
use crate::state::app_state::{TableState, TableStatus};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use standings_api::{FormResult, RankedRow, StandingsKind, StandingsTable, StatKey};

static TABS: &[&str; 4] = &["Fixtures", "Graphs", "Tables", "Projections"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Fixtures => draw_fixtures(f, layout.main, app),
            MenuItem::Graphs => draw_graphs(f, layout.main, app),
            MenuItem::Tables => draw_tables(f, layout.main, app),
            MenuItem::Projections => draw_projections(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        let area = f.area();
        draw_loading_spinner(f, area, app, loading);
    });

    if let Err(e) = result {
        error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = |tab: MenuItem| match tab {
        MenuItem::Fixtures => 0,
        MenuItem::Graphs => 1,
        MenuItem::Tables => 2,
        MenuItem::Projections => 3,
        MenuItem::Help => 0,
    };
    let selected = match app.state.active_tab {
        MenuItem::Help => tab_index(app.state.previous_tab),
        tab => tab_index(tab),
    };

    let titles: Vec<Line> = TABS
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {t}", i + 1)))
        .collect();
    let mut block = Block::default()
        .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
        .border_type(border_type)
        .title(format!(" {} {} ", app.dataset.club.name, app.dataset.seasons.current));
    if let Some(err) = &app.state.last_error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red),
        )));
    }
    let tabs = Tabs::new(titles)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(selected)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Fixtures tab
// ---------------------------------------------------------------------------

fn draw_fixtures(f: &mut Frame, area: Rect, app: &App) {
    let [cards, body] = Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(area);
    draw_summary_cards(f, cards, app);

    let [table, side] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(40)]).areas(body);
    draw_fixture_table(f, table, app);

    let [form, difficulty] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(side);
    draw_form(f, form, app);
    draw_difficulty(f, difficulty, app);
}

fn draw_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.insights.analysis.summary;
    let seasons = &app.dataset.seasons;
    let diff = summary.difference();

    let cards = [
        (
            format!(" Points {} ", seasons.current),
            summary.current_points.to_string(),
            resolve(ThemeColor::Primary),
        ),
        (
            format!(" Points {} ", seasons.prior),
            summary.prior_points.to_string(),
            resolve(ThemeColor::Secondary),
        ),
        (" Difference ".to_string(), signed(diff), signed_style(diff)),
        (
            " Played ".to_string(),
            summary.matches_played.to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    let areas: [Rect; 4] = Layout::horizontal([Constraint::Fill(1); 4]).areas(area);
    for ((title, value, style), card) in cards.into_iter().zip(areas) {
        let block = default_border(Color::DarkGray).title(title);
        let inner = block.inner(card);
        f.render_widget(block, card);
        f.render_widget(
            Paragraph::new(value)
                .style(style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_fixture_table(f: &mut Frame, area: Rect, app: &App) {
    let seasons = &app.dataset.seasons;
    let title = format!(
        " Fixtures [{}]  c: filter  j/k: scroll  * clean sheet ",
        app.state.fixtures.filter.label()
    );

    let header = Row::new(vec![
        "#".to_string(),
        "Round".to_string(),
        "Date".to_string(),
        "Comp".to_string(),
        "Opponent".to_string(),
        "V".to_string(),
        seasons.prior.clone(),
        "Score".to_string(),
        "Pts".to_string(),
        seasons.current.clone(),
        "Score".to_string(),
        "Pts".to_string(),
        "Pos".to_string(),
        "+/-".to_string(),
        "Agg".to_string(),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .fixture_rows()
        .into_iter()
        .skip(app.state.fixtures.scroll_offset as usize)
        .map(|row| fixture_row(row, app))
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(15),
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(4),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(default_border(Color::White).title(title))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn fixture_row<'a>(row: DisplayRow<'a>, app: &App) -> Row<'a> {
    let dim = resolve(ThemeColor::Dim);
    let (number, annotated) = match row {
        DisplayRow::Break(brk) => {
            return Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
                Cell::from(Span::styled(format!("── {} ──", brk.label()), dim)),
            ]);
        }
        DisplayRow::Match { number, fixture } => (number, fixture),
    };
    let fixture = &annotated.fixture;

    let competition = fixture
        .competition
        .map(|c| Span::styled(c.code(), competition_style(c)))
        .unwrap_or_else(|| Span::raw("-"));

    let mut opponent_style = Style::default();
    if app.dataset.is_marquee(fixture.opponent_name()) {
        opponent_style = opponent_style.add_modifier(Modifier::BOLD);
    }
    let mut opponent = vec![Span::styled(fixture.opponent_name().to_string(), opponent_style)];
    if let Some(correlated) = &fixture.correlated {
        opponent.push(Span::styled(format!(" ({correlated})"), dim));
    }
    if let Some(postponement) = &fixture.postponement {
        let style = if fixture.is_postponed() { resolve(ThemeColor::Accent) } else { dim };
        opponent.push(Span::styled(format!(" P: {}", postponement.reason), style));
    }
    if let Some(note) = &fixture.note {
        opponent.push(Span::styled(format!(" {note}"), dim));
    }

    let result_cell = |result: Option<MatchResult>| match result {
        Some(r) => Cell::from(Span::styled(r.letter().to_string(), result_style(r))),
        None => Cell::from(Span::styled("-", dim)),
    };
    let score_cell = |record: &SeasonRecord| {
        let score = record.marked_score(fixture.venue).unwrap_or_default();
        if record.is_clean_sheet(fixture.venue) {
            Cell::from(Span::styled(score, resolve(ThemeColor::Good)))
        } else {
            Cell::from(score)
        }
    };
    let points_cell = |record: &SeasonRecord| {
        Cell::from(record.points.map(|p| p.to_string()).unwrap_or_default())
    };
    let signed_cell = |value: Option<i32>| match value {
        Some(v) => Cell::from(Span::styled(signed(v), signed_style(v))),
        None => Cell::from(""),
    };

    let row = Row::new(vec![
        Cell::from(number.to_string()),
        Cell::from(fixture.label()),
        Cell::from(
            fixture
                .date
                .map(|d| d.format("%d %b").to_string())
                .unwrap_or_default(),
        ),
        Cell::from(competition),
        Cell::from(Line::from(opponent)),
        Cell::from(fixture.venue.short()),
        result_cell(fixture.prior.result),
        score_cell(&fixture.prior),
        points_cell(&fixture.prior),
        result_cell(fixture.current.result),
        score_cell(&fixture.current),
        points_cell(&fixture.current),
        Cell::from(
            fixture
                .current
                .position
                .map(|p| ordinal(u32::from(p)))
                .unwrap_or_default(),
        ),
        signed_cell(annotated.match_diff),
        signed_cell(annotated.agg),
    ]);

    if fixture.postponement.as_ref().is_some_and(|p| p.skip) || fixture.is_unplayed() {
        row.style(dim)
    } else {
        row
    }
}

fn draw_form(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Form ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        FormStrip {
            results: &app.insights.analysis.form,
        },
        inner,
    );
}

fn draw_difficulty(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Next fixtures ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let report = &app.insights.difficulty;
    let Some(outlook) = report.outlook else {
        f.render_widget(
            Paragraph::new("No fixtures left to play")
                .style(resolve(ThemeColor::Dim))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let name_width = inner.width.saturating_sub(20) as usize;
    let mut lines: Vec<Line> = report
        .upcoming
        .iter()
        .map(|rated| {
            Line::from(vec![
                Span::styled(format!("{:<7}", clip(&rated.label, 7)), resolve(ThemeColor::Dim)),
                Span::raw(format!(
                    "{:<name_width$} {} ",
                    clip(&rated.opponent, name_width),
                    rated.venue.short()
                )),
                Span::styled(rated.tier.label(), tier_style(rated.tier)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Outlook: "),
        Span::styled(outlook.label(), outlook_style(outlook)),
        Span::styled(
            report
                .average
                .map(|avg| format!(" ({avg:.1})"))
                .unwrap_or_default(),
            resolve(ThemeColor::Dim),
        ),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Graphs tab
// ---------------------------------------------------------------------------

fn draw_graphs(f: &mut Frame, area: Rect, app: &App) {
    let [top, bottom] = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
    let [positions, cumulative] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
    let [phases, venue_goals, trend] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
    ])
    .areas(bottom);
    let [venue, goals] =
        Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(venue_goals);

    draw_position_chart(f, positions, app);
    draw_cumulative_chart(f, cumulative, app);
    draw_phase_bars(f, phases, app);
    draw_home_away(f, venue, app);
    draw_goal_stats(f, goals, app);
    draw_head_to_head(f, trend, app);
}

/// Positions are flipped so first place sits at the top of the chart.
const CHART_PLACES: f64 = 20.0;

fn draw_position_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = &app.insights.analysis.positions;
    let block = default_border(Color::White).title(" League position ");
    if series.is_empty() {
        draw_empty(f, area, block, "No league matches played yet");
        return;
    }

    let flip = |pos: u8| CHART_PLACES + 1.0 - f64::from(pos);
    let prior: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.prior.map(|pos| (i as f64 + 1.0, flip(pos))))
        .collect();
    let current: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.current.map(|pos| (i as f64 + 1.0, flip(pos))))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name(app.dataset.seasons.prior.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(resolve(ThemeColor::Secondary))
            .data(&prior),
        Dataset::default()
            .name(app.dataset.seasons.current.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(resolve(ThemeColor::Primary))
            .data(&current),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(match_axis(series.iter().map(|p| p.label.as_str())))
        .y_axis(
            Axis::default()
                .bounds([1.0, CHART_PLACES])
                .labels(vec!["20th", "10th", "1st"])
                .style(resolve(ThemeColor::Dim)),
        );
    f.render_widget(chart, area);
}

fn draw_cumulative_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = &app.insights.analysis.cumulative;
    let block = default_border(Color::White).title(format!(
        " Points vs {} (cumulative) ",
        app.dataset.seasons.prior
    ));
    if series.is_empty() {
        draw_empty(f, area, block, "No league matches played yet");
        return;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64 + 1.0, f64::from(p.diff)))
        .collect();
    let last_x = points.len().max(2) as f64;
    let baseline = [(1.0, 0.0), (last_x, 0.0)];

    let low = series.iter().map(|p| p.diff).min().unwrap_or_default().min(0) - 1;
    let high = series.iter().map(|p| p.diff).max().unwrap_or_default().max(0) + 1;

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(resolve(ThemeColor::Dim))
            .data(&baseline),
        Dataset::default()
            .name("+/-")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(resolve(ThemeColor::Primary))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(match_axis(series.iter().map(|p| p.label.as_str())))
        .y_axis(
            Axis::default()
                .bounds([f64::from(low), f64::from(high)])
                .labels(vec![signed(low), "0".to_string(), signed(high)])
                .style(resolve(ThemeColor::Dim)),
        );
    f.render_widget(chart, area);
}

/// X axis over matchweek labels, showing the first and last.
fn match_axis<'a>(mut labels: impl DoubleEndedIterator<Item = &'a str>) -> Axis<'a> {
    let first = labels.next().unwrap_or_default().to_string();
    let last = labels.next_back().map(str::to_string).unwrap_or_else(|| first.clone());
    let count = labels.count() + 2;
    Axis::default()
        .bounds([1.0, count.max(2) as f64])
        .labels(vec![first, last])
        .style(resolve(ThemeColor::Dim))
}

fn draw_phase_bars(f: &mut Frame, area: Rect, app: &App) {
    let seasons = &app.dataset.seasons;
    let mut chart = BarChart::default()
        .block(default_border(Color::White).title(format!(
            " Points per phase ({} / {}) ",
            seasons.prior, seasons.current
        )))
        .bar_width(3)
        .bar_gap(1)
        .group_gap(2);

    for split in &app.insights.phases {
        let bars = [
            Bar::default()
                .value(u64::from(split.prior))
                .style(resolve(ThemeColor::Secondary)),
            Bar::default()
                .value(u64::from(split.current))
                .style(resolve(ThemeColor::Primary)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(split.label)).bars(&bars));
    }
    f.render_widget(chart, area);
}

fn draw_home_away(f: &mut Frame, area: Rect, app: &App) {
    let current = app.insights.home_away;
    let prior = &app.dataset.baselines.home_away;
    let seasons = &app.dataset.seasons;

    let record = |r: &VenueRecord| {
        format!("{:>2}-{:<2}-{:<2} {:>3}pts", r.wins, r.draws, r.losses, r.points())
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("        {:<14}{}", seasons.current, seasons.prior),
            resolve(ThemeColor::Dim),
        )),
        Line::from(vec![
            Span::raw("Home    "),
            Span::styled(format!("{:<14}", record(&current.home)), resolve(ThemeColor::Primary)),
            Span::styled(record(&prior.home), resolve(ThemeColor::Secondary)),
        ]),
        Line::from(vec![
            Span::raw("Away    "),
            Span::styled(format!("{:<14}", record(&current.away)), resolve(ThemeColor::Primary)),
            Span::styled(record(&prior.away), resolve(ThemeColor::Secondary)),
        ]),
    ];

    let block = default_border(Color::White).title(" Home / Away (W-D-L) ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_goal_stats(f: &mut Frame, area: Rect, app: &App) {
    let seasons = &app.dataset.seasons;
    let selection = app.state.goal_selection;
    let block = default_border(Color::White).title(" Goals & clean sheets  P/U/A/E, [/]: toggle ");

    if !selection.prior && !selection.current {
        draw_empty(f, area, block, "No season selected");
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = resolve(ThemeColor::Dim);
    let tally_cells = |tally: &GoalTally, style: Style| {
        [tally.scored, tally.conceded, tally.clean_sheets]
            .map(|n| Cell::from(Span::styled(n.to_string(), style)))
    };
    let row = |label: Span<'static>, current: &GoalTally, prior: &GoalTally, style: Style| {
        let mut cells = vec![Cell::from(label)];
        if selection.current {
            cells.extend(tally_cells(current, style));
        }
        if selection.prior {
            cells.extend(tally_cells(prior, dim));
        }
        Row::new(cells)
    };

    let mut header = vec![String::new()];
    let mut widths = vec![Constraint::Length(4)];
    for (shown, label) in [(selection.current, &seasons.current), (selection.prior, &seasons.prior)] {
        if shown {
            header.extend([format!("GF {label}"), "GA".to_string(), "CS".to_string()]);
            widths.extend([Constraint::Length(8), Constraint::Length(3), Constraint::Length(3)]);
        }
    }

    let mut rows: Vec<Row> = selection
        .rows(&app.insights.goals)
        .into_iter()
        .map(|cmp| {
            row(
                Span::styled(cmp.competition.code(), competition_style(cmp.competition)),
                &cmp.current,
                &cmp.prior,
                Style::default(),
            )
        })
        .collect();
    let (current, prior) = selection.totals(&app.insights.goals);
    rows.push(row(Span::styled("All", bold), &current, &prior, bold));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(bold))
        .block(block);
    f.render_widget(table, area);
}

fn draw_head_to_head(f: &mut Frame, area: Rect, app: &App) {
    let h2h = &app.insights.head_to_head;
    let filter = app.state.trend_filter;
    let seasons = &app.dataset.seasons;
    let title = format!(
        " Head to head [{}]  t: filter  +{} ={} -{} ",
        filter.label(),
        h2h.better,
        h2h.same,
        h2h.worse
    );
    let block = default_border(Color::White).title(title);

    if h2h.rows.is_empty() {
        draw_empty(f, area, block, "No league matches played yet");
        return;
    }

    let header = Row::new(vec![
        "Opponent".to_string(),
        seasons.prior.clone(),
        seasons.current.clone(),
        "Trend".to_string(),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = h2h
        .rows
        .iter()
        .map(|row| {
            let trend = match row.diff {
                Some(0) => "=".to_string(),
                Some(d) => signed(d),
                None => "-".to_string(),
            };
            let prior = row
                .prior
                .map(|r| Span::styled(r.letter().to_string(), result_style(r)))
                .unwrap_or_else(|| Span::styled("-", resolve(ThemeColor::Dim)));
            let cells = Row::new(vec![
                Cell::from(format!("{} ({})", row.opponent, row.venue.short())),
                Cell::from(prior),
                Cell::from(Span::styled(row.current.letter().to_string(), result_style(row.current))),
                Cell::from(Span::styled(trend, trend_style(row.trend))),
            ]);
            if filter.matches(row.trend) {
                cells
            } else {
                cells.style(Style::default().add_modifier(Modifier::DIM))
            }
        })
        .collect();

    let widths = [
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
    ];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

// ---------------------------------------------------------------------------
// Tables tab
// ---------------------------------------------------------------------------

fn draw_tables(f: &mut Frame, area: Rect, app: &App) {
    let [flat, grouped] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    draw_standings(f, flat, app, StandingsKind::Flat);
    draw_standings(f, grouped, app, StandingsKind::Grouped);
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App, kind: StandingsKind) {
    let state = app.state.standings.get(kind);
    let focused = app.state.standings.focused == kind;
    let border = if focused { Color::Yellow } else { Color::DarkGray };

    let mut title = format!(" {} ", kind.label());
    if let Some(fetched) = state.table().and_then(|t| t.fetched_at) {
        title.push_str(&format!("(updated {}) ", fetched.format("%H:%M UTC")));
    }
    if focused {
        title.push_str("h/l: column  Enter: sort  Tab: switch ");
    }
    let block = default_border(border).title(title);

    match &state.status {
        TableStatus::Loading => draw_empty(f, area, block, "Loading standings..."),
        TableStatus::Unavailable(reason) => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            let lines = vec![
                Line::from("Standings not available"),
                Line::from(Span::styled(reason.clone(), resolve(ThemeColor::Dim))),
            ];
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
        TableStatus::Loaded(table) => {
            let (header, widths) = standings_header(table, state, focused);
            let rows: Vec<Row> = table
                .sorted(state.sort)
                .into_iter()
                .skip(state.scroll_offset as usize)
                .map(|row| standings_row(row, table, state, app))
                .collect();
            f.render_widget(
                Table::new(rows, widths).header(header).block(block).column_spacing(1),
                area,
            );
        }
    }
}

fn standings_header(
    table: &StandingsTable,
    state: &TableState,
    focused: bool,
) -> (Row<'static>, Vec<Constraint>) {
    let mut cells = Vec::new();
    let mut widths = Vec::new();

    for (idx, key) in StatKey::COLUMNS.iter().enumerate() {
        let mut label = key.label().to_string();
        if state.sort.key == *key {
            label.push(state.sort.direction.arrow());
        }
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if focused && state.cursor == idx {
            style = style.add_modifier(Modifier::REVERSED);
        }
        cells.push(Cell::from(Span::styled(label, style)));
        widths.push(Constraint::Length(4));

        if *key == StatKey::Rank {
            cells.push(Cell::from(Span::styled(
                "Team",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            widths.push(Constraint::Fill(1));
        }
    }

    if table.has_form_data {
        cells.push(Cell::from(Span::styled(
            "Form",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        widths.push(Constraint::Length(5));
    }

    (Row::new(cells), widths)
}

fn standings_row<'a>(
    row: &'a RankedRow,
    table: &StandingsTable,
    state: &TableState,
    app: &App,
) -> Row<'a> {
    let entry = &row.entry;
    let mut cells = Vec::new();

    for key in StatKey::COLUMNS {
        let text = match key {
            StatKey::Rank => row.rank.to_string(),
            _ => entry.stat_display(key),
        };
        cells.push(Cell::from(text));
        if key == StatKey::Rank {
            cells.push(Cell::from(entry.team.name.as_str()));
        }
    }

    if table.has_form_data {
        let form: Vec<Span> = entry
            .team
            .recent_results
            .iter()
            .map(|r| Span::styled(r.letter().to_string(), form_style(*r)))
            .collect();
        cells.push(Cell::from(Line::from(form)));
    }

    let mut style = Style::default();
    if entry.team.name == app.dataset.club.name
        || entry.team.abbreviation == app.dataset.club.abbreviation
    {
        style = resolve(ThemeColor::Primary).add_modifier(Modifier::BOLD);
    }
    if table.is_zone_break(state.sort, row.rank) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Row::new(cells).style(style)
}

fn form_style(result: FormResult) -> Style {
    match result {
        FormResult::Win => resolve(ThemeColor::Good),
        FormResult::Draw => resolve(ThemeColor::Neutral),
        FormResult::Loss => resolve(ThemeColor::Bad),
        FormResult::Other => resolve(ThemeColor::Dim),
    }
}

// ---------------------------------------------------------------------------
// Projections tab
// ---------------------------------------------------------------------------

fn draw_projections(f: &mut Frame, area: Rect, app: &App) {
    let [domestic, continental] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let projections = &app.dataset.projections;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let club_style = |team: &str| {
        if team == app.dataset.club.name {
            resolve(ThemeColor::Primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let header = Row::new(vec!["Team", "xPos", "xPts", "Title", "Top 4"]).style(bold);
    let rows: Vec<Row> = projections
        .domestic
        .iter()
        .map(|p| {
            Row::new(vec![
                p.team.clone(),
                format!("{:.1}", p.x_pos),
                format!("{:.1}", p.x_pts),
                percent(p.title),
                percent(p.ucl),
            ])
            .style(club_style(&p.team))
        })
        .collect();
    let widths = [
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(7),
    ];
    f.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(default_border(Color::White).title(" Opta projections: Premier League ")),
        domestic,
    );

    let header =
        Row::new(vec!["Team", "xPos", "xPts", "Top 24", "QF", "SF", "Final", "Win"]).style(bold);
    let rows: Vec<Row> = projections
        .continental
        .iter()
        .map(|p| {
            Row::new(vec![
                p.team.clone(),
                format!("{:.1}", p.x_pos),
                format!("{:.1}", p.x_pts),
                percent(p.league_phase),
                percent(p.quarter_final),
                percent(p.semi_final),
                percent(p.final_),
                percent(p.winner),
            ])
            .style(club_style(&p.team))
        })
        .collect();
    let widths = [
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
    ];
    f.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(default_border(Color::White).title(" Opta projections: Champions League ")),
        continental,
    );
}

// ---------------------------------------------------------------------------
// Help, logs, misc
// ---------------------------------------------------------------------------

fn draw_help(f: &mut Frame, area: Rect) {
    let keys = [
        ("1-4", "switch tab"),
        ("?", "help (Esc to close)"),
        ("f", "toggle full screen"),
        ("\"", "toggle log pane"),
        ("q", "quit"),
        ("", ""),
        ("c", "fixtures: cycle competition filter"),
        ("j/k", "fixtures, tables: scroll"),
        ("t", "graphs: cycle head-to-head filter"),
        ("P/U/A/E", "graphs: toggle PL, UCL, FA, EFL goals"),
        ("[ / ]", "graphs: toggle prior / current season goals"),
        ("Tab", "tables: switch table"),
        ("h/l", "tables: move column cursor"),
        ("Enter", "tables: sort by column (again to reverse)"),
    ];
    let lines: Vec<Line> = keys
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>7}  "), resolve(ThemeColor::Accent)),
                Span::raw(*action),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(default_border(Color::DarkGray).title(" Help ")),
        area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Gray))
        .style_trace(Style::default().fg(Color::DarkGray));
    f.render_widget(logs, area);
}

fn draw_empty(f: &mut Frame, area: Rect, block: Block, msg: &str) {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(resolve(ThemeColor::Dim))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
