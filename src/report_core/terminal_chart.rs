//! Interactive terminal chart backend
//!
//! Draws one bar chart at a time in an alternate-screen ratatui terminal
//! and blocks until the user dismisses it, mirroring the blocking chart
//! windows of a desktop plotting library.

use super::chart::BarChartSpec;
use super::chart_backend::{ChartBackend, ChartError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::time::Duration;

/// Bar values are f64 but ratatui bars are u64; scale by 100 so two
/// decimal places of revenue survive the conversion.
const VALUE_SCALE: f64 = 100.0;

pub struct TerminalChartBackend;

impl TerminalChartBackend {
    pub fn new() -> Self {
        Self
    }

    fn show_chart(&self, chart: &BarChartSpec) -> Result<(), ChartError> {
        let stdout = std::io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| ChartError::Terminal(e.to_string()))?;

        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;
        terminal
            .clear()
            .map_err(|e| ChartError::Terminal(e.to_string()))?;

        let result = self.event_loop(&mut terminal, chart);

        // Restore terminal state even when drawing failed
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;
        crossterm::terminal::disable_raw_mode()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        chart: &BarChartSpec,
    ) -> Result<(), ChartError> {
        loop {
            terminal
                .draw(|f| render_chart(f, f.size(), chart))
                .map_err(|e| ChartError::Terminal(e.to_string()))?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    match key.code {
                        crossterm::event::KeyCode::Char('q')
                        | crossterm::event::KeyCode::Esc
                        | crossterm::event::KeyCode::Enter => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}

impl Default for TerminalChartBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBackend for TerminalChartBackend {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), ChartError> {
        log::info!("📊 Displaying chart: {}", chart.title);
        self.show_chart(chart)
    }

    fn backend_type(&self) -> &'static str {
        "terminal"
    }
}

fn render_chart(f: &mut Frame, area: Rect, chart: &BarChartSpec) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Bars
            Constraint::Length(3), // Axis labels / dismiss hint
        ])
        .split(area);

    render_header(f, chunks[0], chart);
    render_bars(f, chunks[1], chart);
    render_footer(f, chunks[2], chart);
}

fn render_header(f: &mut Frame, area: Rect, chart: &BarChartSpec) {
    let text = vec![Line::from(vec![Span::styled(
        chart.title.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )])];
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn render_bars(f: &mut Frame, area: Rect, chart: &BarChartSpec) {
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value((value * VALUE_SCALE).round() as u64)
                .label(Line::from(label.clone()))
                .text_value(format!("{:.2}", value))
                .style(Style::default().fg(Color::LightBlue))
        })
        .collect();

    let widget = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(chart.y_label.clone()))
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, chart: &BarChartSpec) {
    let text = vec![Line::from(vec![
        Span::styled("x: ", Style::default().fg(Color::Yellow)),
        Span::raw(chart.x_label.clone()),
        Span::raw(" | "),
        Span::styled("y: ", Style::default().fg(Color::Yellow)),
        Span::raw(chart.y_label.clone()),
        Span::raw(" | Press 'q', Esc or Enter to continue"),
    ])];
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(text).block(block), area);
}
