// services/line-dash/src/main.rs
//
// Line Dashboard
// Terminal-based monitoring for manufacturing line metrics
//
// Run with: cargo run --bin line-dash -- --demo

use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod mock;
mod state;

use api::DataFeed;
use config::LineDashConfig;
use linekit::config::ObservabilityConfig;
use linekit::summary::format_percent;
use linekit::{DataQuery, DateSelector, HttpSource, LineReport, MetricsSource};
use mock::MockSource;
use state::{DashboardState, FetchPhase};

#[derive(Parser, Debug)]
#[command(name = "line-dash")]
#[command(about = "Terminal dashboard for manufacturing line metrics")]
#[command(version = "0.1.0")]
struct Args {
    /// Run in demo mode with simulated data (no backend required)
    #[arg(long, short)]
    demo: bool,

    /// Fetch once, print the report as JSON and exit
    #[arg(long)]
    once: bool,

    #[arg(short, long, default_value = "config/line-dash.yaml")]
    config: String,

    /// Line data endpoint (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Initial shift, e.g. "Shift B"
    #[arg(long)]
    shift: Option<String>,

    /// today, yesterday or YYYY-MM-DD
    #[arg(long, default_value = "today")]
    date: DateSelector,

    /// Periodic refresh in seconds, 0 to refresh only on demand
    #[arg(long)]
    refresh_secs: Option<u64>,
}

// Color palette: Blue, Purple, Green on dark panels, Slate and Amber accents
mod colors {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Rgb(0, 122, 255);
    pub const DARK_BLUE: Color = Color::Rgb(11, 92, 255);
    pub const PURPLE: Color = Color::Rgb(147, 112, 219);
    pub const GREEN: Color = Color::Rgb(50, 205, 50);
    pub const WHITE: Color = Color::Rgb(249, 249, 249);
    pub const SLATE: Color = Color::Rgb(107, 114, 128);
    pub const AMBER: Color = Color::Rgb(255, 193, 37);
    pub const BG_DARK: Color = Color::Rgb(10, 16, 28);
    pub const BG_PANEL: Color = Color::Rgb(20, 28, 44);
    pub const ERROR: Color = Color::Rgb(255, 99, 71);

    pub const SERIES: [Color; 3] = [BLUE, PURPLE, GREEN];
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = config::load_config(&args.config)?;
    if let Some(url) = &args.api_url {
        cfg.endpoint.base_url = url.clone();
    }
    if let Some(secs) = args.refresh_secs {
        cfg.dashboard.refresh_secs = secs;
    }

    init_tracing(&cfg.observability, args.once)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let source: Arc<dyn MetricsSource> = if args.demo {
        Arc::new(MockSource::new(cfg.tracking.clone()))
    } else {
        Arc::new(HttpSource::new(cfg.endpoint.clone())?)
    };

    if args.once {
        return run_once(&runtime, source, &cfg, &args);
    }

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run app
    let result = run_app(&mut terminal, &runtime, source, cfg, &args);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn init_tracing(obs: &ObservabilityConfig, to_stderr: bool) -> Result<()> {
    // The TUI owns stdout, so interactive runs log to a file or nowhere.
    let writer = if to_stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else if let Some(path) = &obs.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path))?;
        BoxMakeWriter::new(Arc::new(file))
    } else {
        BoxMakeWriter::new(std::io::sink)
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("line_dash={0},linekit={0}", obs.log_level).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(to_stderr),
        )
        .init();

    Ok(())
}

fn run_once(
    runtime: &tokio::runtime::Runtime,
    source: Arc<dyn MetricsSource>,
    cfg: &LineDashConfig,
    args: &Args,
) -> Result<()> {
    let shift = args.shift.as_deref().unwrap_or(&cfg.dashboard.default_shift);
    let query = DataQuery::new(&cfg.tracking, shift, args.date);
    info!("Fetching {:?} from {}", query.params(), source.name());

    let payload = runtime.block_on(source.fetch(&query))?;
    let report = LineReport::from_payload(&payload, &cfg.tracking);

    let output = serde_json::json!({
        "shift": query.shift,
        "date": query.date.query_value(),
        "report": &report,
        "charts": {
            "jph": report.jph_chart(),
            "quality": report.quality_chart(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &tokio::runtime::Runtime,
    source: Arc<dyn MetricsSource>,
    cfg: LineDashConfig,
    args: &Args,
) -> Result<()> {
    let mut state = DashboardState::new(cfg.tracking.shifts.clone(), &cfg.dashboard.default_shift);
    state.date = args.date;
    if let Some(shift) = &args.shift {
        if !state.set_shift(shift) {
            state.add_log("WARN", &format!("Unknown shift '{}', using {}", shift, state.shift()));
        }
    }
    state.set_drives(cfg.dashboard.total_drives, mock::drive_readings());

    let mut feed = DataFeed::new(source, runtime.handle().clone(), cfg.tracking.clone());

    let tick_rate = Duration::from_millis(100);
    let refresh_every = (cfg.dashboard.refresh_secs > 0)
        .then(|| Duration::from_secs(cfg.dashboard.refresh_secs));
    let mut last_refresh = Instant::now();

    // Initial log
    if args.demo {
        state.add_log("INFO", "Line Dashboard started in DEMO mode");
    } else {
        state.add_log("INFO", &format!("Line Dashboard started - connecting to {}", cfg.endpoint.base_url));
    }
    feed.refresh(&mut state);

    loop {
        // Draw UI
        terminal.draw(|frame| draw_ui(frame, &state, &feed, args.demo))?;

        // Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let filters_changed = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('s') => {
                            state.next_shift();
                            true
                        }
                        KeyCode::Char('d') => {
                            state.next_date();
                            true
                        }
                        KeyCode::Char('[') => {
                            state.step_date(-1);
                            true
                        }
                        KeyCode::Char(']') => {
                            state.step_date(1);
                            true
                        }
                        KeyCode::Char('r') => true,
                        KeyCode::Tab => {
                            state.next_trend();
                            false
                        }
                        KeyCode::Up => {
                            state.scroll_up();
                            false
                        }
                        KeyCode::Down => {
                            state.scroll_down();
                            false
                        }
                        _ => false,
                    };
                    if filters_changed {
                        feed.refresh(&mut state);
                        last_refresh = Instant::now();
                    }
                }
            }
        }

        // Update state
        feed.poll(&mut state);
        if let Some(every) = refresh_every {
            if last_refresh.elapsed() >= every {
                feed.refresh(&mut state);
                last_refresh = Instant::now();
            }
        }
    }
}

fn draw_ui(frame: &mut Frame, state: &DashboardState, feed: &DataFeed, demo_mode: bool) {
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(5),  // Summary cards
            Constraint::Min(12),    // Charts
            Constraint::Length(10), // Production + Drives + Activity
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state, feed, demo_mode);

    match (&state.phase, &state.report) {
        (FetchPhase::Failed(message), _) => draw_error(frame, chunks[1].union(chunks[2]), message),
        (_, Some(report)) => {
            draw_summary_cards(frame, chunks[1], report);
            draw_charts(frame, chunks[2], state, report);
        }
        (_, None) if state.is_loading() => draw_loading(frame, chunks[1].union(chunks[2])),
        (_, None) => draw_placeholder(
            frame,
            chunks[1].union(chunks[2]),
            " NO DATA ",
            "Press [R] to fetch line data",
        ),
    }

    draw_bottom_row(frame, chunks[3], state);
    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &DashboardState, feed: &DataFeed, demo_mode: bool) {
    let (phase_text, phase_color) = match &state.phase {
        FetchPhase::Idle => ("[IDLE]", colors::SLATE),
        FetchPhase::Loading { .. } => ("[LOADING]", colors::AMBER),
        FetchPhase::Ready => ("[READY]", colors::GREEN),
        FetchPhase::Failed(_) => ("[ERROR]", colors::ERROR),
    };

    // Mode indicator (DEMO vs LIVE)
    let (mode_text, mode_color) = if demo_mode {
        ("DEMO", colors::AMBER)
    } else {
        ("LIVE", colors::GREEN)
    };

    let updated = state
        .last_updated
        .map(|t| format!("updated {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "never updated".to_string());

    let title = Line::from(vec![
        Span::styled(
            " LINE DASHBOARD ",
            Style::default().fg(colors::WHITE).bg(colors::DARK_BLUE).bold(),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}:{}]", mode_text, feed.source_name()), Style::default().fg(mode_color).bold()),
        Span::raw("  "),
        Span::styled(state.shift().to_string(), Style::default().fg(colors::WHITE).bold()),
        Span::raw(" | "),
        Span::styled(state.date.to_string(), Style::default().fg(colors::WHITE).bold()),
        Span::raw("  "),
        Span::styled(phase_text, Style::default().fg(phase_color).bold()),
        Span::raw("  "),
        Span::styled(updated, Style::default().fg(colors::SLATE)),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}

fn draw_summary_cards(frame: &mut Frame, area: Rect, report: &LineReport) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_stat_box(
        frame,
        chunks[0],
        "TOTAL SET PRODUCTION",
        &format!("{:.0} sets", report.total_sets()),
        colors::WHITE,
    );

    let avg_jph = if report.production.is_empty() {
        0.0
    } else {
        report.production.iter().map(|p| p.average_jph).sum::<f64>() / report.production.len() as f64
    };
    draw_stat_box(frame, chunks[1], "AVERAGE JPH", &format!("{:.2} sets/hr", avg_jph), colors::AMBER);

    draw_stat_box(
        frame,
        chunks[2],
        "OVERALL QUALITY",
        &format_percent(report.quality_percent),
        if report.quality_percent >= 95.0 { colors::GREEN } else { colors::AMBER },
    );

    let oee = report
        .production
        .iter()
        .map(|p| format!("{:.1}", p.latest_oee))
        .collect::<Vec<_>>()
        .join(" / ");
    draw_stat_box(frame, chunks[3], "OEE % (PER LINE)", &oee, colors::BLUE);
}

fn draw_stat_box(frame: &mut Frame, area: Rect, label: &str, value: &str, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(colors::SLATE).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn draw_charts(frame: &mut Frame, area: Rect, state: &DashboardState, report: &LineReport) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_jph_chart(frame, chunks[0], report);
    draw_trend_chart(frame, chunks[1], state, report);
}

fn draw_jph_chart(frame: &mut Frame, area: Rect, report: &LineReport) {
    let legend: Vec<Span> = report
        .jph
        .lines
        .iter()
        .enumerate()
        .flat_map(|(i, l)| {
            vec![
                Span::styled(" ■ ", Style::default().fg(colors::SERIES[i % colors::SERIES.len()])),
                Span::styled(
                    format!("{} ({:.1})", l.display_name, l.average()),
                    Style::default().fg(colors::WHITE),
                ),
            ]
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(" JPH BY HOUR ", Style::default().fg(colors::AMBER).bold()))
        .title_bottom(Line::from(legend))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1)
        .value_style(Style::default().fg(colors::BG_DARK));

    for (idx, label) in report.jph.labels.iter().enumerate() {
        let bars: Vec<Bar> = report
            .jph
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let value = line.values.get(idx).copied().unwrap_or(0.0);
                Bar::default()
                    .value(value.max(0.0).round() as u64)
                    .text_value(String::new())
                    .style(Style::default().fg(colors::SERIES[i % colors::SERIES.len()]))
            })
            .collect();
        let hour = label.split(':').next().unwrap_or_default().to_string();
        chart = chart.data(BarGroup::default().label(Line::from(hour)).bars(&bars));
    }

    frame.render_widget(chart, area);
}

fn draw_trend_chart(frame: &mut Frame, area: Rect, state: &DashboardState, report: &LineReport) {
    let Some(trend) = report.trends.get(state.selected_trend) else {
        draw_placeholder(frame, area, " TREND ", "No trend metrics configured");
        return;
    };

    let title = format!(
        " {} {} | latest {} | avg {} | {} pts ",
        trend.line,
        trend.metric,
        format_percent(trend.latest),
        format_percent(trend.average),
        trend.points
    );
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(colors::WHITE).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let Some(chart_data) = report.trend_chart(&trend.line, &trend.metric) else {
        return;
    };
    let points: Vec<(f64, f64)> = chart_data.datasets[0]
        .data
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let y_max = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max).max(100.0);
    let x_max = (points.len().max(2) - 1) as f64;
    let x_labels: Vec<Span> = chart_data
        .labels
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| Span::styled(l.clone(), Style::default().fg(colors::SLATE)))
        .collect();

    let dataset = Dataset::default()
        .name(trend.metric.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors::BLUE))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", Style::default().fg(colors::SLATE)),
                    Span::styled(format!("{:.0}", y_max), Style::default().fg(colors::SLATE)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn draw_bottom_row(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    draw_production_panel(frame, chunks[0], state);
    draw_drives_panel(frame, chunks[1], state);
    draw_activity_panel(frame, chunks[2], state);
}

fn draw_production_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(" PRODUCTION ", Style::default().fg(colors::WHITE).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let Some(report) = &state.report else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut rows: Vec<Row> = report
        .production
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(Span::styled(p.display_name.clone(), Style::default().fg(colors::WHITE))),
                Cell::from(format!("{:.0}", p.total_sets)),
                Cell::from(format!("{:.2}", p.average_jph)),
                Cell::from(format!("{:.2}%", p.latest_oee)),
            ])
        })
        .collect();

    let q = &report.quality;
    rows.push(Row::new(vec![
        Cell::from(Span::styled("Quality", Style::default().fg(colors::AMBER))),
        Cell::from(format!("pass {:.0}", q.passed)),
        Cell::from(format!("rej {:.0}", q.rejected)),
        Cell::from(format!("rwk {:.0}", q.reworked)),
    ]));

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Span::styled("LINE", Style::default().fg(colors::AMBER).bold())),
            Cell::from(Span::styled("SETS", Style::default().fg(colors::AMBER).bold())),
            Cell::from(Span::styled("JPH", Style::default().fg(colors::AMBER).bold())),
            Cell::from(Span::styled("OEE", Style::default().fg(colors::AMBER).bold())),
        ])
        .bottom_margin(1),
    )
    .block(block);

    frame.render_widget(table, area);
}

fn draw_drives_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = &state.drive_summary;
    let block = Block::default()
        .title(Span::styled(
            format!(
                " DRIVES {} total | {} online | {} offline (simulated) ",
                summary.total, summary.online, summary.offline
            ),
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let rows: Vec<Row> = state
        .drives
        .iter()
        .map(|d| {
            let status_color = match d.status {
                linekit::drives::DriveStatus::Running => colors::GREEN,
                linekit::drives::DriveStatus::Stopped => colors::ERROR,
            };
            Row::new(vec![
                Cell::from(format!("#{}", d.number)),
                Cell::from(Span::styled(d.status.as_str(), Style::default().fg(status_color))),
                Cell::from(format!("{:.2}A", d.current_amps)),
                Cell::from(format!("{:.1}V", d.voltage_volts)),
                Cell::from(format!("{:.2}Hz", d.frequency_hz)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .block(block);

    frame.render_widget(table, area);
}

fn draw_activity_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " ACTIVITY LOG ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let logs: Vec<Line> = state
        .activity_log
        .iter()
        .rev()
        .skip(state.scroll_offset)
        .take(20)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "ERROR" => ("[ERR]", colors::ERROR),
                "WARN" => ("[WRN]", colors::AMBER),
                "INFO" => ("[INF]", colors::GREEN),
                _ => ("[---]", colors::SLATE),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SLATE).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(&entry.message, Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(logs)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ERROR))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(colors::ERROR).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [R] to retry or change the shift/date filter",
            Style::default().fg(colors::SLATE),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    draw_placeholder(frame, area, " LOADING ", "Fetching line data...");
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(colors::AMBER).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SLATE))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(colors::SLATE)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" [Q] ", Style::default().fg(colors::BG_DARK).bg(colors::ERROR)),
        Span::styled(" Quit ", Style::default().fg(colors::SLATE)),
        Span::raw("  "),
        Span::styled(" [S] ", Style::default().fg(colors::BG_DARK).bg(colors::AMBER)),
        Span::styled(" Shift ", Style::default().fg(colors::SLATE)),
        Span::raw("  "),
        Span::styled(" [D] [ ] ", Style::default().fg(colors::BG_DARK).bg(colors::AMBER)),
        Span::styled(" Date ", Style::default().fg(colors::SLATE)),
        Span::raw("  "),
        Span::styled(" [R] ", Style::default().fg(colors::BG_DARK).bg(colors::WHITE)),
        Span::styled(" Refresh ", Style::default().fg(colors::SLATE)),
        Span::raw("  "),
        Span::styled(" [TAB] ", Style::default().fg(colors::BG_DARK).bg(colors::BLUE)),
        Span::styled(" Trend ", Style::default().fg(colors::SLATE)),
        Span::raw("  "),
        Span::styled(" [UP/DOWN] ", Style::default().fg(colors::BG_DARK).bg(colors::SLATE)),
        Span::styled(" Scroll ", Style::default().fg(colors::SLATE)),
    ]);

    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}
