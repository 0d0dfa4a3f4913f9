//! Panel text rendering.
//!
//! Turns a [`MetricSample`] and the [`HostSnapshot`] into the five styled
//! text blocks of the dashboard. Every usage color goes through
//! [`classify_usage`], so panels never disagree on thresholds.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::collector::MetricSample;
use crate::fmt::{Usage, bar_fill, clamp_percent, format_bytes, format_duration};
use crate::host::HostSnapshot;
use crate::theme::Theme;

/// Number of cells in a usage bar.
pub const BAR_WIDTH: usize = 20;

/// Dashboard panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Info,
    Cpu,
    Memory,
    Disk,
    Temperature,
}

impl PanelId {
    /// All panels in binder order.
    pub const ALL: [PanelId; 5] = [
        PanelId::Info,
        PanelId::Cpu,
        PanelId::Memory,
        PanelId::Disk,
        PanelId::Temperature,
    ];

    /// Border title.
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Info => "System Information",
            PanelId::Cpu => "CPU",
            PanelId::Memory => "Memory",
            PanelId::Disk => "Disk Usage",
            PanelId::Temperature => "Temperatures",
        }
    }

    /// Position in [`PanelId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Threshold color of a usage percentage.
pub fn classify_usage(percent: f64, theme: &Theme) -> Color {
    theme.usage_color(Usage::classify(percent))
}

/// Renders a [`BAR_WIDTH`]-cell usage bar.
///
/// Returns the bar, framed in brackets and colored by [`classify_usage`],
/// together with that color so callers can paint adjacent labels alike.
pub fn render_bar(
    percent: f64,
    theme: &Theme,
    filled: char,
    empty: char,
) -> (Span<'static>, Color) {
    let color = classify_usage(percent, theme);
    let fill = bar_fill(percent, BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * filled.len_utf8().max(empty.len_utf8()) + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(filled, fill));
    bar.extend(std::iter::repeat_n(empty, BAR_WIDTH - fill));
    bar.push(']');

    (Span::styled(bar, Style::default().fg(color)), color)
}

/// The five panel texts of one tick.
///
/// Carries the theme it was rendered with so the binder can bring the
/// chrome in line before showing it.
#[derive(Debug, Clone)]
pub struct PanelSet {
    pub theme: &'static Theme,
    texts: [Text<'static>; 5],
}

impl PanelSet {
    /// Renders every panel.
    pub fn render(sample: &MetricSample, host: &HostSnapshot, theme: &'static Theme) -> Self {
        Self {
            theme,
            texts: [
                info_text(sample, host, theme),
                cpu_text(sample, host, theme),
                memory_text(sample, theme),
                disk_text(sample, theme),
                temperature_text(sample),
            ],
        }
    }

    /// Text of one panel.
    pub fn text(&self, id: PanelId) -> &Text<'static> {
        &self.texts[id.index()]
    }

    /// Takes the texts in [`PanelId::ALL`] order.
    pub fn into_texts(self) -> [Text<'static>; 5] {
        self.texts
    }
}

fn colored(content: String, color: Color) -> Span<'static> {
    Span::styled(content, Style::default().fg(color))
}

fn info_text(sample: &MetricSample, host: &HostSnapshot, theme: &Theme) -> Text<'static> {
    let logo_style = Style::default().fg(theme.info.title);
    let mut lines: Vec<Line<'static>> = host
        .logo_lines()
        .map(|line| Line::styled(line.to_string(), logo_style))
        .collect();

    lines.push(Line::from(format!(
        "OS: {} {}",
        host.os_name, host.kernel_arch
    )));
    lines.push(Line::from(format!("OS family: {}", host.os_family)));
    lines.push(Line::from(format!("OS version: {}", host.os_version)));
    lines.push(Line::from(format!(
        "Kernel Version: {}",
        host.kernel_version
    )));
    lines.push(Line::from(format!("Hostname: {}", host.hostname)));
    if let Ok(uptime) = sample.uptime {
        lines.push(Line::from(format!("Uptime: {}", format_duration(uptime))));
    }
    if let Some(model) = &host.cpu_model {
        lines.push(Line::from(format!("CPU Model: {}", model)));
    }
    if let Some(mhz) = host.cpu_frequency_mhz {
        lines.push(Line::from(format!("CPU Frequency: {} MHz", mhz)));
    }
    Text::from(lines)
}

fn cpu_text(sample: &MetricSample, host: &HostSnapshot, theme: &Theme) -> Text<'static> {
    let count = |n: Option<usize>| n.map_or_else(|| "n/a".to_string(), |n| n.to_string());
    let mut lines = vec![Line::from(format!(
        "CPU count physical/logical: {}/{}",
        count(host.physical_cores),
        count(host.logical_cores)
    ))];

    let Ok(usage) = &sample.cpu else {
        return Text::from(lines);
    };

    let total = clamp_percent(usage.total);
    lines.push(Line::from(vec![
        Span::raw("Total usage: "),
        colored(format!("{:.2}%", total), classify_usage(total, theme)),
    ]));

    for (core, &percent) in usage.per_core.iter().enumerate() {
        let percent = clamp_percent(percent);
        let (bar, color) = render_bar(percent, theme, theme.bar.filled, theme.bar.empty);
        lines.push(Line::from(vec![
            colored(format!("CPU{}", core), color),
            Span::raw(" "),
            bar,
            Span::raw(" "),
            colored(format!("{:.0}%", percent), color),
        ]));
    }
    Text::from(lines)
}

fn memory_text(sample: &MetricSample, theme: &Theme) -> Text<'static> {
    let Ok(memory) = &sample.memory else {
        return Text::default();
    };

    let (bar, color) = render_bar(
        memory.used_percent,
        theme,
        theme.bar.filled,
        theme.bar.empty,
    );
    Text::from(vec![
        Line::from(format!("Total Memory: {}", format_bytes(memory.total))),
        Line::from(vec![
            Span::raw(format!("Used Memory: {} (", format_bytes(memory.used))),
            colored(format!("{:.2}", memory.used_percent), color),
            Span::raw("%)"),
        ]),
        Line::from(vec![colored("Memory: ".to_string(), color), bar]),
    ])
}

fn disk_text(sample: &MetricSample, theme: &Theme) -> Text<'static> {
    let Ok(disks) = &sample.disks else {
        return Text::default();
    };

    disks
        .iter()
        .map(|disk| {
            let (bar, color) =
                render_bar(disk.used_percent, theme, theme.bar.filled, theme.bar.empty);
            Line::from(vec![
                Span::raw(format!("{}: ", disk.path.display())),
                bar,
                Span::raw(" "),
                colored(format!("{:.2}%", disk.used_percent), color),
                Span::raw(format!(
                    " Used({}/{})",
                    format_bytes(disk.used),
                    format_bytes(disk.total)
                )),
            ])
        })
        .collect::<Vec<_>>()
        .into()
}

fn temperature_text(sample: &MetricSample) -> Text<'static> {
    sample
        .cpu_temperatures()
        .map(|reading| Line::from(format!("{} : {:.2}C", reading.label, reading.celsius)))
        .collect::<Vec<_>>()
        .into()
}
