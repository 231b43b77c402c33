use crate::app::{AppMode, RenderState};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PROGRESS_BAR_WIDTH: usize = 20;

// Midnight palette
pub const BACKGROUND: Color = Color::Rgb(26, 27, 38); // #1A1B26
pub const TEXT: Color = Color::Rgb(169, 177, 214); // #A9B1D6
pub const ANCHOR: Color = Color::Rgb(247, 118, 142); // #F7768E
pub const DIMMED: Color = Color::Rgb(100, 110, 150); // #646E96

/// Number of blank cells to put before `word` so the anchor grapheme starts
/// at `anchor_column`. Words too wide to fit start flush left.
pub fn word_padding(word: &str, anchor: usize, anchor_column: u16) -> usize {
    let lead_width: usize = word
        .graphemes(true)
        .take(anchor)
        .map(UnicodeWidthStr::width)
        .sum();
    (anchor_column as usize).saturating_sub(lead_width)
}

/// One word with its anchor grapheme emphasised, preceded by the padding
/// that pins the anchor to `anchor_column`.
pub fn word_line(word: &str, anchor: usize, anchor_column: u16) -> Line<'static> {
    let padding = word_padding(word, anchor, anchor_column);

    let mut spans = vec![Span::styled(" ".repeat(padding), Style::default().fg(TEXT))];
    for (i, grapheme) in word.graphemes(true).enumerate() {
        let style = if i == anchor {
            Style::default().fg(ANCHOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };
        spans.push(Span::styled(grapheme.to_string(), style));
    }
    Line::from(spans)
}

/// Draws the current word so the eye never has to move between words.
pub fn render_word_display(word: &str, anchor: usize, anchor_column: u16) -> Paragraph<'static> {
    Paragraph::new(word_line(word, anchor, anchor_column))
        .alignment(Alignment::Left)
        .style(Style::default().bg(BACKGROUND))
}

/// Marker drawn above and below the anchor column.
pub fn render_anchor_guide(anchor_column: u16) -> Paragraph<'static> {
    let line = format!("{}┬", " ".repeat(anchor_column as usize));
    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().fg(DIMMED).bg(BACKGROUND))
}

pub fn filled_cells(state: &RenderState) -> usize {
    let filled = (state.progress_ratio() * PROGRESS_BAR_WIDTH as f64) as usize;
    filled.min(PROGRESS_BAR_WIDTH)
}

pub fn render_progress_bar(state: &RenderState) -> Line<'static> {
    let filled_len = filled_cells(state);
    let empty_len = PROGRESS_BAR_WIDTH - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(TEXT)),
        Span::styled("─".repeat(empty_len), Style::default().fg(DIMMED)),
    ])
    .alignment(Alignment::Center)
}

pub fn status_text(mode: AppMode, state: &RenderState, wpm: Option<f64>) -> String {
    let (position, total) = state.progress;
    match mode {
        AppMode::Reading => format!(
            "{position}/{total}  {} wpm  ·  r restart  q quit",
            wpm.map_or(0, |wpm| wpm.round() as u64)
        ),
        AppMode::Finished => format!("{total} words  ·  r restart  any key to exit"),
        AppMode::Quit => String::new(),
    }
}

pub fn render_status_line(mode: AppMode, state: &RenderState, wpm: Option<f64>) -> Paragraph<'static> {
    Paragraph::new(status_text(mode, state, wpm))
        .alignment(Alignment::Center)
        .style(Style::default().fg(DIMMED).bg(BACKGROUND))
}
