//! Rendering for the demo: sliding page panes, page indicator, status
//! line.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use swipeview::PageState;

/// Static content for one page pane.
pub struct Page {
    pub title: String,
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            title: title.into(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// Character grid for one pane: bordered box with a title and body.
fn page_cells(page: &Page, width: usize, height: usize) -> Vec<Vec<char>> {
    let mut rows = vec![vec![' '; width]; height];
    if width < 4 || height < 3 {
        return rows;
    }

    for x in 1..width - 1 {
        rows[0][x] = '─';
        rows[height - 1][x] = '─';
    }
    for row in rows.iter_mut().take(height - 1).skip(1) {
        row[0] = '│';
        row[width - 1] = '│';
    }
    rows[0][0] = '╭';
    rows[0][width - 1] = '╮';
    rows[height - 1][0] = '╰';
    rows[height - 1][width - 1] = '╯';

    let title: Vec<char> = format!(" {} ", page.title).chars().collect();
    for (i, ch) in title.iter().enumerate() {
        if 2 + i < width - 2 {
            rows[0][2 + i] = *ch;
        }
    }

    for (line_index, line) in page.lines.iter().enumerate() {
        let y = 2 + line_index;
        if y >= height - 1 {
            break;
        }
        for (i, ch) in line.chars().enumerate() {
            let x = 3 + i;
            if x >= width - 2 {
                break;
            }
            rows[y][x] = ch;
        }
    }

    rows
}

/// Paint one frame. `position` is the fractional page position from
/// the host view; `page_margin` is the configured gap between panes.
pub fn render(
    out: &mut impl Write,
    pages: &[Page],
    position: f32,
    page_margin: u16,
    state: &PageState,
    status: &str,
    size: (u16, u16),
) -> io::Result<()> {
    let (width, height) = (size.0 as usize, size.1 as usize);
    if width < 4 || height < 5 {
        return Ok(());
    }
    let pane_height = height - 2;
    let stride = width + page_margin as usize;
    let cells: Vec<Vec<Vec<char>>> = pages
        .iter()
        .map(|page| page_cells(page, width, pane_height))
        .collect();
    let scroll = (position * stride as f32).round().max(0.0) as usize;

    queue!(out, Clear(ClearType::All))?;

    for row in 0..pane_height {
        let mut line = String::with_capacity(width);
        for col in 0..width {
            let world = scroll + col;
            let page_index = world / stride;
            let within = world % stride;
            // Columns past a pane's width fall in the margin gap.
            let ch = if within < width {
                cells
                    .get(page_index)
                    .map(|pane| pane[row][within])
                    .unwrap_or(' ')
            } else {
                ' '
            };
            line.push(ch);
        }
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }

    let mut dots = String::new();
    for index in 0..pages.len() {
        if index > 0 {
            dots.push(' ');
        }
        dots.push(if index == state.page { '●' } else { '○' });
    }
    let dots_x = width.saturating_sub(dots.chars().count()) / 2;
    queue!(
        out,
        MoveTo(dots_x as u16, pane_height as u16),
        SetForegroundColor(Color::Cyan),
        Print(dots),
        ResetColor
    )?;

    let status_line: String = status.chars().take(width).collect();
    queue!(
        out,
        MoveTo(0, (height - 1) as u16),
        SetForegroundColor(Color::DarkGrey),
        Print(status_line),
        ResetColor
    )?;

    out.flush()
}
