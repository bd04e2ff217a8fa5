//! Layout and drawing.
//!
//! ```text
//! ┌ ᕼλᕲƐ ───────────────────────────────────┐┌─────────┐┌───┐
//! │ Home │ About │ Projects │ Skills │ Contact ││ Hire Me ││ ☾ │
//! └─────────────────────────────────────────┘└─────────┘└───┘
//!   section content
//!
//!  Tab: sections | t: theme | q: quit       © 2026 Adekunle
//! ```
//!
//! Rendering records a [`ClickRegion`] for everything clickable so mouse
//! input can be resolved against the frame that was actually drawn.

use super::app::{ClickRegion, ClickTarget, PortfolioApp};
use super::sections::Section;
use crate::catalog::{ProjectRecord, SkillRecord, PROFILE, SKILLS};
use crate::contact::ContactField;
use crate::filter::Filter;
use crate::links::mailto;
use crate::overlay::ProjectLink;
use crate::skills::{arc_fraction, arc_points, drawn_rows, grid_columns, CELL_HEIGHT};
use crate::theme::Palette;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Clear, Paragraph, Tabs, Wrap,
    },
    Frame,
};

const TOGGLE_WIDTH: u16 = 5;
const HIRE_WIDTH: u16 = 11;
/// Narrower headers leave out the "Hire Me" button.
const HIRE_MIN_HEADER: u16 = 64;
const CARD_HEIGHT: u16 = 9;
/// Points on a full skill circle.
const ARC_STEPS: usize = 180;
/// Colour bands along a filled arc.
const ARC_SEGMENTS: usize = 12;
const ARC_BOUND: f64 = 1.25;

struct ScreenLayout {
    header: Rect,
    content: Rect,
    footer: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs and theme toggle
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Footer
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Draw a frame and refresh the app's click regions.
pub fn render(frame: &mut Frame, app: &mut PortfolioApp) {
    let layout = screen_layout(frame.area());
    app.prepare_frame(layout.content);

    let mut regions = Vec::new();
    draw(frame, app, &layout, &mut regions);
    app.set_click_regions(regions);
}

fn draw(frame: &mut Frame, app: &PortfolioApp, layout: &ScreenLayout, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        frame.area(),
    );

    render_header(frame, app, layout.header, regions);
    match app.section() {
        Section::Home => render_home(frame, app, layout.content, regions),
        Section::About => render_about(frame, &palette, layout.content),
        Section::Projects => render_projects(frame, app, layout.content, regions),
        Section::Skills => render_skills(frame, app, layout.content),
        Section::Contact => render_contact(frame, app, layout.content, regions),
    }
    render_footer(frame, app, layout.footer);

    if let Some(project) = app.overlay().selected() {
        render_overlay(frame, app, project, layout.content, regions);
    }
}

fn bordered(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}

/// Area inside a one-cell border.
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn text_width(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

/// Text run with a character-by-character accent gradient.
fn gradient_spans(text: &str, palette: &Palette) -> Vec<Span<'static>> {
    let len = text.chars().count().max(2) - 1;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(palette.accent_at(i as f64 / len as f64))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

// ----------------------------------------------------------------------
// Header and footer
// ----------------------------------------------------------------------

fn render_header(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let hire_width = if area.width >= HIRE_MIN_HEADER { HIRE_WIDTH } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(hire_width),
            Constraint::Length(TOGGLE_WIDTH),
        ])
        .split(area);

    let titles: Vec<Line> = Section::all().iter().map(|s| Line::from(s.name())).collect();
    let tabs = Tabs::new(titles)
        .block(bordered(&palette).title(Line::from(gradient_spans(
            &format!(" {} ", PROFILE.logo),
            &palette,
        ))))
        .select(app.section().index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent[0])
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);
    regions.extend(tab_regions(chunks[0]));

    let toggle = Paragraph::new(palette.toggle_glyph)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.accent[1]))
        .block(bordered(&palette));
    frame.render_widget(toggle, chunks[2]);
    regions.push(ClickRegion::new(chunks[2], ClickTarget::ThemeToggle));

    if hire_width > 0 {
        render_button(frame, &palette, " Hire Me ", chunks[1], true);
        regions.push(ClickRegion::new(chunks[1], ClickTarget::HireMe));
    }
}

/// Where each tab title lands: `Tabs` pads every title with one cell on
/// either side and puts a one-cell divider between titles.
fn tab_regions(area: Rect) -> Vec<ClickRegion> {
    let inner = inset(area);
    let mut regions = Vec::new();
    let mut x = inner.x;
    for section in Section::all() {
        let width = text_width(section.name()) + 2;
        let visible = width.min(inner.right().saturating_sub(x));
        if visible == 0 {
            break;
        }
        regions.push(ClickRegion::new(
            Rect::new(x, inner.y, visible, 1),
            ClickTarget::Tab(*section),
        ));
        x = x.saturating_add(width + 1);
    }
    regions
}

fn help_text(app: &PortfolioApp) -> &'static str {
    if app.overlay().is_open() {
        return " o: open live | r: open repo | x/Esc: close ";
    }
    if app.contact().is_editing() {
        return " type to edit | Tab: next field | Esc: done ";
    }
    match app.section() {
        Section::Home => " Tab/1-5: sections | w: work | c: hire me | t: theme | q: quit ",
        Section::About => " Tab/1-5: sections | t: theme | q: quit ",
        Section::Projects => " ←→: filter | ↑↓: select | Enter: details | t: theme | q: quit ",
        Section::Skills => " ↑↓: scroll | Tab/1-5: sections | t: theme | q: quit ",
        Section::Contact => " ↑↓: field | Enter: edit | s: send | t: theme | q: quit ",
    }
}

fn copyright_line() -> String {
    format!("© {} {} ", chrono::Local::now().year(), PROFILE.name)
}

fn render_footer(frame: &mut Frame, app: &PortfolioApp, area: Rect) {
    let palette = app.palette();
    let copyright = copyright_line();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(text_width(&copyright))])
        .split(area);

    frame.render_widget(
        Paragraph::new(help_text(app)).style(Style::default().fg(palette.muted)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(copyright).style(Style::default().fg(palette.muted)),
        chunks[1],
    );
}

// ----------------------------------------------------------------------
// Home and About
// ----------------------------------------------------------------------

fn render_home(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut greeting = vec![Span::styled("Hey, I'm ", Style::default().fg(palette.foreground))];
    greeting.extend(gradient_spans(PROFILE.name, &palette));

    let lines = vec![
        Line::from(greeting),
        Line::from(""),
        Line::from(Span::styled(PROFILE.tagline, Style::default().fg(palette.foreground))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Open to: ", Style::default().fg(palette.muted)),
            Span::styled(PROFILE.open_to.join(" · "), Style::default().fg(palette.accent[0])),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Profile photo: {}", app.assets().profile().describe()),
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(2),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
    render_button(frame, &palette, " View Work ", buttons[0], false);
    render_button(frame, &palette, " Hire Me ", buttons[2], true);
    regions.push(ClickRegion::new(buttons[0], ClickTarget::HeroWork));
    regions.push(ClickRegion::new(buttons[2], ClickTarget::HireMe));
}

fn render_button(frame: &mut Frame, palette: &Palette, label: &str, area: Rect, primary: bool) {
    let style = if primary {
        Style::default()
            .fg(palette.accent[1])
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };
    let border = if primary { palette.accent[1] } else { palette.border };
    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(button, area);
}

fn bullet_lines(items: &[&'static str], palette: &Palette) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.accent[0])),
                Span::styled(*item, Style::default().fg(palette.foreground)),
            ])
        })
        .collect()
}

fn render_about(frame: &mut Frame, palette: &Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let story = vec![
        Line::from(Span::styled(PROFILE.about, Style::default().fg(palette.foreground))),
        Line::from(""),
        Line::from(Span::styled(PROFILE.background, Style::default().fg(palette.muted))),
    ];
    frame.render_widget(
        Paragraph::new(story)
            .wrap(Wrap { trim: true })
            .block(bordered(palette).title(" About me ")),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);
    frame.render_widget(
        Paragraph::new(bullet_lines(PROFILE.values, palette))
            .wrap(Wrap { trim: true })
            .block(bordered(palette).title(" What I value ")),
        right[0],
    );
    frame.render_widget(
        Paragraph::new(bullet_lines(PROFILE.quick_facts, palette))
            .wrap(Wrap { trim: true })
            .block(bordered(palette).title(" Quick facts ")),
        right[1],
    );
}

// ----------------------------------------------------------------------
// Projects
// ----------------------------------------------------------------------

fn card_columns(width: u16) -> u16 {
    match width {
        w if w >= 96 => 3,
        w if w >= 64 => 2,
        _ => 1,
    }
}

fn render_projects(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter chips
            Constraint::Length(1),
            Constraint::Min(0), // Cards
        ])
        .split(area);

    render_filter_chips(frame, app, chunks[0], regions);

    let visible = app.visible_projects();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(" No projects in this category yet.")
                .style(Style::default().fg(palette.muted)),
            chunks[2],
        );
        return;
    }

    let grid = chunks[2];
    let columns = card_columns(grid.width);
    let card_width = grid.width / columns;
    for (i, project) in visible.iter().enumerate() {
        let col = i as u16 % columns;
        let row = i as u16 / columns;
        let y = grid.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > grid.bottom() {
            break;
        }
        let card = Rect::new(grid.x + col * card_width, y, card_width, CARD_HEIGHT);
        render_card(frame, app, project, i == app.card_index(), card);
        regions.push(ClickRegion::new(card, ClickTarget::Card(project.id)));
    }
}

fn render_filter_chips(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    for filter in Filter::ALL {
        let label = format!(" {} ", filter.label());
        let width = text_width(&label);
        let style = if filter == app.filter() {
            Style::default()
                .fg(palette.chip_active_fg)
                .bg(palette.chip_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let visible = width.min(area.right().saturating_sub(x));
        if visible > 0 {
            regions.push(ClickRegion::new(
                Rect::new(x, area.y, visible, 1),
                ClickTarget::FilterChip(filter),
            ));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_card(frame: &mut Frame, app: &PortfolioApp, project: &ProjectRecord, focused: bool, area: Rect) {
    let palette = app.palette();
    let border = if focused { palette.accent[1] } else { palette.border };
    let title_style = if focused {
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(project.tag.label(), Style::default().fg(palette.accent[0])),
            Span::styled(
                format!("  {}", app.assets().project(project.id).describe()),
                Style::default().fg(palette.muted),
            ),
        ]),
        Line::from(Span::styled(project.desc, Style::default().fg(palette.foreground))),
        Line::from(Span::styled(
            project.tech.join(" · "),
            Style::default().fg(palette.muted),
        )),
    ];
    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(format!(" {} ", project.title), title_style)),
    );
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Skills
// ----------------------------------------------------------------------

fn render_skills(frame: &mut Frame, app: &PortfolioApp, area: Rect) {
    let palette = app.palette();
    let columns = usize::from(grid_columns(area.width));
    let cell_width = area.width / columns as u16;
    let scroll = app.skills_scroll();
    let elapsed = app.reveal().elapsed(app.now());

    let rows = SKILLS.len().div_ceil(columns);
    for row in drawn_rows(rows, scroll, area.height) {
        let y = area.y + (row as u16 * CELL_HEIGHT - scroll);
        for (col, skill) in SKILLS.iter().skip(row * columns).take(columns).enumerate() {
            let cell = Rect::new(area.x + col as u16 * cell_width, y, cell_width, CELL_HEIGHT);
            let fraction = arc_fraction(skill.level, elapsed);
            render_skill_cell(frame, &palette, skill, fraction, elapsed.is_some(), cell);
        }
    }
}

fn render_skill_cell(
    frame: &mut Frame,
    palette: &Palette,
    skill: &SkillRecord,
    fraction: f64,
    revealed: bool,
    area: Rect,
) {
    let (title_style, label_style) = if revealed {
        (
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(palette.accent[1])
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(palette.muted),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM),
        )
    };

    // Braille dots are square, so stretch x to keep the circle round.
    let inner = inset(area);
    let aspect = f64::from(inner.width.max(1)) * 2.0 / (f64::from(inner.height.max(1)) * 4.0);
    let x_bound = ARC_BOUND * aspect;
    let label = format!("{}%", skill.level);
    let label_x = -(label.len() as f64 / 2.0) * (2.0 * x_bound / f64::from(inner.width.max(1)));

    let track = arc_points(1.0, 1.0, ARC_STEPS);
    let filled = arc_points(fraction, 1.0, ARC_STEPS);
    let segment_len = filled.len().div_ceil(ARC_SEGMENTS).max(1);
    let track_color = palette.track;
    let palette = *palette;

    let canvas = Canvas::default()
        .block(bordered(&palette).title(Span::styled(skill.name, title_style)))
        .marker(Marker::Braille)
        .background_color(palette.background)
        .x_bounds([-x_bound, x_bound])
        .y_bounds([-ARC_BOUND, ARC_BOUND])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: track_color,
            });
            for (j, segment) in filled.chunks(segment_len).enumerate() {
                ctx.draw(&Points {
                    coords: segment,
                    color: palette.accent_at(j as f64 / ARC_SEGMENTS as f64),
                });
            }
            ctx.print(label_x, 0.0, Line::styled(label.clone(), label_style));
        });
    frame.render_widget(canvas, area);
}

// ----------------------------------------------------------------------
// Contact
// ----------------------------------------------------------------------

fn render_contact(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_contact_info(frame, &palette, columns[0], regions);
    render_contact_form(frame, app, columns[1], regions);
}

fn render_contact_info(frame: &mut Frame, palette: &Palette, area: Rect, regions: &mut Vec<ClickRegion>) {
    let block = bordered(palette).title(" Let's talk ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let link_rows = PROFILE.socials.len() as u16 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(link_rows)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(PROFILE.contact_pitch)
            .style(Style::default().fg(palette.foreground))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let links = chunks[1];
    let mut lines = vec![Line::from(vec![
        Span::styled("✉ ", Style::default().fg(palette.accent[0])),
        Span::styled(PROFILE.email, Style::default().fg(palette.foreground)),
    ])];
    let mut targets = vec![mailto(PROFILE.email)];
    for social in PROFILE.socials {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", social.network), Style::default().fg(palette.muted)),
            Span::styled(social.handle, Style::default().fg(palette.foreground)),
        ]));
        targets.push(social.url.to_string());
    }
    for (row, url) in targets.into_iter().enumerate() {
        let y = links.y + row as u16;
        if y >= links.bottom() {
            break;
        }
        regions.push(ClickRegion::new(
            Rect::new(links.x, y, links.width, 1),
            ClickTarget::Link(url),
        ));
    }
    frame.render_widget(Paragraph::new(lines), links);
}

fn render_contact_form(frame: &mut Frame, app: &PortfolioApp, area: Rect, regions: &mut Vec<ClickRegion>) {
    let palette = app.palette();
    let form = app.contact();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Send
            Constraint::Length(1), // Acknowledgment
        ])
        .split(area);

    for (field, field_area) in ContactField::ALL.into_iter().zip(chunks.iter()) {
        let focused = form.focus() == field;
        let editing = focused && form.is_editing();
        let value = form.value(field);
        let text = if value.is_empty() && !editing {
            Paragraph::new(field.placeholder()).style(Style::default().fg(palette.muted))
        } else {
            let mut shown = value.to_string();
            if editing {
                shown.push('▏');
            }
            Paragraph::new(shown).style(Style::default().fg(palette.foreground))
        };
        let border = match (editing, focused) {
            (true, _) => palette.accent[0],
            (false, true) => palette.accent[1],
            _ => palette.border,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field.label()));
        frame.render_widget(text.wrap(Wrap { trim: false }).block(block), *field_area);
        regions.push(ClickRegion::new(*field_area, ClickTarget::ContactField(field)));
    }

    let send_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(chunks[3]);
    render_button(frame, &palette, " Send Message ", send_row[0], true);
    regions.push(ClickRegion::new(send_row[0], ClickTarget::ContactSend));

    if let Some(ack) = form.acknowledgment() {
        frame.render_widget(
            Paragraph::new(ack.to_string()).style(
                Style::default()
                    .fg(palette.accent[0])
                    .add_modifier(Modifier::BOLD),
            ),
            chunks[4],
        );
    }
}

// ----------------------------------------------------------------------
// Detail overlay
// ----------------------------------------------------------------------

fn render_overlay(
    frame: &mut Frame,
    app: &PortfolioApp,
    project: &ProjectRecord,
    area: Rect,
    regions: &mut Vec<ClickRegion>,
) {
    let palette = app.palette();
    let modal = centered_rect(70, 80, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent[1]))
        .style(Style::default().bg(palette.overlay).fg(palette.foreground))
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    regions.push(ClickRegion::new(modal, ClickTarget::OverlayContent));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.tag.label(), Style::default().fg(palette.accent[0])),
            Span::styled(
                format!("  screenshot {}", app.assets().project(project.id).describe()),
                Style::default().fg(palette.muted),
            ),
        ]),
        Line::from(""),
        Line::from(project.desc),
        Line::from(""),
        Line::from(Span::styled(
            "Tech",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(bullet_lines(project.tech, &palette));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let links = chunks[1];
    let mut spans = Vec::new();
    let mut x = links.x;
    for link in [ProjectLink::Live, ProjectLink::Repo] {
        let label = format!("[ {} ]", link.label());
        let width = text_width(&label);
        let visible = width.min(links.right().saturating_sub(x));
        if visible > 0 {
            regions.push(ClickRegion::new(
                Rect::new(x, links.y, visible, 1),
                ClickTarget::OverlayLink(link),
            ));
        }
        spans.push(Span::styled(
            label,
            Style::default()
                .fg(palette.accent[1])
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        x = x.saturating_add(width + 2);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), links);

    if modal.width >= 6 {
        let close = Rect::new(modal.right() - 4, modal.y, 3, 1);
        frame.render_widget(
            Paragraph::new(" ⓧ ").style(Style::default().fg(palette.accent[2])),
            close,
        );
        regions.push(ClickRegion::new(close, ClickTarget::OverlayClose));
    }
}

/// Create a centered rectangle of given percentage width/height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetLibrary;
    use crate::catalog::PROJECTS;
    use crate::storage::MemoryStore;
    use crate::theme::{Theme, ThemeController};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::Path;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn app() -> PortfolioApp {
        let theme = ThemeController::load(Box::new(MemoryStore::new()));
        let assets = AssetLibrary::scan(Path::new("/nonexistent/folio-assets"), &PROFILE, PROJECTS);
        PortfolioApp::new(theme, assets)
    }

    fn draw_app(app: &mut PortfolioApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(WIDTH))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn region_of(app: &PortfolioApp, target: &ClickTarget) -> Rect {
        app.click_regions()
            .iter()
            .find(|r| &r.target == target)
            .map(|r| r.area)
            .unwrap_or_else(|| panic!("no click region for {target:?}"))
    }

    fn click(app: &mut PortfolioApp, target: &ClickTarget) {
        let area = region_of(app, target);
        app.handle_click(area.x + area.width / 2, area.y + area.height / 2);
    }

    #[test]
    fn test_home_shows_profile_and_tabs() {
        let mut app = app();
        let text = draw_app(&mut app);
        assert!(text.contains("Adekunle"));
        assert!(text.contains("Projects"));
        assert!(text.contains("Hey, I'm"));
        assert!(text.contains("View Work"));
        assert!(text.contains("Hire Me"));
        assert!(text.contains("[image missing]"));
    }

    #[test]
    fn test_footer_shows_copyright_year() {
        let mut app = app();
        let text = draw_app(&mut app);
        let year = chrono::Local::now().year().to_string();
        assert!(text.contains(&format!("© {year} Adekunle")));
    }

    #[test]
    fn test_every_tab_is_clickable() {
        let mut app = app();
        for section in Section::all() {
            draw_app(&mut app);
            click(&mut app, &ClickTarget::Tab(*section));
            assert_eq!(app.section(), *section);
        }
    }

    #[test]
    fn test_tab_regions_cover_titles() {
        let regions = tab_regions(Rect::new(0, 0, 80, 3));
        assert_eq!(regions.len(), 5);
        // " Home " starts right after the border.
        assert_eq!(regions[0].area, Rect::new(1, 1, 6, 1));
        // Then a divider, then " About ".
        assert_eq!(regions[1].area.x, 8);
    }

    #[test]
    fn test_theme_toggle_click_switches_glyph() {
        let mut app = app();
        let text = draw_app(&mut app);
        assert!(text.contains("☾"));

        click(&mut app, &ClickTarget::ThemeToggle);
        assert_eq!(app.theme(), Theme::Light);
        let text = draw_app(&mut app);
        assert!(text.contains("☀"));
    }

    #[test]
    fn test_projects_show_all_cards() {
        let mut app = app();
        app.set_section(Section::Projects);
        let text = draw_app(&mut app);
        for project in PROJECTS {
            assert!(text.contains(project.title), "{}", project.title);
        }
        assert!(text.contains("Fullstack"));
    }

    #[test]
    fn test_frontend_chip_hides_fullstack_card() {
        let mut app = app();
        app.set_section(Section::Projects);
        draw_app(&mut app);
        click(&mut app, &ClickTarget::FilterChip(Filter::Frontend));
        assert_eq!(app.filter(), Filter::Frontend);

        let text = draw_app(&mut app);
        assert!(!text.contains("AI Resume Analyzer"));
        assert!(text.contains("Fanrong Website"));
        assert!(text.contains("E-commerce Website"));
    }

    #[test]
    fn test_backend_chip_shows_empty_message() {
        let mut app = app();
        app.set_section(Section::Projects);
        app.set_filter(Filter::Backend);
        let text = draw_app(&mut app);
        assert!(text.contains("No projects in this category yet."));
    }

    #[test]
    fn test_open_project_two_then_close_keeps_filter() {
        let mut app = app();
        app.set_section(Section::Projects);
        draw_app(&mut app);
        click(&mut app, &ClickTarget::FilterChip(Filter::Frontend));
        draw_app(&mut app);

        click(&mut app, &ClickTarget::Card(2));
        let text = draw_app(&mut app);
        assert_eq!(app.overlay().selected().map(|p| p.title), Some("Fanrong Website"));
        assert!(text.contains("Tech"));
        assert!(text.contains("[ Live ]"));

        // The footer row is outside the overlay.
        app.handle_click(0, HEIGHT - 1);
        assert!(!app.overlay().is_open());
        assert_eq!(app.filter(), Filter::Frontend);

        let text = draw_app(&mut app);
        assert!(text.contains("Fanrong Website"));
        assert!(!text.contains("AI Resume Analyzer"));

        click(&mut app, &ClickTarget::Card(2));
        draw_app(&mut app);
        click(&mut app, &ClickTarget::OverlayClose);
        assert!(!app.overlay().is_open());
        assert_eq!(app.filter(), Filter::Frontend);
    }

    #[test]
    fn test_overlay_close_control_and_content_clicks() {
        let mut app = app();
        app.set_section(Section::Projects);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        draw_app(&mut app);

        let content = region_of(&app, &ClickTarget::OverlayContent);
        app.handle_click(content.x + 2, content.y + 3);
        assert!(app.overlay().is_open());

        click(&mut app, &ClickTarget::OverlayLink(ProjectLink::Live));
        assert_eq!(app.take_pending_links(), vec![PROJECTS[0].live.to_string()]);

        click(&mut app, &ClickTarget::OverlayClose);
        assert!(!app.overlay().is_open());
    }

    #[test]
    fn test_skills_reveal_on_first_view() {
        let mut app = app();
        draw_app(&mut app);
        assert!(!app.reveal().is_revealed());

        app.set_section(Section::Skills);
        let text = draw_app(&mut app);
        assert!(app.reveal().is_revealed());
        assert!(text.contains("React"));
        assert!(text.contains("95%"));
    }

    #[test]
    fn test_short_terminal_keeps_reveal_for_later() {
        let mut app = app();
        app.set_section(Section::Skills);

        // 13 rows leave 9 for content, less than one skill cell.
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, 13)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        assert!(!app.reveal().is_revealed());

        let text = draw_app(&mut app);
        assert!(app.reveal().is_revealed());
        assert!(text.contains("95%"));
    }

    #[test]
    fn test_header_hire_me_opens_contact() {
        let mut app = app();
        draw_app(&mut app);
        let hire: Vec<Rect> = app
            .click_regions()
            .iter()
            .filter(|r| r.target == ClickTarget::HireMe)
            .map(|r| r.area)
            .collect();
        // Header and hero.
        assert_eq!(hire.len(), 2);
        assert_eq!(hire[0].y, 0);

        app.handle_click(hire[0].x + 2, hire[0].y + 1);
        assert_eq!(app.section(), Section::Contact);
    }

    #[test]
    fn test_contact_send_shows_acknowledgment() {
        let mut app = app();
        app.set_section(Section::Contact);
        let text = draw_app(&mut app);
        assert!(text.contains("you@example.com"));
        assert!(text.contains("adekunletayo824@gmail.com"));

        click(&mut app, &ClickTarget::ContactSend);
        let text = draw_app(&mut app);
        assert!(text.contains("Thanks! I will get back to you."));
    }

    #[test]
    fn test_contact_links_are_clickable() {
        let mut app = app();
        app.set_section(Section::Contact);
        draw_app(&mut app);

        click(&mut app, &ClickTarget::Link(mailto(PROFILE.email)));
        click(&mut app, &ClickTarget::Link("https://github.com/hadeexo".to_string()));
        assert_eq!(
            app.take_pending_links(),
            vec![
                "mailto:adekunletayo824@gmail.com".to_string(),
                "https://github.com/hadeexo".to_string()
            ]
        );
    }

    #[test]
    fn test_about_renders_values_and_facts() {
        let mut app = app();
        app.set_section(Section::About);
        let text = draw_app(&mut app);
        assert!(text.contains("About me"));
        assert!(text.contains("Quick facts"));
        assert!(text.contains("Lagos, Nigeria"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = app();
        for section in Section::all() {
            app.set_section(*section);
            let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
            terminal.draw(|frame| render(frame, &mut app)).unwrap();
        }
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 3, 100, 26);
        let rect = centered_rect(70, 80, area);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }
}
