//! Portfolio application state.
//!
//! `PortfolioApp` owns everything the screen shows: the theme controller,
//! the active section, the gallery filter and card cursor, the detail
//! overlay, the skills reveal latch and the contact form. Key presses and
//! mouse clicks mutate it synchronously; `ui::render` reads it every frame.

use super::sections::Section;
use crate::assets::AssetLibrary;
use crate::catalog::{ProjectRecord, PROJECTS, SKILLS};
use crate::contact::{AcknowledgeOnly, ContactField, ContactForm, ContactSink};
use crate::filter::{filter_projects, Filter};
use crate::overlay::{CloseReason, DetailOverlay, ProjectLink};
use crate::skills::{drawn_rows, grid_extent, visible_ratio, RevealLatch, CELL_HEIGHT};
use crate::theme::{Palette, Theme, ThemeController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::time::Instant;

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Tab(Section),
    ThemeToggle,
    /// "View Work" on the home screen.
    HeroWork,
    /// "Hire Me", in the header and on the home screen.
    HireMe,
    FilterChip(Filter),
    /// A gallery card, by project id.
    Card(u32),
    ContactField(ContactField),
    ContactSend,
    /// A plain outbound link (socials, email).
    Link(String),
    OverlayClose,
    /// The overlay body. Clicks here must not reach the backdrop.
    OverlayContent,
    OverlayLink(ProjectLink),
}

/// A clickable screen area, recorded while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

impl ClickRegion {
    pub fn new(area: Rect, target: ClickTarget) -> Self {
        Self { area, target }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.x <= x
            && x < self.area.x + self.area.width
            && self.area.y <= y
            && y < self.area.y + self.area.height
    }
}

pub struct PortfolioApp {
    theme: ThemeController,
    section: Section,
    filter: Filter,
    /// Cursor into the filtered gallery.
    card_index: usize,
    overlay: DetailOverlay,
    reveal: RevealLatch,
    skills_scroll: u16,
    skills_max_scroll: u16,
    contact: ContactForm,
    sink: Box<dyn ContactSink>,
    assets: AssetLibrary,
    click_regions: Vec<ClickRegion>,
    pending_links: Vec<String>,
    now: Instant,
    should_quit: bool,
}

impl PortfolioApp {
    pub fn new(theme: ThemeController, assets: AssetLibrary) -> Self {
        Self {
            theme,
            section: Section::default(),
            filter: Filter::default(),
            card_index: 0,
            overlay: DetailOverlay::new(),
            reveal: RevealLatch::new(),
            skills_scroll: 0,
            skills_max_scroll: 0,
            contact: ContactForm::new(),
            sink: Box::new(AcknowledgeOnly),
            assets,
            click_regions: Vec::new(),
            pending_links: Vec::new(),
            now: Instant::now(),
            should_quit: false,
        }
    }

    /// Replace the contact sink.
    pub fn with_sink(mut self, sink: Box<dyn ContactSink>) -> Self {
        self.sink = sink;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn reveal(&self) -> &RevealLatch {
        &self.reveal
    }

    pub fn skills_scroll(&self) -> u16 {
        self.skills_scroll
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }

    /// Projects shown under the current filter.
    pub fn visible_projects(&self) -> Vec<&'static ProjectRecord> {
        filter_projects(PROJECTS, self.filter)
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Advance the clock used for animation.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    /// Called by the renderer with the content area before drawing.
    ///
    /// Updates the skills scroll bounds and feeds the reveal latch with how
    /// much of the skills grid is on screen. A frame with no whole skill cell
    /// on screen counts as nothing visible.
    pub fn prepare_frame(&mut self, content: Rect) {
        let extent = grid_extent(content, SKILLS.len());
        self.skills_max_scroll = extent.height.saturating_sub(content.height);
        self.skills_scroll = self.skills_scroll.min(self.skills_max_scroll);

        let rows = usize::from(extent.height / CELL_HEIGHT);
        let any_drawn = !drawn_rows(rows, self.skills_scroll, content.height).is_empty();
        let ratio = if self.section == Section::Skills && !self.overlay.is_open() && any_drawn {
            let viewport = Rect::new(
                content.x,
                content.y.saturating_add(self.skills_scroll),
                content.width,
                content.height,
            );
            visible_ratio(extent, viewport)
        } else {
            0.0
        };
        self.reveal.observe(ratio, self.now);
    }

    pub fn set_click_regions(&mut self, regions: Vec<ClickRegion>) {
        self.click_regions = regions;
    }

    /// Links the user asked to open since the last call.
    pub fn take_pending_links(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_links)
    }

    // ------------------------------------------------------------------
    // State changes
    // ------------------------------------------------------------------

    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            tracing::debug!(section = section.name(), "section changed");
        }
        self.section = section;
        self.contact.end_edit();
    }

    /// Change the gallery filter. The selection is left alone and the card
    /// cursor is clamped to the new list.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            tracing::debug!(filter = %filter, "filter changed");
        }
        self.filter = filter;
        let len = self.visible_projects().len();
        self.card_index = self.card_index.min(len.saturating_sub(1));
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Open the overlay on the project under the card cursor.
    pub fn open_focused_project(&mut self) {
        if let Some(project) = self.visible_projects().get(self.card_index).copied() {
            self.overlay.open(project);
        }
    }

    fn open_project(&mut self, id: u32) {
        let visible = self.visible_projects();
        if let Some(pos) = visible.iter().position(|p| p.id == id) {
            self.card_index = pos;
            self.overlay.open(visible[pos]);
        }
    }

    fn queue_link(&mut self, url: impl Into<String>) {
        let url = url.into();
        tracing::debug!(url = %url, "link requested");
        self.pending_links.push(url);
    }

    fn queue_project_link(&mut self, link: ProjectLink) {
        if let Some(project) = self.overlay.selected() {
            self.queue_link(link.url(project));
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.contact.acknowledgment().is_some() {
            self.contact.dismiss_acknowledgment();
            return;
        }

        if self.overlay.is_open() {
            self.handle_overlay_key(key.code);
            return;
        }

        if self.contact.is_editing() {
            self.handle_edit_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Tab => self.set_section(self.section.next()),
            KeyCode::BackTab => self.set_section(self.section.prev()),
            KeyCode::Char(c) if Section::from_digit(c).is_some() => {
                if let Some(section) = Section::from_digit(c) {
                    self.set_section(section);
                }
            }
            code => match self.section {
                Section::Home => self.handle_home_key(code),
                Section::Projects => self.handle_projects_key(code),
                Section::Skills => self.handle_skills_key(code),
                Section::Contact => self.handle_contact_key(code),
                Section::About => {}
            },
        }
    }

    fn handle_overlay_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('q') => {
                self.overlay.close(CloseReason::Control);
            }
            KeyCode::Char('o') => self.queue_project_link(ProjectLink::Live),
            KeyCode::Char('r') => self.queue_project_link(ProjectLink::Repo),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.contact.end_edit(),
            KeyCode::Tab => self.contact.focus_next(),
            KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Enter => self.contact.enter(),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) => self.contact.insert_char(c),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') => self.set_section(Section::Projects),
            KeyCode::Char('c') => self.set_section(Section::Contact),
            _ => {}
        }
    }

    fn handle_projects_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(self.filter.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_filter(self.filter.next()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.card_index = self.card_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.visible_projects().len().saturating_sub(1);
                if self.card_index < max {
                    self.card_index += 1;
                }
            }
            KeyCode::Enter => self.open_focused_project(),
            _ => {}
        }
    }

    fn handle_skills_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.skills_scroll = self.skills_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.skills_scroll = (self.skills_scroll + 1).min(self.skills_max_scroll);
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.contact.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.contact.focus_next(),
            KeyCode::Enter | KeyCode::Char('i') => self.contact.begin_edit(),
            KeyCode::Char('s') => self.contact.submit(&mut *self.sink),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    fn find_click_region(&self, x: u16, y: u16) -> Option<&ClickRegion> {
        // Later regions are drawn on top.
        self.click_regions.iter().rev().find(|r| r.contains(x, y))
    }

    /// Handle a left click at a screen cell.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        let target = self.find_click_region(x, y).map(|r| r.target.clone());

        if self.overlay.is_open() {
            match target {
                Some(ClickTarget::OverlayClose) => {
                    self.overlay.close(CloseReason::Control);
                }
                Some(ClickTarget::OverlayContent) => {}
                Some(ClickTarget::OverlayLink(link)) => self.queue_project_link(link),
                _ => {
                    self.overlay.close(CloseReason::Backdrop);
                }
            }
            return;
        }

        if self.contact.acknowledgment().is_some() {
            self.contact.dismiss_acknowledgment();
        }
        let Some(target) = target else {
            return;
        };
        match target {
            ClickTarget::Tab(section) => self.set_section(section),
            ClickTarget::ThemeToggle => self.toggle_theme(),
            ClickTarget::HeroWork => self.set_section(Section::Projects),
            ClickTarget::HireMe => self.set_section(Section::Contact),
            ClickTarget::FilterChip(filter) => self.set_filter(filter),
            ClickTarget::Card(id) => self.open_project(id),
            ClickTarget::ContactField(field) => {
                self.contact.focus_field(field);
                self.contact.begin_edit();
            }
            ClickTarget::ContactSend => self.contact.submit(&mut *self.sink),
            ClickTarget::Link(url) => self.queue_link(url),
            ClickTarget::OverlayClose
            | ClickTarget::OverlayContent
            | ClickTarget::OverlayLink(_) => {}
        }
    }
}
