//! Stone details modal
//!
//! Shows one stone: image reference, name, tier and enhancement badges,
//! truncated uid and a table of status bonuses. Opened by the inventory
//! screen with `show`, closed by `hide` or by any bound dismiss trigger.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use tracing::{debug, info};

use crate::{
    config::ModalConfig,
    pedra::{enhancement_label, tier_label, uid_label, StatusEntry, StoneDisplayRequest},
    ui::theme::Theme,
};

use super::{centered_rect, rect_contains, DismissTrigger, Modal, ModalResult};

const CLOSE_BUTTON_LABEL: &str = "[x]";
const HEADER_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;

/// Whether the modal is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// Dismiss triggers wired when the modal is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissBindings {
    pub backdrop: bool,
    pub escape: bool,
    pub close_button: bool,
    pub action_button: bool,
}

impl DismissBindings {
    pub fn from_config(config: &ModalConfig) -> Self {
        Self {
            backdrop: config.dismiss_on_backdrop_click,
            escape: config.dismiss_on_escape,
            close_button: config.show_close_button,
            action_button: config.show_action_button,
        }
    }

    pub fn is_bound(&self, trigger: DismissTrigger) -> bool {
        match trigger {
            DismissTrigger::Backdrop => self.backdrop,
            DismissTrigger::Escape => self.escape,
            DismissTrigger::CloseButton => self.close_button,
            DismissTrigger::ActionButton => self.action_button,
        }
    }
}

impl Default for DismissBindings {
    fn default() -> Self {
        Self::from_config(&ModalConfig::default())
    }
}

/// Display state derived from the last show request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneDetailsView {
    pub image_url: String,
    pub name: String,
    pub uid_text: String,
    pub tier_text: String,
    /// `None` hides the enhancement badge
    pub enhancement_text: Option<String>,
    pub status_rows: Vec<StatusEntry>,
}

impl StoneDetailsView {
    /// Build the view, consuming the request
    pub fn from_request(request: StoneDisplayRequest) -> Self {
        let StoneDisplayRequest {
            uid,
            name,
            image_url,
            status_list,
        } = request;

        Self {
            uid_text: uid_label(&uid),
            tier_text: tier_label(&name),
            enhancement_text: enhancement_label(&name),
            status_rows: status_list.unwrap_or_default(),
            image_url,
            name,
        }
    }

    /// The status table is shown only when there is at least one row
    pub fn shows_status_table(&self) -> bool {
        !self.status_rows.is_empty()
    }

    /// The "no status" placeholder replaces an empty table
    pub fn shows_placeholder(&self) -> bool {
        self.status_rows.is_empty()
    }
}

/// Screen regions laid out in the last frame
///
/// Buttons are `None` when disabled or when the popup is too small to hold
/// them; a click can only hit a button that was laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRegions {
    pub container: Rect,
    pub header: Rect,
    pub body: Rect,
    pub close_button: Option<Rect>,
    pub action_button: Option<Rect>,
}

/// Stone details modal controller
pub struct StoneDetailsModal {
    visibility: ModalVisibility,
    view: Option<StoneDetailsView>,
    bindings: DismissBindings,
    regions: Option<ModalRegions>,
    width_percent: u16,
    height_percent: u16,
    action_label: String,
    empty_status_text: String,
}

impl StoneDetailsModal {
    pub fn new(config: &ModalConfig) -> Self {
        let bindings = DismissBindings::from_config(config);
        debug!("Stone details modal created with bindings {:?}", bindings);

        Self {
            visibility: ModalVisibility::Closed,
            view: None,
            bindings,
            regions: None,
            width_percent: config.width_percent.clamp(20, 100),
            height_percent: config.height_percent.clamp(20, 100),
            action_label: config.action_label.clone(),
            empty_status_text: config.empty_status_text.clone(),
        }
    }

    /// Populate the modal from `request` and open it
    ///
    /// Replaces everything shown by a previous call; showing an open modal
    /// just re-populates it.
    pub fn show(&mut self, request: StoneDisplayRequest) {
        let view = StoneDetailsView::from_request(request);
        info!(
            "Showing stone details: {} ({}, {} status rows)",
            view.name,
            view.tier_text,
            view.status_rows.len()
        );

        self.view = Some(view);
        self.visibility = ModalVisibility::Open;
    }

    /// Close the modal; returns whether it was open
    pub fn hide(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("Hiding stone details modal");
        }
        self.visibility = ModalVisibility::Closed;
        was_open
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    /// Content from the most recent `show`, kept while closed
    pub fn view(&self) -> Option<&StoneDetailsView> {
        self.view.as_ref()
    }

    pub fn bindings(&self) -> DismissBindings {
        self.bindings
    }

    /// Regions from the last layout, `None` before the first frame
    pub fn regions(&self) -> Option<&ModalRegions> {
        self.regions.as_ref()
    }

    /// Compute and remember the popup regions for a screen of size `area`
    pub fn layout(&mut self, area: Rect) -> ModalRegions {
        let container = centered_rect(self.width_percent, self.height_percent, area);
        let inner = Block::default().borders(Borders::ALL).inner(container);

        let close_width = CLOSE_BUTTON_LABEL.len() as u16;
        let close_button = (self.bindings.close_button && container.width >= close_width + 4)
            .then(|| {
                Rect::new(
                    container.right() - close_width - 2,
                    container.y,
                    close_width,
                    1,
                )
            });

        let footer_height = if self.bindings.action_button {
            BUTTON_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(footer_height),
            ])
            .split(inner);

        let footer = chunks[2];
        let action_button = (self.bindings.action_button && footer.height >= BUTTON_HEIGHT)
            .then(|| {
                let width = u16::try_from(self.action_label.chars().count())
                    .unwrap_or(u16::MAX)
                    .saturating_add(4)
                    .min(footer.width);
                Rect::new(
                    footer.x + (footer.width - width) / 2,
                    footer.y,
                    width,
                    BUTTON_HEIGHT,
                )
            });

        let regions = ModalRegions {
            container,
            header: chunks[0],
            body: chunks[1],
            close_button,
            action_button,
        };
        self.regions = Some(regions);
        regions
    }

    fn dismiss(&mut self, trigger: DismissTrigger) -> ModalResult {
        debug!("Stone details modal dismissed by {:?}", trigger);
        self.hide();
        ModalResult::Dismissed(trigger)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, view: &StoneDetailsView, theme: &Theme) {
        let mut badges = vec![Span::styled(
            format!(" {} ", view.tier_text),
            theme.tier_badge_style(),
        )];
        if let Some(enhancement) = &view.enhancement_text {
            badges.push(Span::raw(" "));
            badges.push(Span::styled(
                format!(" {} ", enhancement),
                theme.enhancement_badge_style(),
            ));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("Image: ", theme.muted_style()),
                Span::styled(view.image_url.as_str(), theme.text_style()),
            ]),
            Line::from(Span::styled(view.name.as_str(), theme.title_style())),
            Line::from(badges),
            Line::from(Span::styled(view.uid_text.as_str(), theme.muted_style())),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, view: &StoneDetailsView, theme: &Theme) {
        if view.shows_status_table() {
            let rows = view.status_rows.iter().map(|entry| {
                Row::new(vec![
                    Cell::from(entry.name.as_str()).style(theme.text_style()),
                    Cell::from(entry.value.as_str()).style(theme.status_value_style()),
                ])
            });

            let table = Table::new(
                rows,
                [Constraint::Percentage(60), Constraint::Percentage(40)],
            )
            .header(Row::new(vec!["Status", "Value"]).style(theme.table_header_style()))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(theme.border_style()),
            );
            frame.render_widget(table, area);
        } else {
            let placeholder = Paragraph::new(self.empty_status_text.as_str())
                .style(theme.muted_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::TOP)
                        .border_style(theme.border_style()),
                );
            frame.render_widget(placeholder, area);
        }
    }
}

impl Default for StoneDetailsModal {
    fn default() -> Self {
        Self::new(&ModalConfig::default())
    }
}

impl Modal for StoneDetailsModal {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let Some(view) = self.view.clone() else {
            return;
        };

        let regions = self.layout(area);

        // Dim the screen behind the popup
        frame.render_widget(Block::default().style(theme.backdrop_style()), area);
        frame.render_widget(Clear, regions.container);

        let container = Block::default()
            .borders(Borders::ALL)
            .title(" Stone Details ")
            .title_style(theme.title_style())
            .border_style(theme.focused_border_style());
        frame.render_widget(container, regions.container);

        if let Some(close) = regions.close_button {
            frame.render_widget(
                Paragraph::new(CLOSE_BUTTON_LABEL).style(theme.error_style()),
                close,
            );
        }

        self.render_header(frame, regions.header, &view, theme);
        self.render_body(frame, regions.body, &view, theme);

        if let Some(action) = regions.action_button {
            let button = Paragraph::new(self.action_label.as_str())
                .style(theme.button_style())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.focused_border_style()),
                );
            frame.render_widget(button, action);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> ModalResult {
        if !self.is_open() {
            return ModalResult::None;
        }

        match key.code {
            KeyCode::Esc if self.bindings.escape => self.dismiss(DismissTrigger::Escape),
            // No regions before the first frame; after it, only a laid-out button counts
            KeyCode::Enter
                if self.bindings.action_button
                    && self.regions.map_or(true, |r| r.action_button.is_some()) =>
            {
                self.dismiss(DismissTrigger::ActionButton)
            }
            _ => ModalResult::Handled,
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ModalResult {
        if !self.is_open() {
            return ModalResult::None;
        }
        // Scrolling and other buttons never reach the screen behind
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ModalResult::Handled;
        }
        let Some(regions) = self.regions else {
            return ModalResult::Handled;
        };

        let (column, row) = (mouse.column, mouse.row);
        let hit = |region: Option<Rect>| region.is_some_and(|r| rect_contains(r, column, row));

        if hit(regions.close_button) {
            self.dismiss(DismissTrigger::CloseButton)
        } else if hit(regions.action_button) {
            self.dismiss(DismissTrigger::ActionButton)
        } else if rect_contains(regions.container, column, row) {
            ModalResult::Handled
        } else if self.bindings.backdrop {
            self.dismiss(DismissTrigger::Backdrop)
        } else {
            ModalResult::Handled
        }
    }

    fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    fn close(&mut self) {
        self.hide();
    }
}
