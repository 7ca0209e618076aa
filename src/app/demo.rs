//! Demo: The interactive terminal page.
//!
//! Two text fields feed the root's state cells; the two cards show the
//! current views with a badge telling whether this keystroke rendered them.
//! [`DemoApp`] holds no terminal handle, so it can be driven with synthetic
//! events and painted into an off-screen buffer.

use super::root::{Frame, Root};
use super::session::Field;
use super::variant::Variant;
use crate::actor::{Engine, InputEvent, KeyCode};
use crate::buffer::{Buffer, Rgb, Style};
use crate::error::{Result, TerminalSnafu};
use crate::layout::{Rect, ScreenLayout};
use crate::widget::{Card, InputOutcome, StatusBar, TextInput, Widget};
use snafu::ResultExt;

const HELP: &str = "Tab/↑/↓ switch field · type to edit · Esc quit";

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the main loop.
    Quit,
}

/// The demo page: root, inputs, cards and status bar.
#[derive(Debug)]
pub struct DemoApp {
    root: Root,
    name_input: TextInput,
    surname_input: TextInput,
    name_card: Card,
    surname_card: Card,
    status: StatusBar,
    focus: Field,
    layout: ScreenLayout,
    help_dirty: bool,
}

impl DemoApp {
    /// Mount the page for a terminal of `area`.
    pub fn new(variant: Variant, area: Rect) -> Self {
        let layout = ScreenLayout::compute(area);
        let mut app = Self {
            root: Root::new(variant),
            name_input: TextInput::new("Name", layout.name_input),
            surname_input: TextInput::new("Surname", layout.surname_input),
            name_card: Card::new("NameCard", layout.name_card),
            surname_card: Card::new("SurnameCard", layout.surname_card),
            status: StatusBar::new(layout.status),
            focus: Field::Name,
            layout,
            help_dirty: true,
        };
        app.name_input.set_focused(true);
        app.status.set_left(format!("memoscope · {variant}"));

        let frame = app.root.evaluate();
        app.show(&frame, None);
        tracing::info!(%variant, "demo mounted");
        app
    }

    /// The root being displayed.
    pub const fn root(&self) -> &Root {
        &self.root
    }

    /// The field with keyboard focus.
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// React to one input event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Control {
        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Esc => return Control::Quit,
                KeyCode::Char('c') if modifiers.control => return Control::Quit,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.toggle_focus();
                }
                _ => self.edit(event),
            },
            InputEvent::Paste(_) => self.edit(event),
            InputEvent::Resize { width, height } => self.resize(*width, *height),
            InputEvent::Error(message) => tracing::warn!(%message, "input error"),
            InputEvent::Shutdown => return Control::Quit,
        }
        Control::Continue
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Surname,
            Field::Surname => Field::Name,
        };
        self.name_input.set_focused(self.focus == Field::Name);
        self.surname_input.set_focused(self.focus == Field::Surname);
    }

    /// Forward an event to the focused field. A content change is a change
    /// event for that field's state cell.
    fn edit(&mut self, event: &InputEvent) {
        let field = self.focus;
        let input = match field {
            Field::Name => &mut self.name_input,
            Field::Surname => &mut self.surname_input,
        };
        if input.edit(event) != InputOutcome::Changed {
            return;
        }
        let value = input.content().to_string();
        let changed = match field {
            Field::Name => self.root.set_name(value),
            Field::Surname => self.root.set_surname(value),
        };
        if changed {
            let frame = self.root.evaluate();
            self.show(&frame, Some(field));
        }
    }

    fn show(&mut self, frame: &Frame, edited: Option<Field>) {
        let stats = frame.stats;
        self.name_card
            .update(&frame.name, frame.name_outcome, stats.name_renders);
        self.surname_card
            .update(&frame.surname, frame.surname_outcome, stats.surname_renders);

        self.status.set_center(
            edited.map_or_else(|| String::from("mounted"), |field| format!("{field} edit")),
        );
        self.status.set_right(format!(
            "root {} · name {} · surname {}",
            stats.root_evaluations, stats.name_renders, stats.surname_renders
        ));
    }

    /// Re-layout for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::compute(Rect::from_size(width, height));
        self.status.set_bounds(self.layout.status);
        self.name_input.set_bounds(self.layout.name_input);
        self.surname_input.set_bounds(self.layout.surname_input);
        self.name_card.set_bounds(self.layout.name_card);
        self.surname_card.set_bounds(self.layout.surname_card);
        self.help_dirty = true;
    }

    fn widgets(&self) -> [&dyn Widget; 5] {
        [
            &self.status,
            &self.name_input,
            &self.surname_input,
            &self.name_card,
            &self.surname_card,
        ]
    }

    /// Whether anything changed since the last paint.
    pub fn needs_paint(&self) -> bool {
        self.help_dirty || self.widgets().iter().any(|w| w.needs_redraw())
    }

    /// Paint the whole page into `buffer`.
    pub fn paint(&mut self, buffer: &mut Buffer) {
        buffer.clear();
        for widget in self.widgets() {
            widget.render(buffer);
        }
        let help = self.layout.help;
        if !help.is_empty() {
            let style = Style::new(Rgb::new(110, 110, 110), Rgb::BLACK);
            buffer.draw_text(help.x + 1, help.y, HELP, help.width.saturating_sub(1), style);
        }

        self.status.clear_redraw();
        self.name_input.clear_redraw();
        self.surname_input.clear_redraw();
        self.name_card.clear_redraw();
        self.surname_card.clear_redraw();
        self.help_dirty = false;
    }
}

/// Run the interactive demo until the user quits.
pub fn run(variant: Variant) -> Result<()> {
    let mut engine = Engine::new().context(TerminalSnafu)?;
    let (width, height) = (engine.width().max(1), engine.height().max(1));
    let mut buffer = Buffer::new(width, height);
    let mut app = DemoApp::new(variant, buffer.area());

    loop {
        if app.needs_paint() {
            app.paint(&mut buffer);
            engine.present(&buffer).context(TerminalSnafu)?;
        }

        let Ok(event) = engine.next_event() else {
            tracing::warn!("input channel closed");
            break;
        };
        if let InputEvent::Resize { width, height } = event {
            engine.handle_resize(width, height);
            buffer.resize(width.max(1), height.max(1));
        }
        if app.handle_event(&event) == Control::Quit {
            break;
        }
    }

    let stats = app.root().stats();
    tracing::info!(
        root_evaluations = stats.root_evaluations,
        name_renders = stats.name_renders,
        surname_renders = stats.surname_renders,
        "demo finished"
    );
    Ok(())
}
