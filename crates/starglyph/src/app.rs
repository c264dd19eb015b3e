//! Application state, input handling and the frame loop.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Clear,
};
use starglyph_config::Config;
use starglyph_core::{ColorPreset, Settings, TextPreset};
use starglyph_field::{Field, FieldEvent, TerminalCanvas, Viewport};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Live control values.
    settings: Settings,
    /// The particle field.
    field: Field,
    /// Last color picked from the presets.
    color_preset: ColorPreset,
    /// Last text picked from the presets.
    text_preset: TextPreset,
    /// Logical size of one terminal cell.
    cell_width: f32,
    cell_height: f32,
    /// Time between frames.
    frame_interval: Duration,
    /// Show the key help bar.
    show_help: bool,
    /// Terminal area the field was last sized for.
    area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// The field stays empty until the first frame reports the terminal size.
    pub fn new(config: &Config, settings: Settings) -> Self {
        let viewport = Viewport::new(0.0, 0.0);
        let field = match config.seed {
            Some(seed) => Field::with_seed(viewport, config.particle_count, seed),
            None => Field::new(viewport, config.particle_count),
        };
        Self {
            running: false,
            color_preset: ColorPreset::from_color(settings.color).unwrap_or_default(),
            text_preset: TextPreset::from_text(&settings.text).unwrap_or_default(),
            settings,
            field,
            cell_width: config.cell_width.max(1.0),
            cell_height: config.cell_height.max(1.0),
            frame_interval: config.frame_interval(),
            show_help: config.show_help,
            area: Rect::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_frame = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            next_frame += self.frame_interval;
            self.handle_crossterm_events(next_frame)?;
            // Drop frames instead of racing to catch up after a stall.
            next_frame = next_frame.max(Instant::now());
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.area {
            self.on_resize(area);
        }

        let mut canvas =
            TerminalCanvas::new(frame.buffer_mut(), area, self.cell_width, self.cell_height);
        self.field.animate(&mut canvas, &self.settings);

        if self.show_help && area.height > 0 {
            let row = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            frame.render_widget(Clear, row);
            frame.render_widget(self.help_line(), row);
        }
    }

    /// Key help, drawn in the current particle color.
    fn help_line(&self) -> Line<'static> {
        let color = self.settings.color;
        let dim = Style::new().dark_gray();
        Line::from(vec![
            "q".bold().fg(color),
            Span::styled(" quit  ", dim),
            "↑/↓".bold().fg(color),
            Span::styled(format!(" velocity {:.1}  ", self.settings.velocity), dim),
            "c".bold().fg(color),
            Span::styled(" color  ", dim),
            "t".bold().fg(color),
            Span::styled(format!(" text {}  ", self.settings.text), dim),
            "click".bold().fg(color),
            Span::styled(" burst  ", dim),
            "h".bold().fg(color),
            Span::styled(" hide help", dim),
        ])
        .centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls until `deadline`, the start of the next frame.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.on_resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=')) => {
                self.apply(FieldEvent::Velocity(self.settings.faster()))
            }
            (_, KeyCode::Down | KeyCode::Char('-')) => {
                self.apply(FieldEvent::Velocity(self.settings.slower()))
            }
            (_, KeyCode::Char('c')) => self.pick_color(self.color_preset.next()),
            (_, KeyCode::Char('C')) => self.pick_color(self.color_preset.prev()),
            (_, KeyCode::Char('t')) => self.pick_text(self.text_preset.next()),
            (_, KeyCode::Char('T')) => self.pick_text(self.text_preset.prev()),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Spawns a burst where the left mouse button goes down.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let (x, y) = TerminalCanvas::cell_center(
                self.area,
                self.cell_width,
                self.cell_height,
                mouse.column,
                mouse.row,
            );
            self.apply(FieldEvent::Click { x, y });
        }
    }

    /// Resize the field to cover `area` and respawn its particles.
    fn on_resize(&mut self, area: Rect) {
        self.area = area;
        let viewport = TerminalCanvas::viewport_for(area, self.cell_width, self.cell_height);
        self.apply(FieldEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    fn pick_color(&mut self, preset: ColorPreset) {
        self.color_preset = preset;
        log::info!("color -> {}", preset.hex());
        self.apply(FieldEvent::Color(preset.color()));
    }

    fn pick_text(&mut self, preset: TextPreset) {
        self.text_preset = preset;
        log::info!("text -> {}", preset.text());
        self.apply(FieldEvent::Text(preset.text().to_string()));
    }

    fn apply(&mut self, event: FieldEvent) {
        if let FieldEvent::Velocity(velocity) = event {
            log::info!("velocity -> {velocity:.1}");
        }
        if let Err(err) = self.field.handle(&mut self.settings, event) {
            log::warn!("ignored control change: {err}");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::{Terminal, backend::TestBackend};
    use starglyph_field::EXPLOSION_PARTICLE_COUNT;

    fn test_app(count: usize) -> App {
        let config = Config {
            particle_count: count,
            seed: Some(1),
            ..Default::default()
        };
        let settings = config.settings().unwrap();
        let mut app = App::new(&config, settings);
        app.running = true;
        app.on_resize(Rect::new(0, 0, 40, 12));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_resize_sizes_field_from_cells() {
        let app = test_app(30);
        assert_eq!(app.field.viewport(), Viewport::new(320.0, 192.0));
        assert_eq!(app.field.particles().len(), 30);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(1);
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = test_app(1);
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_velocity_keys() {
        let mut app = test_app(10);
        app.on_key_event(key(KeyCode::Up));
        assert_eq!(app.settings.velocity, 2.5);
        for p in app.field.particles() {
            assert!((p.speed() - 2.5).abs() < 1e-3);
        }

        app.on_key_event(key(KeyCode::Char('-')));
        app.on_key_event(key(KeyCode::Down));
        assert_eq!(app.settings.velocity, 1.5);
    }

    #[test]
    fn test_color_and_text_keys_cycle_presets() {
        let mut app = test_app(10);
        app.on_key_event(key(KeyCode::Char('c')));
        assert_eq!(app.settings.color, ColorPreset::Gold.color());
        assert!(
            app.field
                .particles()
                .iter()
                .all(|p| p.color == ColorPreset::Gold.color())
        );

        app.on_key_event(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.settings.color, ColorPreset::White.color());

        app.on_key_event(key(KeyCode::Char('t')));
        assert_eq!(app.settings.text, TextPreset::Sparkle.text());
        assert!(app.field.particles().iter().all(|p| p.text == "✦"));
    }

    #[test]
    fn test_left_click_spawns_burst_at_cell_center() {
        let mut app = test_app(5);
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });

        let particles = app.field.particles();
        assert_eq!(particles.len(), 5 + EXPLOSION_PARTICLE_COUNT);
        assert_eq!((particles[5].x, particles[5].y), (84.0, 56.0));

        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.field.particles().len(), 5 + EXPLOSION_PARTICLE_COUNT);
    }

    #[test]
    fn test_render_draws_help_bar() {
        let mut app = test_app(20);
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let bottom: String = (0..80).map(|x| buffer[(x, 11)].symbol().to_string()).collect();
        assert!(bottom.contains("quit"), "{bottom:?}");

        app.on_key_event(KeyEvent {
            code: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(!app.show_help);
    }

    #[test]
    fn test_render_resizes_when_area_changes() {
        let mut app = test_app(8);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        assert_eq!(app.area, Rect::new(0, 0, 20, 6));
        assert_eq!(app.field.viewport(), Viewport::new(160.0, 96.0));
        assert_eq!(app.field.particles().len(), 8);
    }
}
