//! Selection/coordination shell.
//!
//! [`CaptureSession`] is the explicit application-state object: it owns the
//! registry, the capture surface, and the output directory, and carries the
//! selection state between them. The interactive terminal UI is a thin
//! adapter that turns key and mouse events into session calls.

pub mod terminal;
pub mod ui;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;
use crate::surface::{output, Surface};

use terminal::Tui;

/// The outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSample {
    /// Path of the written PNG.
    pub path: PathBuf,
    /// The allocated image index.
    pub index: u32,
    /// The character that was registered, if one was selected.
    pub symbol: Option<char>,
}

/// Application state tying the registry and the capture surface together.
///
/// Constructed from [`Config`]; owns everything it needs, so there is no
/// process-wide mutable state.
#[derive(Debug)]
pub struct CaptureSession {
    registry: Registry,
    surface: Surface,
    output_dir: PathBuf,
    unregistered: Vec<char>,
    selected: Option<usize>,
}

impl CaptureSession {
    /// Open the registry and build a blank surface from configuration.
    ///
    /// Fetches the unregistered list; nothing is selected and no reference
    /// glyph is shown until the user picks a character.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be opened.
    pub fn new(config: &Config) -> Result<Self> {
        let registry = Registry::open(config.database_path())?;
        let unregistered = registry.list_unregistered()?;

        Ok(Self {
            registry,
            surface: Surface::new(&config.surface),
            output_dir: config.output.dir.clone(),
            unregistered,
            selected: None,
        })
    }

    /// The characters still waiting for a sample, in seeded order.
    #[must_use]
    pub fn unregistered(&self) -> &[char] {
        &self.unregistered
    }

    /// Index of the current selection in the unregistered list.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected character.
    #[must_use]
    pub fn selected_symbol(&self) -> Option<char> {
        self.selected.map(|i| self.unregistered[i])
    }

    /// Select the character at `index`, clearing the surface and showing
    /// its reference glyph.
    pub fn select(&mut self, index: usize) {
        if self.unregistered.is_empty() {
            self.selected = None;
            return;
        }
        let index = index.min(self.unregistered.len() - 1);
        self.selected = Some(index);
        self.surface.clear();
        self.surface.show_reference(self.unregistered[index]);
        debug!("Selected '{}'", self.unregistered[index]);
    }

    /// Move the selection down, or to the first entry if nothing is selected.
    pub fn select_next(&mut self) {
        match self.selected {
            Some(i) => self.select(i.saturating_add(1)),
            None => self.select(0),
        }
    }

    /// Move the selection up, or to the first entry if nothing is selected.
    pub fn select_prev(&mut self) {
        match self.selected {
            Some(i) => self.select(i.saturating_sub(1)),
            None => self.select(0),
        }
    }

    /// The capture surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The capture surface, mutably (the UI feeds pointer events through it).
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Save the current strokes and link the sample to the selection.
    ///
    /// Allocates the next image index from the registry, creates the output
    /// directory if absent, and writes `char_<N>.png`. When a character is
    /// selected, it is immediately marked registered with the written path
    /// and the unregistered list is refreshed; the selection moves to the
    /// entry now occupying the same list position. Saving with no selection
    /// writes the file and registers nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or the registry update fails.
    pub fn save(&mut self) -> Result<SavedSample> {
        output::ensure_output_dir(&self.output_dir)?;
        let index = self.registry.next_image_index()?;
        let path = output::image_path(&self.output_dir, index);
        self.surface.save_png(&path)?;

        let symbol = self.selected_symbol();
        if let Some(symbol) = symbol {
            self.registry.mark_registered(symbol, &path)?;
            self.refresh()?;
        }

        Ok(SavedSample {
            path,
            index,
            symbol,
        })
    }

    /// Re-fetch the unregistered list and re-apply the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry query fails.
    pub fn refresh(&mut self) -> Result<()> {
        self.unregistered = self.registry.list_unregistered()?;

        match self.selected {
            Some(i) if !self.unregistered.is_empty() => self.select(i),
            _ => {
                self.selected = None;
                self.surface.clear();
            }
        }
        Ok(())
    }
}

/// Interactive shell state: the session plus what the renderer needs.
#[derive(Debug)]
pub struct ShellApp {
    /// The capture session.
    pub session: CaptureSession,
    /// Inner area of the canvas panel, updated each frame by the renderer.
    pub canvas_area: Rect,
    /// Status-line message.
    pub status: String,
    should_quit: bool,
}

impl ShellApp {
    /// Build the shell state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            session: CaptureSession::new(config)?,
            canvas_area: Rect::default(),
            status: "select a character, then draw with the mouse".to_string(),
            should_quit: false,
        })
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(&key),
                    Event::Mouse(mouse) => self.on_mouse(&mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => {
                self.session.surface_mut().clear();
                self.status = "cleared".to_string();
            }
            KeyCode::Char('s') => match self.session.save() {
                Ok(sample) => {
                    self.status = match sample.symbol {
                        Some(symbol) => {
                            format!("saved {} — registered {symbol}", sample.path.display())
                        }
                        None => format!("saved {} (no character selected)", sample.path.display()),
                    };
                }
                Err(e) => {
                    warn!("Save failed: {e}");
                    self.status = format!("save failed: {e}");
                }
            },
            KeyCode::Up | KeyCode::Char('k') => self.session.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.session.select_next(),
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((x, y)) = self.canvas_coords(mouse.column, mouse.row) {
                    self.session.surface_mut().begin_stroke(x, y);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((x, y)) = self.canvas_coords(mouse.column, mouse.row) {
                    self.session.surface_mut().extend_stroke(x, y);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.session.surface_mut().end_stroke();
            }
            _ => {}
        }
    }

    /// Translate a terminal cell position into canvas pixel coordinates.
    ///
    /// Returns `None` for positions outside the canvas panel.
    fn canvas_coords(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.canvas_area;
        if area.width == 0
            || area.height == 0
            || column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }

        let canvas = self.session.surface().canvas();
        let x = (f64::from(column - area.x) + 0.5) / f64::from(area.width)
            * f64::from(canvas.width());
        let y = (f64::from(row - area.y) + 0.5) / f64::from(area.height)
            * f64::from(canvas.height());
        Some((x, y))
    }
}

/// Run the interactive capture shell until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or an I/O or
/// registry operation fails. The terminal is restored before returning.
pub fn run(config: &Config) -> Result<()> {
    let mut app = ShellApp::new(config)?;

    let mut tui = terminal::init()?;
    let result = app.event_loop(&mut tui);
    terminal::restore()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use std::path::Path;

    fn test_config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.registry.database_path = Some(dir.join("characters.db"));
        config.output.dir = dir.join("output");
        config.surface = SurfaceConfig {
            width: 60,
            height: 60,
            stroke_width: 2.0,
        };
        config
    }

    fn read_gray(path: &Path) -> Vec<u8> {
        let decoder = png::Decoder::new(std::fs::File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        buf
    }

    #[test]
    fn test_new_session_starts_unselected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        assert_eq!(session.unregistered().len(), 46);
        assert!(session.selected_symbol().is_none());
        assert!(session.surface().reference().is_none());
        assert!(session.surface().is_blank());
    }

    #[test]
    fn test_select_shows_reference_and_clears() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.surface_mut().begin_stroke(10.0, 10.0);
        session.surface_mut().extend_stroke(30.0, 30.0);
        assert!(!session.surface().is_blank());

        session.select_next();
        assert_eq!(session.selected_symbol(), Some('あ'));
        assert_eq!(session.surface().reference(), Some('あ'));
        // Selection change clears the surface
        assert!(session.surface().is_blank());
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.select_prev();
        assert_eq!(session.selected_index(), Some(0));

        session.select_prev();
        assert_eq!(session.selected_index(), Some(0));

        session.select(1000);
        assert_eq!(session.selected_index(), Some(45));
    }

    #[test]
    fn test_save_registers_selected_symbol() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.select_next(); // あ
        session.surface_mut().begin_stroke(10.0, 10.0);
        session.surface_mut().extend_stroke(40.0, 40.0);
        session.surface_mut().end_stroke();

        let sample = session.save().unwrap();
        assert_eq!(sample.index, 1);
        assert_eq!(sample.symbol, Some('あ'));
        assert!(sample.path.ends_with("char_1.png"));
        assert!(sample.path.exists());

        // あ left the unregistered list; the selection moved to the entry
        // now occupying the same position.
        assert_eq!(session.unregistered().len(), 45);
        assert!(!session.unregistered().contains(&'あ'));
        assert_eq!(session.selected_symbol(), Some('い'));
        assert_eq!(session.surface().reference(), Some('い'));
        assert!(session.surface().is_blank());
    }

    #[test]
    fn test_save_without_selection_registers_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.surface_mut().begin_stroke(10.0, 10.0);
        session.surface_mut().extend_stroke(20.0, 20.0);
        session.surface_mut().end_stroke();

        let sample = session.save().unwrap();
        assert!(sample.symbol.is_none());
        assert!(sample.path.exists());
        assert_eq!(session.unregistered().len(), 46);
    }

    #[test]
    fn test_repeated_save_produces_distinct_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.surface_mut().begin_stroke(10.0, 10.0);
        session.surface_mut().extend_stroke(20.0, 20.0);
        session.surface_mut().extend_stroke(30.0, 10.0);
        session.surface_mut().end_stroke();

        let first = session.save().unwrap();
        let first_bytes = std::fs::read(&first.path).unwrap();

        // Saving again without drawing produces the next index and leaves
        // the first file untouched.
        let second = session.save().unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(second.index, 2);
        assert_ne!(first.path, second.path);
        assert!(second.path.exists());
        assert_eq!(std::fs::read(&first.path).unwrap(), first_bytes);
    }

    #[test]
    fn test_clear_then_save_writes_blank_image() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.surface_mut().begin_stroke(10.0, 10.0);
        session.surface_mut().extend_stroke(40.0, 40.0);
        session.surface_mut().clear();

        let sample = session.save().unwrap();
        let pixels = read_gray(&sample.path);
        assert!(pixels.iter().all(|&p| p == 255));
    }

    #[test]
    fn test_drawn_save_contains_ink() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.surface_mut().begin_stroke(10.0, 30.0);
        session.surface_mut().extend_stroke(50.0, 30.0);
        session.surface_mut().end_stroke();

        let sample = session.save().unwrap();
        let pixels = read_gray(&sample.path);
        assert!(pixels.iter().any(|&p| p == 0));
    }

    #[test]
    fn test_saved_raster_excludes_reference_overlay() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = CaptureSession::new(&test_config(temp_dir.path())).unwrap();

        session.select_next();
        assert!(session.surface().reference().is_some());

        // No strokes drawn: the reference glyph alone must not produce ink.
        let sample = session.save().unwrap();
        let pixels = read_gray(&sample.path);
        assert!(pixels.iter().all(|&p| p == 255));
    }

    #[test]
    fn test_canvas_coords_mapping() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = ShellApp::new(&test_config(temp_dir.path())).unwrap();
        app.canvas_area = Rect {
            x: 10,
            y: 5,
            width: 30,
            height: 15,
        };

        // Outside the panel
        assert!(app.canvas_coords(0, 0).is_none());
        assert!(app.canvas_coords(40, 10).is_none());

        // Top-left cell maps near the canvas origin
        let (x, y) = app.canvas_coords(10, 5).unwrap();
        assert!(x > 0.0 && x < 2.0);
        assert!(y > 0.0 && y < 4.0);

        // Bottom-right cell maps near the canvas extent
        let (x, y) = app.canvas_coords(39, 19).unwrap();
        assert!(x > 58.0 && x <= 60.0);
        assert!(y > 56.0 && y <= 60.0);
    }
}
