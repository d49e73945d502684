//! Capture surface: freehand stroke input over a fixed-size canvas.
//!
//! The stroke logic is an explicit state machine with a pure transition
//! function: pointer events go in, draw commands come out. The UI layer
//! adapts toolkit callbacks into [`SurfaceEvent`]s and never touches the
//! canvas directly, which keeps the gesture semantics unit-testable without
//! a terminal.

pub mod canvas;
pub mod output;

use std::path::Path;

pub use canvas::{Canvas, Point};

use crate::config::SurfaceConfig;
use crate::error::Result;

/// A pointer or control event delivered to the capture surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Pointer pressed at canvas coordinates.
    PointerDown {
        /// Horizontal canvas coordinate.
        x: f64,
        /// Vertical canvas coordinate.
        y: f64,
    },
    /// Pointer dragged to canvas coordinates.
    PointerMove {
        /// Horizontal canvas coordinate.
        x: f64,
        /// Vertical canvas coordinate.
        y: f64,
    },
    /// Pointer released.
    PointerUp,
    /// Clear the surface.
    Clear,
}

/// Gesture phase of the capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No active stroke.
    #[default]
    Idle,
    /// Pointer held, segments being appended.
    Drawing,
}

/// Stroke-gesture state: the current phase and the last known pointer
/// position, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokeState {
    /// Current gesture phase.
    pub phase: Phase,
    /// Last pointer position, used as the start of the next segment.
    pub last: Option<Point>,
}

/// A rendering command produced by a state transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Rasterize a straight segment between two points.
    Segment {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
    },
    /// Remove all rendered strokes.
    ClearAll,
}

/// Pure stroke-state transition.
///
/// Returns the next state and at most one draw command:
///
/// - `PointerDown` records the starting point of a new stroke, overwriting
///   any stale position from an improperly terminated previous stroke.
/// - `PointerMove` with a prior point emits a segment and advances the
///   point. With no prior point (a stray drag event) it only sets the
///   point, so no spurious long line can appear.
/// - `PointerUp` clears the prior point; the next move cannot connect to a
///   stale location.
/// - `Clear` resets everything and asks for the canvas to be wiped.
#[must_use]
pub fn transition(state: StrokeState, event: SurfaceEvent) -> (StrokeState, Option<DrawCommand>) {
    match event {
        SurfaceEvent::PointerDown { x, y } => (
            StrokeState {
                phase: Phase::Drawing,
                last: Some(Point::new(x, y)),
            },
            None,
        ),
        SurfaceEvent::PointerMove { x, y } => {
            let to = Point::new(x, y);
            let command = state
                .last
                .map(|from| DrawCommand::Segment { from, to });
            (
                StrokeState {
                    phase: state.phase,
                    last: Some(to),
                },
                command,
            )
        }
        SurfaceEvent::PointerUp => (
            StrokeState {
                phase: Phase::Idle,
                last: None,
            },
            None,
        ),
        SurfaceEvent::Clear => (
            StrokeState {
                phase: Phase::Idle,
                last: None,
            },
            Some(DrawCommand::ClearAll),
        ),
    }
}

/// Interactive drawing region that accumulates freehand strokes and
/// rasterizes the result.
///
/// The reference glyph is purely visual: it is stored here for the UI layer
/// to overlay, but it never reaches the canvas, so saved rasters contain
/// nothing but the user's strokes.
#[derive(Debug)]
pub struct Surface {
    state: StrokeState,
    canvas: Canvas,
    stroke_width: f64,
    reference: Option<char>,
}

impl Surface {
    /// Create a blank surface from configuration, with no reference glyph.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            state: StrokeState::default(),
            canvas: Canvas::new(config.width, config.height),
            stroke_width: config.stroke_width,
            reference: None,
        }
    }

    /// Feed an event through the state machine and apply the resulting
    /// draw command to the canvas.
    pub fn handle(&mut self, event: SurfaceEvent) -> Option<DrawCommand> {
        let (next, command) = transition(self.state, event);
        self.state = next;

        match command {
            Some(DrawCommand::Segment { from, to }) => {
                self.canvas.stroke_segment(from, to, self.stroke_width);
            }
            Some(DrawCommand::ClearAll) => self.canvas.clear(),
            None => {}
        }

        command
    }

    /// Record the starting point of a new stroke (pointer-down).
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        self.handle(SurfaceEvent::PointerDown { x, y });
    }

    /// Append a segment from the prior point to `(x, y)` (pointer-drag).
    pub fn extend_stroke(&mut self, x: f64, y: f64) {
        self.handle(SurfaceEvent::PointerMove { x, y });
    }

    /// Terminate the current stroke (pointer-up).
    pub fn end_stroke(&mut self) {
        self.handle(SurfaceEvent::PointerUp);
    }

    /// Remove all rendered strokes and reset the gesture state.
    pub fn clear(&mut self) {
        self.handle(SurfaceEvent::Clear);
    }

    /// Set the reference glyph overlaid by the UI layer.
    pub fn show_reference(&mut self, symbol: char) {
        self.reference = Some(symbol);
    }

    /// The current reference glyph, if any.
    #[must_use]
    pub fn reference(&self) -> Option<char> {
        self.reference
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The underlying canvas.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// True when no ink has been laid down.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.canvas.is_blank()
    }

    /// Rasterize the current strokes to an 8-bit grayscale PNG.
    ///
    /// The reference glyph overlay is not part of the canvas and is never
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoding fails.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        output::write_png(&self.canvas, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_surface() -> Surface {
        Surface::new(&SurfaceConfig {
            width: 50,
            height: 50,
            stroke_width: 2.0,
        })
    }

    #[test]
    fn test_transition_down_records_start() {
        let (state, cmd) = transition(StrokeState::default(), SurfaceEvent::PointerDown {
            x: 10.0,
            y: 10.0,
        });
        assert_eq!(state.phase, Phase::Drawing);
        assert_eq!(state.last, Some(Point::new(10.0, 10.0)));
        assert!(cmd.is_none());
    }

    #[test]
    fn test_transition_down_overwrites_stale_point() {
        let stale = StrokeState {
            phase: Phase::Idle,
            last: Some(Point::new(99.0, 99.0)),
        };
        let (state, cmd) = transition(stale, SurfaceEvent::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(state.last, Some(Point::new(1.0, 2.0)));
        assert!(cmd.is_none());
    }

    #[test]
    fn test_transition_move_emits_segment() {
        let (state, _) = transition(StrokeState::default(), SurfaceEvent::PointerDown {
            x: 10.0,
            y: 10.0,
        });
        let (state, cmd) = transition(state, SurfaceEvent::PointerMove { x: 20.0, y: 20.0 });

        assert_eq!(
            cmd,
            Some(DrawCommand::Segment {
                from: Point::new(10.0, 10.0),
                to: Point::new(20.0, 20.0),
            })
        );
        assert_eq!(state.last, Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_transition_stray_move_draws_nothing_but_arms_point() {
        // extend with no prior begin: draws nothing, sets the prior point
        let (state, cmd) = transition(StrokeState::default(), SurfaceEvent::PointerMove {
            x: 5.0,
            y: 5.0,
        });
        assert!(cmd.is_none());
        assert_eq!(state.last, Some(Point::new(5.0, 5.0)));

        // the next move draws exactly one segment from the stray point
        let (_, cmd) = transition(state, SurfaceEvent::PointerMove { x: 8.0, y: 8.0 });
        assert_eq!(
            cmd,
            Some(DrawCommand::Segment {
                from: Point::new(5.0, 5.0),
                to: Point::new(8.0, 8.0),
            })
        );
    }

    #[test]
    fn test_transition_up_disarms_point() {
        let (state, _) = transition(StrokeState::default(), SurfaceEvent::PointerDown {
            x: 10.0,
            y: 10.0,
        });
        let (state, cmd) = transition(state, SurfaceEvent::PointerUp);
        assert!(cmd.is_none());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.last.is_none());

        // a move after up cannot connect to the stale location
        let (_, cmd) = transition(state, SurfaceEvent::PointerMove { x: 40.0, y: 40.0 });
        assert!(cmd.is_none());
    }

    #[test]
    fn test_transition_clear_from_any_state() {
        let drawing = StrokeState {
            phase: Phase::Drawing,
            last: Some(Point::new(3.0, 3.0)),
        };
        let (state, cmd) = transition(drawing, SurfaceEvent::Clear);
        assert_eq!(cmd, Some(DrawCommand::ClearAll));
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.last.is_none());
    }

    #[test]
    fn test_surface_stroke_sequence_lays_ink() {
        let mut surface = test_surface();
        surface.begin_stroke(10.0, 10.0);
        surface.extend_stroke(20.0, 20.0);
        surface.extend_stroke(30.0, 10.0);
        surface.end_stroke();

        assert!(!surface.is_blank());
        assert_eq!(surface.phase(), Phase::Idle);
        assert_eq!(surface.canvas().pixel(20, 20), Some(canvas::INK));
    }

    #[test]
    fn test_surface_clear_restores_blank() {
        let mut surface = test_surface();
        surface.begin_stroke(10.0, 10.0);
        surface.extend_stroke(30.0, 30.0);
        surface.clear();

        assert!(surface.is_blank());
        assert_eq!(surface.phase(), Phase::Idle);
    }

    #[test]
    fn test_surface_starts_without_reference() {
        let surface = test_surface();
        assert!(surface.reference().is_none());
    }

    #[test]
    fn test_surface_show_reference_is_visual_only() {
        let mut surface = test_surface();
        surface.show_reference('あ');
        assert_eq!(surface.reference(), Some('あ'));
        // The overlay never reaches the canvas
        assert!(surface.is_blank());
    }

    #[test]
    fn test_surface_reference_survives_clear() {
        let mut surface = test_surface();
        surface.show_reference('か');
        surface.begin_stroke(5.0, 5.0);
        surface.extend_stroke(25.0, 25.0);
        surface.clear();

        assert_eq!(surface.reference(), Some('か'));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_surface_save_png_excludes_overlay() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("char_1.png");

        let mut surface = test_surface();
        surface.show_reference('あ');
        surface.save_png(&path).unwrap();

        // Blank strokes + overlay => a blank raster on disk
        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        assert!(surface.is_blank());
    }
}
