/// Terminal-based wireframe viewer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use wire3d_core::{Orientation, Renderer, WHITE};

pub mod canvas;

pub use canvas::TerminalCanvas;

/// Degrees added per key press
pub const ANGLE_STEP: i32 = 5;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    orientation: Orientation,
    renderer: Renderer,
    canvas: TerminalCanvas,
    running: bool,
    dirty: bool,
}

impl TerminalApp {
    pub fn new(orientation: Orientation) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(orientation, width as usize, height as usize))
    }

    pub fn with_size(orientation: Orientation, cols: usize, rows: usize) -> Self {
        Self {
            orientation,
            renderer: Renderer::default(),
            canvas: TerminalCanvas::new(cols, rows),
            running: true,
            dirty: true,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn canvas(&self) -> &TerminalCanvas {
        &self.canvas
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            if self.dirty {
                self.render()?;
            }

            // Block until the next input; nothing changes in between
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => self.handle_key(code),
                Event::Resize(cols, rows) => self.resize(cols as usize, rows as usize),
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply a key press; marks the frame dirty if the view changed
    pub fn handle_key(&mut self, code: KeyCode) {
        let before = self.orientation;
        self.orientation = match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                return;
            }
            KeyCode::Char('a') | KeyCode::Left => before.with_heading_step(-ANGLE_STEP),
            KeyCode::Char('d') | KeyCode::Right => before.with_heading_step(ANGLE_STEP),
            KeyCode::Char('w') | KeyCode::Up => before.with_pitch_step(ANGLE_STEP),
            KeyCode::Char('s') | KeyCode::Down => before.with_pitch_step(-ANGLE_STEP),
            _ => before,
        };
        self.dirty |= self.orientation != before;
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.canvas = TerminalCanvas::new(cols, rows);
        self.dirty = true;
    }

    /// Repaint the canvas for the current orientation
    pub fn paint(&mut self) {
        self.renderer.paint(self.orientation, &mut self.canvas);
        self.dirty = false;
    }

    fn render(&mut self) -> io::Result<()> {
        self.paint();

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(canvas::term_color(WHITE)),
            Print(format!(
                "Wire3D | heading {:>3}  pitch {:>3} | Left/Right=Heading Up/Down=Pitch Q=Quit",
                self.orientation.heading, self.orientation.pitch
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_step_and_clamp() {
        let mut app = TerminalApp::with_size(Orientation::new(358, 88), 80, 24);
        app.paint();

        app.handle_key(KeyCode::Right);
        assert_eq!(app.orientation(), Orientation::new(360, 88));
        app.handle_key(KeyCode::Up);
        assert_eq!(app.orientation(), Orientation::new(360, 90));
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.orientation(), Orientation::new(355, 85));
    }

    #[test]
    fn test_unchanged_view_stays_clean() {
        let mut app = TerminalApp::with_size(Orientation::new(0, 90), 80, 24);
        app.paint();
        app.handle_key(KeyCode::Up);
        assert!(!app.dirty);
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.dirty);
        app.handle_key(KeyCode::Left);
        assert!(!app.dirty);
        app.handle_key(KeyCode::Down);
        assert!(app.dirty);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = TerminalApp::with_size(Orientation::default(), 80, 24);
        assert!(app.is_running());
        app.handle_key(KeyCode::Esc);
        assert!(!app.is_running());
    }

    #[test]
    fn test_resize_rebuilds_canvas() {
        let mut app = TerminalApp::with_size(Orientation::default(), 80, 24);
        app.paint();
        app.resize(100, 30);
        assert!(app.dirty);
        assert_eq!(app.canvas().cols(), 100);
        app.paint();
        assert!(app.canvas().inked() > 0);
    }
}
