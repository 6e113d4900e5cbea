/// Terminal front-end: draws a plot and waits until the viewer is dismissed
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use lavis_core::Plot;
use std::io::{self, stdout, Write};

pub mod renderer;
pub mod report;

pub use renderer::AsciiRenderer;

/// Render `plot` into a detached canvas of the given size
pub fn render_to_lines(plot: &Plot, width: usize, height: usize) -> Vec<String> {
    let mut renderer = AsciiRenderer::new(width, height);
    renderer.render_plot(plot);
    renderer.to_lines()
}

/// Full-screen viewer for a single plot
pub struct TerminalApp {
    plot: Plot,
    renderer: AsciiRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(plot: Plot) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            plot,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
        })
    }

    /// Show the plot until a key is pressed
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
        self.render()?;

        while self.running {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    log::debug!("dismissed with {:?}", key.code);
                    self.running = false;
                }
                Event::Resize(width, height) => {
                    log::debug!("terminal resized to {width}x{height}");
                    self.renderer = AsciiRenderer::new(width as usize, height as usize);
                    self.render()?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_plot(&self.plot);

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print("[any key] close"),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
