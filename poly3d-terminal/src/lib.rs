/// Terminal frontend: event loop, button dispatch, and frame pacing
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use rand::Rng;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use poly3d_core::projection::to_canvas;
use poly3d_core::scene::{Scene, SPAWN_X, SPAWN_Y};

pub mod renderer;
pub mod ui;

pub use renderer::Canvas;
pub use ui::{Action, Button};

/// Main application struct for the wireframe demo.
pub struct TerminalApp {
    scene: Scene,
    buttons: Vec<Button>,
    canvas: Canvas,
    pointer: (i32, i32),
    running: bool,
    target_frame_time: Duration,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(frame_rate: u32, spin: f64) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;

        Ok(Self {
            scene: Scene::new(spin),
            buttons: ui::layout(),
            canvas: Canvas::new(cols, rows),
            pointer: (0, 0),
            running: true,
            target_frame_time: Duration::from_millis(1000 / u64::from(frame_rate.max(1))),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            let events = self.drain_events()?;
            self.handle_input(&events);
            self.update();
            self.compose();

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            self.present()?;

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Collect every event pending this frame, tracking the pointer and quit
    /// requests along the way.
    fn drain_events(&mut self) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.running = false;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.running = false;
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    self.pointer = self.canvas.pointer_pos(mouse.column, mouse.row);
                }
                _ => {}
            }
            events.push(ev);
        }
        Ok(events)
    }

    fn handle_input(&mut self, events: &[Event]) {
        let pressed: Vec<Action> = self
            .buttons
            .iter()
            .filter(|button| button.is_activated(self.pointer, events))
            .map(|button| button.action)
            .collect();
        for action in pressed {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Reverse => self.scene.reverse(),
            Action::SpeedUp => self.scene.speed_up(),
            Action::SlowDown => self.scene.slow_down(),
            Action::RemoveLast => self.scene.remove_last(),
            Action::Spawn(kind) => {
                let mut rng = rand::thread_rng();
                let pos = (rng.gen_range(SPAWN_X), rng.gen_range(SPAWN_Y));
                self.scene.spawn(kind, pos);
            }
        }
    }

    fn update(&mut self) {
        self.scene.step();
    }

    /// Draw the frame into the cell buffer: buttons first, then every live
    /// solid in insertion order.
    fn compose(&mut self) {
        self.canvas.clear();

        for button in &self.buttons {
            self.canvas.fill_rect(
                button.x,
                button.y,
                button.width,
                button.height,
                Color::White,
            );
            self.canvas.text(
                button.x + 5,
                button.y + button.height / 2,
                button.label,
                Color::Black,
                Color::White,
            );
        }

        for solid in &self.scene.solids {
            let factor = solid.kind.scale_factor();
            for &(i, j) in solid.kind.edges() {
                let p1 = to_canvas(&solid.vertices[i], factor, solid.pos);
                let p2 = to_canvas(&solid.vertices[j], factor, solid.pos);
                self.canvas.line(p1, p2, Color::White);
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.canvas.present(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Poly3D | FPS: {:.1} | spin: {:+.2} | solids: {} | Q/ESC=Quit",
                self.fps,
                self.scene.spin,
                self.scene.solids.len()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
