/// Poly3D - Tumbling wireframe polyhedra in the terminal
///
/// Click the on-screen buttons to add solids, steer the shared rotation
/// step, or delete the most recently added solid.
/// Keys: Q / ESC quit.

use clap::Parser;
use std::io;

use poly3d_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(
    name = "poly3d",
    version,
    about = "Tumbling wireframe polyhedra with clickable controls"
)]
struct Cli {
    /// Target frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Initial rotation step in radians per frame; negative spins the other way
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    spin: f64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut app = TerminalApp::new(cli.fps, cli.spin)?;
    app.run()
}
