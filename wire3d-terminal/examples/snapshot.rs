/// Example: Print a single wireframe frame as plain text
///
/// Usage: cargo run --example snapshot -- [heading] [pitch] [cols] [rows]

use std::env;
use std::io;
use wire3d_core::{Orientation, Renderer};
use wire3d_terminal::TerminalCanvas;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> io::Result<T> {
    match args.get(index) {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid argument: {}", s))
        }),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let defaults = Orientation::default();

    let orientation = Orientation::try_new(
        arg(&args, 1, defaults.heading)?,
        arg(&args, 2, defaults.pitch)?,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let cols = arg(&args, 3, 80usize)?;
    let rows = arg(&args, 4, 30usize)?;

    let mut canvas = TerminalCanvas::new(cols, rows);
    Renderer::default().paint(orientation, &mut canvas);

    println!(
        "heading {} pitch {} ({} cells inked)",
        orientation.heading,
        orientation.pitch,
        canvas.inked()
    );
    print!("{}", canvas.to_text());
    Ok(())
}
