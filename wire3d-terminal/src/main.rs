/// Wire3D Terminal Viewer - Rotating Tetrahedron
///
/// Usage: wire3d-terminal [heading] [pitch]
/// Controls:
///   - Left/Right or A/D: Heading (0..=360)
///   - Up/Down or W/S: Pitch (-90..=90)
///   - Q/ESC: Quit

use std::env;
use std::io;
use wire3d_core::Orientation;
use wire3d_terminal::TerminalApp;

fn parse_angle(arg: Option<&String>, default: i32) -> io::Result<i32> {
    match arg {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid angle '{}': {}", s, e),
            )
        }),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let defaults = Orientation::default();

    let heading = parse_angle(args.get(1), defaults.heading)?;
    let pitch = parse_angle(args.get(2), defaults.pitch)?;
    let orientation = Orientation::try_new(heading, pitch).map_err(|e| {
        eprintln!("Usage: {} [heading 0..=360] [pitch -90..=90]", args[0]);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    println!(
        "Starting wireframe viewer at heading {}, pitch {} (press Q to quit)...",
        orientation.heading, orientation.pitch
    );

    let mut app = TerminalApp::new(orientation)?;
    app.run()?;

    println!("Thank you for using Wire3D!");
    Ok(())
}
