mod constants;
mod display;
mod keyboard;

use std::env;
use std::path::Path;
use std::process;
use std::time::Duration;

use gpl::{storage, ConsoleReporter, RunSummary, Session};
use log::{error, info, warn};
use minifb::{Key, Window, WindowOptions};

use display::Display;
use keyboard::Action;

type Viewer = Session<Display, ConsoleReporter>;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return;
    }

    let program_path = Path::new(&args[1]);

    let program = match storage::load_program(program_path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to load program: {}", e);
            process::exit(1);
        }
    };

    let mut window = match Window::new(
        &format!("GPL Canvas - {}", program_path.display()),
        constants::SCREEN_WIDTH,
        constants::SCREEN_HEIGHT,
        WindowOptions::default(),
    ) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("Failed to create window: {}", e);
            process::exit(1);
        }
    };

    // ~60 FPS
    window.limit_update_rate(Some(Duration::from_micros(16666)));

    // Session draws straight into the window's framebuffer
    let mut session = Session::new(Display::new(), ConsoleReporter::default());
    session.load_program(program.as_str());
    let results = session.run_program(&program);
    println!("{}", RunSummary::from(results.as_slice()));

    run_viewer(&mut session, &mut window, program_path);
}

fn print_usage(program_name: &str) {
    println!("Usage: {} <program.gpl>", program_name);
    println!("\nKeys:");
    println!("  F5      reload the file and run it again");
    println!("  C       clear");
    println!("  R       reset the pen");
    println!("  Escape  quit");
    println!("\nExample:");
    println!("  cargo run -p gpl-canvas -- shapes.gpl");
}

fn run_viewer(session: &mut Viewer, window: &mut Window, program_path: &Path) {
    while window.is_open() && !window.is_key_down(Key::Escape) {
        // Keys pressed since the last frame
        for action in keyboard::poll(window) {
            handle_action(session, action, program_path);
        }

        // Only push the framebuffer when something was drawn
        if session.surface().needs_redraw {
            let updated = window.update_with_buffer(
                session.surface().buffer(),
                constants::SCREEN_WIDTH,
                constants::SCREEN_HEIGHT,
            );
            if let Err(e) = updated {
                error!("Failed to update window: {}", e);
                break;
            }
            session.surface_mut().needs_redraw = false;
        } else {
            // Still pump events so keys and close work
            window.update();
        }
    }

    info!("Viewer closed");
}

fn handle_action(session: &mut Viewer, action: Action, program_path: &Path) {
    match action {
        Action::Rerun => match storage::load_program(program_path) {
            Ok(program) => {
                session.load_program(program);
                session.execute_command("clear");
                let outcome = session.execute_command("run");
                if let Some(summary) = outcome.summary() {
                    println!("{}", summary);
                }
            }
            // Keep whatever is loaded and on screen
            Err(e) => warn!("Reload failed: {}", e),
        },
        Action::Command(line) => {
            session.execute_command(line);
        }
    }
}
