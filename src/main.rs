//! Terminal number sequence runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use number_sequence::app::App;
use number_sequence::config::{AppConfig, Cli};
use number_sequence::input::{handle_key_event, handle_mouse_event, should_quit};
use number_sequence::logging;
use number_sequence::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};

/// Unchanged static frames are still redrawn this often.
const STATIC_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;
    logging::init(&config)?;
    info!(
        mode = config.mode.as_str(),
        time_limit = config.time_limit_seconds,
        frame_ms = config.frame_ms,
        "starting number sequence"
    );

    let mut app = App::from_config(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let run_result = run(&mut term, &mut app, &config);
    // Always try to restore terminal state.
    let exit_result = term.exit();
    run_result?;
    exit_result?;

    if let Some(result) = app.result() {
        info!(summary = %result.summary(), "last game");
        if config.print_result {
            let json = serde_json::to_string(&result).context("serializing result")?;
            println!("{json}");
        }
    }

    info!("exiting");
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App, config: &AppConfig) -> Result<()> {
    let frame = Duration::from_millis(config.frame_ms);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_advance = Instant::now();
    let mut carry = Duration::ZERO;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(viewport), !app.is_playing()) {
            app.render_into(viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_advance.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        app.handle(command, viewport);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(command) = handle_mouse_event(mouse) {
                        app.handle(command, viewport);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Advance by whole milliseconds; the remainder carries to the next frame.
        let now = Instant::now();
        carry += now - last_advance;
        last_advance = now;
        let whole_ms = carry.as_millis().min(u32::MAX as u128) as u32;
        if whole_ms > 0 {
            carry -= Duration::from_millis(whole_ms as u64);
            app.advance(whole_ms);
        }
    }
}
