use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::store::StateStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::TerminalSink;
use crate::ui::render_loop::{RenderLoop, TickOutcome};
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;

/// Run the canvas until the user quits or a shutdown signal arrives.
///
/// All input handling and every render-loop tick happen on this thread, one
/// event at a time.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> anyhow::Result<()> {
    let store = StateStore::new(config.initial_state()).context("building initial state")?;
    let mut render_loop = RenderLoop::new(store.clone());
    let mut app = App::new(store);

    let (terminal, guard) = setup_terminal().context("setting up terminal")?;
    let mut sink = TerminalSink::new(terminal);
    let frame_interval = Duration::from_millis(config.render.frame_interval_ms);
    let events = EventHandler::new(frame_interval, shutdown.clone());

    tracing::info!(
        rows = config.canvas.rows,
        cols = config.canvas.cols,
        palette = config.palette.len(),
        "Canvas started"
    );

    loop {
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(frame_interval) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(_, _)) => {
                sink.redraw().context("redrawing after resize")?;
                app.set_layout(sink.layout().cloned());
            }
            Ok(AppEvent::Frame) => {
                let outcome = render_loop.tick(&mut sink).context("drawing frame")?;
                if let TickOutcome::Rendered { .. } = outcome {
                    app.set_layout(sink.layout().cloned());
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    tracing::info!(
        renders = render_loop.render_count(),
        rejected = render_loop.rejected_count(),
        "Canvas stopped"
    );
    drop(guard);
    Ok(())
}
