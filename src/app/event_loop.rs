use std::time::Instant;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time;

use crate::error::AppResult;
use crate::event::DomainEvent;
use crate::ui::{self, UiLayout};

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    event_rx: UnboundedReceiver<DomainEvent>,
    event_runtime: EventBusRuntime,
    /// Layout of the last drawn frame; mouse hit-tests run against it.
    last_layout: Option<UiLayout>,
    needs_redraw: bool,
    notice: Option<String>,
}

enum WaitEvent {
    Event(DomainEvent),
    DebounceDue,
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let session = TerminalSession::enter()?;
        let (event_rx, event_runtime) = EventBusRuntime::spawn();
        let mut runtime = LoopRuntime {
            session,
            event_rx,
            event_runtime,
            last_layout: None,
            needs_redraw: true,
            notice: None,
        };

        loop {
            if runtime.needs_redraw {
                self.render_frame(&mut runtime)?;
            }

            let deadline = self.picker.debounce_deadline();
            let waited = wait_next_event(&mut runtime.event_rx, deadline).await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime),
                LoopControl::Break
            ) {
                break;
            }
        }

        self.picker.teardown();
        runtime.event_runtime.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn render_frame(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        let view = self
            .picker
            .view(&self.directory, self.config.picker.max_suggestion_rows);
        let notice = runtime.notice.clone();

        let mut drawn_layout = None;
        runtime.session.draw(|frame| {
            let layout = ui::draw_frame(frame, &view);
            if let Some(message) = &notice {
                ui::draw_notice(frame, layout, message);
            }
            drawn_layout = Some(layout);
        })?;

        runtime.last_layout = drawn_layout;
        runtime.needs_redraw = false;
        Ok(())
    }

    fn handle_waited_event(&mut self, waited: WaitEvent, runtime: &mut LoopRuntime) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(event, runtime.last_layout, Instant::now());
                if outcome.quit_requested {
                    return LoopControl::Break;
                }
                if outcome.redraw {
                    runtime.notice = None;
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                runtime.notice = Some(format!("input error: {message}"));
                runtime.needs_redraw = true;
            }
            WaitEvent::DebounceDue => {
                if self.picker.poll_debounce(Instant::now(), &self.directory) {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }
}

async fn wait_next_event(
    event_rx: &mut UnboundedReceiver<DomainEvent>,
    debounce_deadline: Option<Instant>,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_event = event_rx.recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = async {
            match debounce_deadline {
                Some(due) => time::sleep_until(time::Instant::from_std(due)).await,
                None => std::future::pending::<()>().await,
            }
        } => WaitEvent::DebounceDue,
    }
}
