use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use gallery_core::{AppState, Intent};
use gallery_engine::{Controller, FetchSettings, ReqwestFetcher};
use gallery_logging::{gallery_info, gallery_warn};
use tokio::runtime::Runtime;
use tokio::sync::watch;

use super::commands::{self, Command};
use super::logging::{self, LogDestination};
use super::render;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let settings = FetchSettings::default();
    let fetcher = ReqwestFetcher::new(settings.clone()).context("failed to build HTTP client")?;
    let controller = Controller::new(Arc::new(fetcher), runtime.handle().clone());
    let mut states = controller.subscribe();
    gallery_info!("Gallery started against {}", settings.base_url);

    let mut stdout = io::stdout().lock();
    settle(&runtime, &controller, &mut states, Intent::LoadRequested);
    print_state(&mut stdout, &controller.state(), &settings)?;
    writeln!(stdout, "{}", commands::HELP)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        match commands::parse(&line) {
            Command::Intent(intent) => {
                settle(&runtime, &controller, &mut states, intent);
                print_state(&mut stdout, &controller.state(), &settings)?;
            }
            Command::Help => writeln!(stdout, "{}", commands::HELP)?,
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(stdout, "Unknown command `{text}`. {}", commands::HELP)?
            }
        }
    }

    controller.dispose();
    gallery_info!("Gallery closed");
    Ok(())
}

/// Hands an intent to the controller and blocks until no load is pending.
fn settle(
    runtime: &Runtime,
    controller: &Controller,
    states: &mut watch::Receiver<AppState>,
    intent: Intent,
) {
    controller.handle(intent);
    let settled = runtime.block_on(async {
        states
            .wait_for(|state| !state.is_loading())
            .await
            .map(|_| ())
    });
    if let Err(err) = settled {
        gallery_warn!("State channel closed while waiting: {}", err);
    }
}

fn print_state(out: &mut impl Write, state: &AppState, settings: &FetchSettings) -> io::Result<()> {
    writeln!(out)?;
    for line in render::render(&state.view(), settings) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
