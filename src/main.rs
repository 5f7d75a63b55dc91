use std::io::{self, Write};

use calprint::app;
use calprint::calendar::CalendarRenderer;
use calprint::core::clock::SystemClock;
use calprint::core::context::AppContext;
use calprint::logging::LogTarget;
use calprint::prompter::collector::InputCollector;
use calprint::ui::emphasis::{emphasis_for, stdout_is_terminal};

fn main() {
    let ctx = AppContext::new();
    let collector = InputCollector::new(ctx.logger.clone());
    let emphasis = emphasis_for(ctx.config.emphasis_style(), stdout_is_terminal);
    let renderer =
        CalendarRenderer::new(emphasis, Box::new(SystemClock)).with_logger(ctx.logger.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(err) = app::run(&collector, &renderer, &mut input, &mut out) {
        // Stdout may be the thing that failed.
        let _ = writeln!(out);
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
