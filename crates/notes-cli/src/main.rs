//! Notes CLI - a local, single-user note manager
//!
//! This is the command-line interface for Notes. It wraps the note store
//! from `notes-core` with single-shot commands and an interactive menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{menu, misc, notes};
use crate::errors::exit_code_for;
use crate::output::report_load;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init_logging(ctx.log_level());

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => {
            let hint = error[idx + 1..].trim_start_matches("Hint:").trim();
            (&error[..idx], Some(hint))
        }
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions(args)) = &cli.command {
        return misc::handle_completions(args.shell);
    }

    let (mut store, report) = ctx.open_store()?;
    report_load(&ctx.ui_context(false, None), &report, ctx.quiet());

    match &cli.command {
        Some(Commands::Add(args)) => notes::handle_add(ctx, &mut store, args),
        Some(Commands::List(args)) => notes::handle_list(ctx, &store, args),
        Some(Commands::Show(args)) => notes::handle_show(ctx, &store, args),
        Some(Commands::Edit(args)) => notes::handle_edit(ctx, &mut store, args),
        Some(Commands::Delete(args)) => notes::handle_delete(ctx, &mut store, args),
        Some(Commands::Menu) | None => menu::handle_menu(ctx, &mut store),
        Some(Commands::Completions(_)) => Ok(()),
    }
}
