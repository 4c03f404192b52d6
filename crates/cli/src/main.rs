use std::env;
use std::io::stderr;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use unitcuts_core::config::{self, Settings};
use unitcuts_core::error::Result;
use unitcuts_core::execution::require_tool;
use unitcuts_core::file_handling;
use unitcuts_core::jump::Jump;
use unitcuts_core::outcome::Outcome;
use unitcuts_core::pipeline::{Pipeline, PipelineOptions};
use unitcuts_core::session::{ShellLauncher, ZoxideIndex, ZOXIDE};
use unitcuts_core::systemctl::{SystemctlEnumerator, SystemctlExecutor, SYSTEMCTL};

use unitcuts_cli::cli_args::{Args, Recipe};
use unitcuts_cli::collaborator_choice::{build_advisor, build_selector};
use unitcuts_cli::command_selection::StdinPrompter;

/// Load settings and apply command-line overrides
fn initialize_settings(args: &Args) -> Result<Settings> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let settings = file_handling::get_settings(&config_path)?;

    Ok(args.apply_overrides(settings))
}

fn run_service(
    args: &Args,
    settings: &Settings,
    pattern: Option<&str>,
    action: Option<&str>,
) -> Result<Outcome> {
    require_tool(SYSTEMCTL)?;

    let selector = build_selector(settings.selector)?;
    let advisor = build_advisor(settings.spell_checker.as_deref());
    let enumerator = SystemctlEnumerator {
        user: settings.user_units,
    };
    let executor = SystemctlExecutor {
        user: settings.user_units,
        privilege_command: settings.privilege_command.clone(),
        dry_run: args.dry_run,
    };

    let pipeline = Pipeline {
        enumerator: &enumerator,
        selector: selector.as_ref(),
        advisor: advisor.as_ref(),
        prompter: &StdinPrompter,
        executor: &executor,
        options: PipelineOptions {
            assume_yes: args.yes,
            strict_actions: settings.strict_actions,
            confirm_selection_prompt: settings.confirm_selection_prompt.clone(),
            confirm_execution_prompt: settings.confirm_execution_prompt.clone(),
        },
    };

    pipeline.run(pattern, action, &mut stderr())
}

fn run_jump(settings: &Settings, query: &[String]) -> Result<Outcome> {
    require_tool(ZOXIDE)?;

    let selector = build_selector(settings.selector)?;
    let launcher = ShellLauncher {
        shell: settings.resolve_shell(env::var("SHELL").ok()),
    };

    let jump = Jump {
        index: &ZoxideIndex,
        selector: selector.as_ref(),
        launcher: &launcher,
    };

    let query = query.join(" ");
    jump.run(Some(&query), &mut stderr())
}

fn execute() -> Result<i32> {
    let args = Args::parse();
    let settings = initialize_settings(&args)?;

    let outcome = match &args.recipe {
        Recipe::Service { pattern, action } => {
            run_service(&args, &settings, pattern.as_deref(), action.as_deref())?
        }
        Recipe::Jump { query } => run_jump(&settings, query)?,
    };
    debug!("Finished with {outcome:?}");

    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        // Codes outside 0..=255 cannot be reported as-is
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
