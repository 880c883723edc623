use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, Command};
use colored::*;

use review_notifier::config::{load_env_file, CommandHelper, Config, EnvSettings};
use review_notifier::error::NotifierResult;
use review_notifier::formatting::print_preview;
use review_notifier::logging::{init_logging, log_error, log_info};
use review_notifier::pipeline::{run, RunOptions, RunOutcome};

fn cli() -> Command {
    Command::new("review-notifier")
        .about("Post GitHub Projects items waiting in a status to a Mattermost webhook")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .value_name("PATH")
                .help("Load variables from this file instead of ./.env")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the message instead of posting it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also append log lines to a file in the cache directory")
                .action(ArgAction::SetTrue),
        )
}

async fn execute(env_file: Option<PathBuf>, options: RunOptions) -> NotifierResult<()> {
    load_env_file(env_file.as_deref())?;

    let settings = EnvSettings::from_env();
    let config = Config::resolve(settings, &CommandHelper::gh()).await?;

    match run(&config, options).await? {
        RunOutcome::NothingToNotify => {
            println!("{}", "Nothing to notify.".dimmed());
        }
        RunOutcome::Notified(count) => {
            println!("{} Posted {} item(s) to the webhook", "✓".green(), count);
        }
        RunOutcome::DryRun(message) => {
            log_info("Dry run, webhook not contacted");
            print_preview(&message, config.webhook_url());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();

    if let Err(e) = init_logging(matches.get_flag("verbose"), matches.get_flag("log-file")) {
        eprintln!("Warning: could not set up log file: {}", e);
    }

    let options = RunOptions {
        dry_run: matches.get_flag("dry-run"),
    };
    let env_file = matches.get_one::<PathBuf>("env-file").cloned();

    if let Err(e) = execute(env_file, options).await {
        log_error(&format!("{}: {}", e.kind(), e));
        process::exit(1);
    }
}
