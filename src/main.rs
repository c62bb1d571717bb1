use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cli::commands::{ask, chat, keywords, profile, replay};
use folio::cli::{Args, Command, ProfileCommand};
use folio::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let profile_path = args.profile.as_deref();

    match args.command {
        Some(Command::Ask { message }) => {
            ask::run_ask(profile_path, &message)?;
        }
        Some(Command::Replay {
            file,
            delay,
            paced,
            export,
        }) => {
            let options = replay::ReplayOptions {
                profile: profile_path,
                file,
                delay,
                paced,
                export,
            };
            replay::run_replay(options).await?;
        }
        Some(Command::Commands) => {
            keywords::print_keywords(profile_path)?;
        }
        Some(Command::Profile(ProfileCommand::Init { force })) => {
            profile::init_profile(profile_path, force)?;
        }
        Some(Command::Profile(ProfileCommand::Show)) => {
            profile::show_profile(profile_path)?;
        }
        Some(Command::Profile(ProfileCommand::Check)) => {
            profile::check_profile(profile_path)?;
        }
        Some(Command::Chat { fast, mute }) => {
            let options = chat::ChatOptions {
                profile: profile_path,
                fast,
                mute,
            };
            chat::run_chat(options).await?;
        }
        None => {
            let options = chat::ChatOptions {
                profile: profile_path,
                fast: false,
                mute: false,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with bot replies on stdout.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
