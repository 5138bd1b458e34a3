use clap::Parser;
use gittags::cli::create::CreateArgs;
use gittags::cli::{Cli, Commands, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gittags=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Get {
            ref owner,
            ref repo,
            ref sha,
        }) => {
            let session = Session::open(&cli)?;
            gittags::cli::get::run(&session, owner, repo, sha).await?;
        }
        Some(Commands::Create {
            ref owner,
            ref repo,
            ref tag,
            ref message,
            ref object,
            ref object_type,
            ref tagger_name,
            ref tagger_email,
            ref tagger_date,
        }) => {
            let session = Session::open(&cli)?;
            let args = CreateArgs {
                tag: tag.clone(),
                message: message.clone(),
                object: object.clone(),
                object_type: object_type.clone(),
                tagger_name: tagger_name.clone(),
                tagger_email: tagger_email.clone(),
                tagger_date: tagger_date.clone(),
            };
            gittags::cli::create::run(&session, owner, repo, args).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
