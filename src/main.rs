use std::{sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info, warn};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc::{UnboundedSender, unbounded_channel},
    task::JoinSet,
};

use github_user_search::{
    Debouncer, GITHUB_REST_ENDPOINT, InputEvent, RestFetcher, SearchOrchestrator, StdResult,
    TerminalRenderer,
};

/// Command line arguments for the GitHub user search
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub REST API endpoint
    #[arg(long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_REST_ENDPOINT)]
    api_endpoint: String,

    /// Quiet period, in milliseconds, before a typed user name is searched
    #[arg(short, long, default_value_t = 300)]
    debounce_ms: u64,

    /// User name searched on startup
    #[arg(short, long)]
    user: Option<String>,

    /// Page of repositories displayed on startup, used with --user
    #[arg(short, long, requires = "user")]
    page: Option<u32>,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let orchestrator = build_orchestrator(&args)?;
    if let Some(user) = &args.user {
        orchestrator.set_query(user).await?;
        if let Some(page) = args.page {
            orchestrator.set_page(page).await?;
        }
    } else {
        orchestrator.refresh().await?;
    }

    info!("Reading user names from standard input");
    search_from_input(
        orchestrator,
        BufReader::new(tokio::io::stdin()),
        Duration::from_millis(args.debounce_ms),
    )
    .await?;
    info!("Search completed");

    Ok(())
}

fn build_orchestrator(args: &Args) -> StdResult<Arc<SearchOrchestrator>> {
    let fetcher = Arc::new(RestFetcher::try_new(&args.api_endpoint)?);
    let renderer = Arc::new(TerminalRenderer::stdout());

    Ok(Arc::new(SearchOrchestrator::new(fetcher, renderer)))
}

async fn search_from_input<R>(
    orchestrator: Arc<SearchOrchestrator>,
    input: R,
    delay: Duration,
) -> StdResult<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (query_tx, mut query_rx) = Debouncer::new(delay).spawn::<String>();
    let (command_tx, mut command_rx) = unbounded_channel::<InputEvent>();
    let reader = tokio::spawn(read_input(input, query_tx, command_tx));

    let mut searches = JoinSet::new();
    loop {
        tokio::select! {
            Some(query) = query_rx.recv() => {
                let orchestrator = Arc::clone(&orchestrator);
                searches.spawn(async move { orchestrator.set_query(&query).await });
            }
            Some(command) = command_rx.recv() => {
                let orchestrator = Arc::clone(&orchestrator);
                match command {
                    InputEvent::Page(page) => {
                        searches.spawn(async move { orchestrator.set_page(page).await.map(|_| ()) });
                    }
                    InputEvent::NextPage => {
                        searches.spawn(async move { orchestrator.next_page().await.map(|_| ()) });
                    }
                    InputEvent::PreviousPage => {
                        searches.spawn(async move { orchestrator.previous_page().await.map(|_| ()) });
                    }
                    InputEvent::Quit => break,
                    InputEvent::Query(_) => {}
                }
            }
            Some(search) = searches.join_next(), if !searches.is_empty() => {
                search??;
            }
            else => break,
        }
    }
    while let Some(search) = searches.join_next().await {
        search??;
    }
    reader.await??;

    Ok(())
}

async fn read_input<R: AsyncBufRead + Unpin>(
    input: R,
    query_tx: UnboundedSender<String>,
    command_tx: UnboundedSender<InputEvent>,
) -> StdResult<()> {
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match InputEvent::parse(&line) {
            Ok(InputEvent::Query(query)) => query_tx.send(query)?,
            Ok(InputEvent::Quit) => {
                command_tx.send(InputEvent::Quit)?;
                break;
            }
            Ok(command) => command_tx.send(command)?,
            Err(e) => warn!("Invalid input: {e}"),
        }
    }

    Ok(())
}
