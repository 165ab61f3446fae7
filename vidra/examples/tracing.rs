use tracing_subscriber::fmt::format::FmtSpan;
use vidra::{ExecutionContext, Vidra};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,vidra=trace,vidra_core=trace
    // Build with `--features tracing` to see the router and rotator spans.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let vidra = Vidra::default_stack(ExecutionContext::Native)?;

    // Trending feed through the rotating mirror pool.
    let feed = vidra.trending("YouTube", "US").await;
    for video in feed.iter().take(5) {
        println!("{} — {} ({})", video.title, video.uploader, video.views);
    }

    // Search and completions.
    let _ = vidra.search("ocean documentary", "PeerTube").await;
    let _ = vidra.suggestions("ocean doc").await;

    // Stream resolution for the first trending hit, if any.
    if let Some(first) = feed.first() {
        if let Some(url) = vidra.stream_url(&first.id, "YouTube").await {
            println!("playable: {url}");
        }
    }

    Ok(())
}
