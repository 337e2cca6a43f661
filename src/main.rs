use clap::Parser;
use tracing_subscriber::EnvFilter;

use devresume::{server, Config, GitHubClient, PipelineConfig, ResumePipeline};

#[derive(Parser, Debug)]
#[command(name = "devresume")]
#[command(version = "0.1.0")]
#[command(about = "Serve GitHub profile data for developer résumés")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Number of merged pull requests to inspect
    #[arg(long)]
    pr_limit: Option<u32>,

    /// Maximum number of organizations to report
    #[arg(long)]
    org_limit: Option<usize>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("devresume=info".parse()?)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("actix_web=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Fails fast when GITHUB_TOKEN is missing
    let config = Config::from_env()?;

    let github = GitHubClient::new(&config)?;

    let mut pipeline_config = PipelineConfig::from(&config);
    if let Some(pr_limit) = args.pr_limit {
        pipeline_config.pr_limit = pr_limit;
    }
    if let Some(org_limit) = args.org_limit {
        pipeline_config.org_limit = org_limit;
    }

    let pipeline = ResumePipeline::new(github, pipeline_config);

    server::run_server(pipeline, &args.host, args.port).await?;

    Ok(())
}
