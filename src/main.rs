use anyhow::Result;
use clap::Parser;
use egress_uploader::{
    application::usecases::upload_artifact::UploadArtifactUseCase,
    config,
    domain::value_objects::enums::output_types::OutputType,
    infrastructure::storages::http_put::HttpPutUploader,
};
use std::sync::Arc;
use tracing::{error, info};

/// Upload one finished egress artifact with a single HTTP PUT.
///
/// The endpoint and timeout come from PUT_UPLOAD_ENDPOINT and
/// PUT_UPLOAD_TIMEOUT_SECS (environment or `.env`).
#[derive(Parser)]
#[command(name = "put-upload")]
struct Cli {
    /// Local file to upload
    local_path: String,
    /// Destination key, appended to the endpoint after a `/`
    storage_path: String,
    /// Output type hint: short name (mp4, hls, ...) or MIME string
    #[arg(long, default_value = "unknown")]
    output_type: OutputType,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(error) = run().await {
        error!("put-upload exited with error: {:#}", error);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    egress_uploader::observability::init_observability("put-upload")?;

    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    let uploader = Arc::new(HttpPutUploader::new(
        dotenvy_env.put_upload.endpoint.clone(),
        dotenvy_env.put_upload.timeout(),
    ));
    let usecase = UploadArtifactUseCase::new(uploader);

    let result = usecase
        .execute(&cli.local_path, &cli.storage_path, cli.output_type)
        .await?;

    println!("{}\t{}", result.url, result.size_bytes);
    Ok(())
}
