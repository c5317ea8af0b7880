use deadletter::app::{exit_with_usage, run_pipeline};
use deadletter::prelude::*;
use tokio_util::compat::TokioAsyncWriteCompatExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::load(std::env::args(), std::env::vars()) {
        Ok(config) => config,
        Err(e) => exit_with_usage(&e),
    };

    CliApp::new("deadletter")
        .run(|stdout| async move {
            // Successes on stdout, dead letters to --error-file or the log
            run_pipeline(stdout.compat_write(), &config).await?;
            Ok::<(), AppError>(())
        })
        .await
}
