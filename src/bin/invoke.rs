use blog_tweet::invoke::content_ref_handler;
use blog_tweet::local::{self, ContentArgs};
use blog_tweet::pipeline::Announcer;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let args = ContentArgs::parse();

    match args.local_source() {
        Ok(Some(source)) => {
            blog_tweet::setup_local_logging();
            local::run_and_report(&source).await;
            return Ok(());
        }
        Ok(None) => {}
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    }

    blog_tweet::setup_logging();
    let startup = Announcer::from_env();
    if let Err(e) = &startup {
        error!("Startup failed, every invocation will report it: {}", e);
    }

    lambda_runtime::run(lambda_runtime::service_fn(|event| {
        content_ref_handler(&startup, event)
    }))
    .await
}
