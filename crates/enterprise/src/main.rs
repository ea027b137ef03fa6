#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::crate_version;
use enterprise_schema::SchemaOptions;
use enterprise_server::ServeConfig;
use mimalloc::MiMalloc;
use tokio::runtime;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod config;
mod logging;

const THREAD_NAME: &str = "enterprise";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    if args.print_schema {
        print!("{}", enterprise_schema::sdl());
        return Ok(());
    }

    logging::init(args.log_level, args.log_style)?;

    let config = self::config::load(&args)?;

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        let crate_version = crate_version!();
        tracing::info!("Enterprise {crate_version}");
        tracing::debug!(enterprise_web = %config.enterprise_web.display(), "web directory");

        let listen_address = args.listen_address.unwrap_or_else(|| config.listen_address());

        let schema = enterprise_schema::build(SchemaOptions {
            introspection: config.graph.introspection,
        });

        let config = ServeConfig { listen_address, config };

        tracing::info!("Starting the server");

        enterprise_server::serve(config, schema).await.map_err(|error| {
            tracing::error!("{error}");
            anyhow::Error::from(error)
        })
    })
}
