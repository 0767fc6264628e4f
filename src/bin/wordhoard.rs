//! Wordhoard server binary.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{info, warn};

use wordhoard::cache::ResourceCache;
use wordhoard::cli::WordhoardArgs;
use wordhoard::dictionary::DictionaryRegistry;
use wordhoard::service::Dispatcher;
use wordhoard::service::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = WordhoardArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let registry = DictionaryRegistry::from_dir(&args.dict_dir).with_context(|| {
        format!(
            "failed to read dictionaries from {}",
            args.dict_dir.display()
        )
    })?;
    if registry.is_empty() {
        warn!("No dictionaries found in {}", args.dict_dir.display());
    }
    info!("Registered dictionaries: {:?}", registry.ids());

    let cache = Arc::new(ResourceCache::with_defaults(registry));

    if !args.lazy_init {
        let warming = Arc::clone(&cache);
        tokio::task::spawn_blocking(move || {
            if let Err(err) = warming.warm_all() {
                warn!("Warming dictionaries failed: {err}");
            }
        });
    }

    let dispatcher = Arc::new(Dispatcher::new(cache, args.service_config()));
    serve(args.addr(), dispatcher).await?;

    Ok(())
}
