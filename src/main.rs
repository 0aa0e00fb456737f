use anyhow::Context;
use clap::Parser;
use contracts_enricher::{
    dataset, explorer::ExplorerClient, output, Args, ChainRegistry, Dispatcher, Settings,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut settings = Settings::new(args.config_path.clone()).context("failed to read config")?;
    args.apply(&mut settings);

    let contracts = dataset::load_contracts(&settings.input.path, &settings.input)
        .await
        .context("loading input contracts")?;
    log::info!(
        "loaded {} contracts from {:?}",
        contracts.len(),
        settings.input.path
    );

    let client = ExplorerClient::new(&settings.explorer).context("building explorer client")?;
    let registry = ChainRegistry::with_overrides(settings.chains.clone());
    log::info!(
        "known origin keys: {}",
        registry.origin_keys().collect::<Vec<_>>().join(", ")
    );
    let dispatcher = Dispatcher::new(client, registry, settings.dispatcher.concurrency);

    let (processed_contracts, stats) = dispatcher
        .run(contracts, settings.dispatcher.max_to_process)
        .await;

    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("serializing run stats")?
    );
    if let Some(stats_path) = &settings.output.stats_path {
        output::write_stats(stats_path, &stats).await?;
    }
    output::write_contracts(&settings.output.contracts_path, &processed_contracts).await?;
    log::info!(
        "processed contracts saved to {:?}",
        settings.output.contracts_path
    );

    Ok(())
}
