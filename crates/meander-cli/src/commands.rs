use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use meander_core::{
    shutdown_signal, ConfigLoader, FlowConfig, GridRenderer, MeanderConfig, PatternBuilder,
    PatternConfig, ScrollAnimator,
};
use std::io::{self, Write};
use std::path::Path;

/// Run the parsed command line against stdout.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_settings(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Pattern { order, stages } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_pattern(&config.pattern, order, stages, &mut out)
        }
        Commands::Flow {
            order,
            freq,
            count,
            marker,
        } => {
            let flow = flow_settings(&config.flow, cli.config.is_some(), freq, marker);
            let mut out = io::stdout();
            run_flow(&config.pattern, &flow, order, count, &mut out).await
        }
    }
}

/// Read `--config` if one was given, otherwise fall back to defaults.
pub async fn load_settings(path: Option<&Path>) -> Result<MeanderConfig> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from file: {}", path.display());
            let config = ConfigLoader::from_file(path).await?;
            Ok(config)
        }
        None => Ok(MeanderConfig::default()),
    }
}

/// Apply command-line overrides on top of the flow settings. `from_file` says
/// whether `base` came from a config file rather than the built-in defaults;
/// only then is a differing `--freq` worth a warning.
pub fn flow_settings(
    base: &FlowConfig,
    from_file: bool,
    freq: Option<i64>,
    marker: Option<char>,
) -> FlowConfig {
    let mut flow = base.clone();
    if let Some(freq) = freq {
        if from_file && freq != base.frequency {
            log::warn!(
                "--freq {} overrides configured frequency {}",
                freq,
                base.frequency
            );
        } else {
            log::debug!("Flow frequency set to {} from the command line", freq);
        }
        flow = flow.with_frequency(freq);
    }
    if let Some(marker) = marker {
        flow = flow.with_marker(marker);
    }
    flow
}

pub fn run_pattern<W: Write>(
    config: &PatternConfig,
    order: u32,
    stages: bool,
    out: &mut W,
) -> Result<()> {
    log::info!("Printing pattern of order {}", order);
    let builder = PatternBuilder::from_config(config);
    let renderer = GridRenderer::from_config(config);

    if stages {
        for (generation, sequence) in builder.stages(order)?.iter().enumerate() {
            if generation > 0 {
                writeln!(out)?;
            }
            writeln!(out, "order {}:", generation)?;
            renderer.print(sequence, out)?;
        }
    } else {
        let sequence = builder.build(order)?;
        renderer.print(&sequence, out)?;
    }
    Ok(())
}

/// Scroll the pattern until `count` lines were printed or the process is
/// interrupted. An interrupt is a normal exit.
pub async fn run_flow<W: Write>(
    pattern: &PatternConfig,
    flow: &FlowConfig,
    order: u32,
    count: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let sequence = PatternBuilder::from_config(pattern).build(order)?;
    let animator = ScrollAnimator::from_config(sequence, flow)
        .with_context(|| format!("Cannot scroll at frequency {}", flow.frequency))?;
    log::info!(
        "Starting flow of order {} at {} lines per minute",
        order,
        flow.frequency
    );

    let scrolling = async {
        match count {
            Some(ticks) => animator.run_for(ticks, out).await,
            None => animator.run(out).await,
        }
    };

    tokio::select! {
        res = scrolling => res?,
        _ = shutdown_signal() => {
            log::info!("Flow interrupted");
        }
    }
    Ok(())
}
