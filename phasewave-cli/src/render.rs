use crate::config::load_config;
use crate::input::load_samples;
use anyhow::{Context, Result, bail};
use shared::{ChartSection, StatSample, TimeMs};
use std::io::Write;
use std::path::PathBuf;
use visualizer::{ChartPanel, ChartSession, Domain, ZoomOutcome};

pub struct RenderOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

pub fn run_render(options: RenderOptions) -> Result<()> {
    let config = load_config(options.config.as_deref())?;
    let samples = load_samples(&options.input)?;
    let panels = render_panels(samples, &config.chart, options.from, options.to)?;

    let json = if options.pretty {
        serde_json::to_string_pretty(&panels)
    } else {
        serde_json::to_string(&panels)
    }
    .context("Failed to serialize panels")?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write output: {}", path.display()))?;
            log::info!("wrote {} panels to {}", panels.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Builds panels for the whole data range, or for `[from, to]` when either bound is given.
///
/// A missing bound falls back to the matching edge of the full range.
pub fn render_panels(
    samples: Vec<StatSample>,
    chart: &ChartSection,
    from: Option<u64>,
    to: Option<u64>,
) -> Result<Vec<ChartPanel>> {
    let mut session = ChartSession::with_config(chart)?;
    session.load(samples);

    let Some(full) = session.full_domain() else {
        log::warn!("no samples to render");
        return Ok(Vec::new());
    };

    if from.is_some() || to.is_some() {
        let requested = Domain::new(
            from.map(TimeMs::from_millis).unwrap_or(full.lo),
            to.map(TimeMs::from_millis).unwrap_or(full.hi),
        );
        match session.zoom_to(requested) {
            ZoomOutcome::Applied(domain) => log::info!("rendering {domain}"),
            ZoomOutcome::Degenerate => bail!("requested range {requested} is empty"),
            ZoomOutcome::OutOfRange => bail!("requested range {requested} lies outside the data range {full}"),
            ZoomOutcome::Ignored => bail!("requested range {requested} could not be applied"),
        }
    }

    Ok(session.panels().to_vec())
}
