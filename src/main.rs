use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pinhole_tracer::cli::Args;
use pinhole_tracer::logger::init_logger;
use pinhole_tracer::render_scene;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let config = args.to_config();
    let scene = args.scene.into();
    let started = Instant::now();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            render_scene(&config, scene, &mut out)
                .with_context(|| format!("failed to render to {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            render_scene(&config, scene, &mut out).context("failed to render to stdout")?;
        }
    }

    info!("Render finished in {:.2?}", started.elapsed());
    Ok(())
}
