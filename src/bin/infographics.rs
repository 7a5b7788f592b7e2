use std::path::PathBuf;

use clap::Parser;

use infographics::{
    DEFAULT_IMAGE_WIDTH, DEFAULT_SPACING, FlatBlockRenderer, FrequencyPaletteService,
    HeadlineScriptGenerator, InfographicPipeline, JsonArticleSource, PipelineConfig, run_batch,
};

#[derive(Parser, Debug)]
#[command(
    name = "infographics",
    version,
    about = "Generate an infographic from the most recent stored news article"
)]
struct Cli {
    /// Directory of stored article JSON files.
    #[arg(long)]
    articles: PathBuf,

    /// Output path for the final infographic PNG.
    #[arg(long, default_value = "infographics.png")]
    out: PathBuf,

    /// Directory for the rendered section PNGs.
    #[arg(long, default_value = "sections")]
    section_dir: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    width: u32,

    /// Vertical spacing before each section, in pixels.
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    spacing: u32,

    /// Center sections horizontally instead of the compatible left-aligned
    /// paste.
    #[arg(long, default_value_t = false)]
    center: bool,
}

// Batch surface: every failure is logged and the process still exits 0.
fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_target(false).init();

    let config = PipelineConfig {
        image_width: cli.width,
        output_path: cli.out,
        section_paths: [
            cli.section_dir.join("section_01.png"),
            cli.section_dir.join("section_02.png"),
        ],
        spacing: cli.spacing,
        center_sections: cli.center,
    };

    let pipeline = InfographicPipeline::new(
        config,
        HeadlineScriptGenerator,
        FrequencyPaletteService,
        FlatBlockRenderer::default(),
    );
    let mut pipeline = match pipeline {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "invalid pipeline configuration");
            return;
        }
    };

    let mut source = JsonArticleSource::new(cli.articles);
    if run_batch(&mut source, &mut pipeline) {
        tracing::info!("batch run completed");
    }
}
