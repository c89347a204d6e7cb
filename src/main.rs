use easylook_rs::color_pipeline::{AnalysisConfig, ColorAnalysisPipeline, ColorSpace};
use easylook_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting easylook...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.tif".to_string());

    let config = AnalysisConfig::builder()
        .color_space(ColorSpace::Ratio)
        .sample_rate(10)
        .build();
    let pipeline = ColorAnalysisPipeline::new(config);

    info!("Color analysis pipeline initialized");
    info!("Color space: {:?}", pipeline.config().color_space);
    info!("Sample rate: {}", pipeline.config().sample_rate);

    match pipeline.process_file(&path) {
        Ok(result) => info!(
            "Analyzed {} ({}x{}, {}): {} points in {} / {}",
            result.file_info.filename,
            result.file_info.width,
            result.file_info.height,
            result.file_info.file_size,
            result.point_count,
            result.x_label,
            result.y_label,
        ),
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
