use dv_core::Route;
use dv_verify::{ImagePayload, ImageSlot};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImageArgs;
use crate::commands::shared::analysis::{AnalysisResponse, analyze};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImageDetails {
    file_name: Option<String>,
    format: String,
    mime: &'static str,
    size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_url: Option<String>,
}

impl ImageDetails {
    fn describe(image: &ImagePayload, include_data_url: bool) -> Self {
        Self {
            file_name: image.file_name().map(str::to_string),
            format: image.format().to_string(),
            mime: image.format().mime(),
            size_bytes: image.size(),
            data_url: include_data_url.then(|| image.data_url()),
        }
    }
}

/// Handle `dv image`.
pub async fn handle(args: &ImageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut gate = ctx.mount(Route::ImageAnalysis)?;

    // Size and type are checked on intake, before the slot ever sees the file.
    let image = ImagePayload::from_path(&args.path, ctx.config.analysis.max_image_bytes)?;
    tracing::debug!(
        file = ?image.file_name(),
        format = %image.format(),
        size = image.size(),
        "image uploaded"
    );
    let details = ImageDetails::describe(&image, args.data_url);

    let mut slot = ImageSlot::new();
    slot.submit(image)?;

    let mut workflow = ctx.workflow();
    let result = analyze(&mut workflow, &mut slot, &mut gate, "Analyzing...").await?;

    output(&AnalysisResponse::new(&gate, result, details), flags.format)
}
