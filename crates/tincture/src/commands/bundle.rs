use tincture_style::bundle::bundle;

use crate::cli::BundleArgs;
use crate::config::Config;
use crate::error::Result;

pub fn run(args: BundleArgs, config: &Config) -> Result<()> {
    let styles_dir = args.styles.as_deref().unwrap_or(&config.styles_dir);
    let layout = config.bundle_layout(styles_dir);

    let generator = (!args.skip_generator && !config.bundle.generator.is_empty())
        .then_some(config.bundle.generator.as_slice());

    let report = bundle(&layout, generator)?;
    println!("{} ({} lines)", report.bundle.display(), report.lines);
    Ok(())
}
