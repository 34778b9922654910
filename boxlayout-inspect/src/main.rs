//! boxlayout-inspect - run a box layout over a scene file and report the
//! resulting geometry.

mod cli;
mod logging;
mod scene;

use anyhow::{Context, Result};
use boxlayout::{theme, Size, Theme};
use clap::Parser;

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::scene::Scene;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Some(path) = &args.theme {
        let theme = Theme::load(path)
            .with_context(|| format!("failed to load theme '{}'", path.display()))?;
        theme::set_current(theme);
    }

    let mut scene = Scene::load(&args.scene)
        .with_context(|| format!("failed to load scene '{}'", args.scene.display()))?;

    if let Some(axis) = args.axis {
        scene.axis = axis.into();
    }
    if let Some(padding) = args.padding {
        if !padding.is_finite() || padding < 0.0 {
            anyhow::bail!("--padding must be finite and non-negative, got {padding}");
        }
        scene.padding = Some(padding);
    }
    if args.width.is_some() || args.height.is_some() {
        let base = scene
            .size
            .unwrap_or_else(|| scene.box_layout().min_size(&scene.children));
        scene.size = Some(Size::new(
            args.width.unwrap_or(base.width),
            args.height.unwrap_or(base.height),
        ));
    }
    scene.validate().context("invalid scene after overrides")?;

    let report = scene.run();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
