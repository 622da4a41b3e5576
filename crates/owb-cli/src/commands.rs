//! Command orchestration: resolve defaults, run the matching pipeline.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use owb_transform::YearRange;

use crate::cli::{CleanArgs, FillArgs, InspectArgs, WideArgs};
use crate::pipeline::{
    WideOptions, run_clean_pipeline, run_fill_pipeline, run_inspect, run_wide_pipeline,
};
use crate::types::{CleanRunResult, FillRunResult, InspectRunResult, WideRunResult};

pub fn run_wide(args: &WideArgs) -> Result<WideRunResult> {
    if args.from_year > args.to_year {
        bail!(
            "--from-year ({}) must not exceed --to-year ({})",
            args.from_year,
            args.to_year
        );
    }
    let output = args.output.clone().unwrap_or_else(|| {
        default_output(
            &args.input,
            &format!("_wide_{}_{}", args.from_year, args.to_year),
        )
    });
    run_wide_pipeline(&WideOptions {
        input: &args.input,
        output: &output,
        range: YearRange {
            from: args.from_year,
            to: args.to_year,
        },
    })
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_clean"));
    run_clean_pipeline(&args.input, &output)
}

pub fn run_fill(args: &FillArgs) -> Result<FillRunResult> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_filled"));
    run_fill_pipeline(&args.input, &output)
}

pub fn run_inspect_command(args: &InspectArgs) -> Result<InspectRunResult> {
    run_inspect(&args.input, &args.column, args.limit)
}

/// Place derived outputs next to the input file.
fn default_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{suffix}.csv"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::default_output;

    #[test]
    fn default_output_keeps_directory_and_adds_suffix() {
        let path = default_output(Path::new("data/oecd_hows_life.csv"), "_wide_2010_2024");
        assert_eq!(
            path,
            Path::new("data/oecd_hows_life_wide_2010_2024.csv")
        );
    }
}
