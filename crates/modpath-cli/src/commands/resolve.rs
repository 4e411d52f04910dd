use miette::{IntoDiagnostic, Result};
use modpath_core::resolver::DiagnosticSink;
use modpath_core::{
    CollectingSink, CwdSetting, Mode, NodeProbe, Resolution, ResolutionOptions, ResolveContext,
    ResolveWarning, ResolverSettings, Strategy, TracingSink,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Exit code when the specifier resolves.
const EXIT_RESOLVED: i32 = 0;
/// Exit code when every strategy misses.
const EXIT_UNRESOLVED: i32 = 1;

pub struct ResolveArgs<'a> {
    pub cwd: &'a Path,
    pub specifier: &'a str,
    pub file: &'a Path,
    pub config: Option<&'a Path>,
    pub production: bool,
    pub json: bool,
}

/// Resolve result for JSON output.
#[derive(Serialize)]
struct ResolveJsonResult<'a> {
    ok: bool,
    specifier: &'a str,
    file: PathBuf,
    resolved: Option<&'a str>,
    strategy: Option<Strategy>,
    mode: Mode,
    warnings: &'a [ResolveWarning],
}

/// Run the resolve command. Returns the process exit code.
pub fn run(args: &ResolveArgs<'_>) -> Result<i32> {
    let mut settings = match args.config {
        Some(path) => ResolverSettings::load(&args.cwd.join(path)).into_diagnostic()?,
        None => ResolverSettings::default(),
    };
    if settings.cwd.is_none() {
        settings.cwd = Some(CwdSetting::Directory(args.cwd.to_path_buf()));
    }

    let file = args.cwd.join(args.file);

    let mut options = ResolutionOptions::normalize(&settings, &file).into_diagnostic()?;
    if args.production {
        options.mode = Mode::Production;
    }

    let sink = CollectingSink::new();
    let ctx = ResolveContext::new(&options, &NodeProbe, &sink);
    let resolution = modpath_core::resolve_path(&ctx, args.specifier, &file);
    let warnings = sink.take();

    if args.json {
        let result = ResolveJsonResult {
            ok: resolution.is_resolved(),
            specifier: args.specifier,
            file,
            resolved: resolution.specifier(),
            strategy: resolution.strategy(),
            mode: options.mode,
            warnings: &warnings,
        };
        let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
        println!("{json}");
    } else {
        for warning in &warnings {
            TracingSink.warn(warning.clone());
        }
        print_human(args.specifier, options.mode, &resolution);
    }

    Ok(if resolution.is_resolved() {
        EXIT_RESOLVED
    } else {
        EXIT_UNRESOLVED
    })
}

fn print_human(specifier: &str, mode: Mode, resolution: &Resolution) {
    println!("Specifier: {specifier}");
    println!("Mode: {}", mode.as_str());
    match resolution {
        Resolution::Resolved {
            specifier,
            strategy,
        } => {
            println!("Resolved: {specifier}");
            println!("Strategy: {strategy}");
        }
        Resolution::Unresolved => println!("Status: UNRESOLVED"),
    }
}
