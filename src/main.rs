use clap::{Parser, ValueEnum};
use nordfetch::config::{load_config, Config};
use nordfetch::display::{render, Art, Output, RenderOptions};
use nordfetch::logging::init_logging;
use nordfetch::{collect_system_info, Distro, ProbeContext};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Banner selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Detect the running distribution
    Auto,
    Bedrock,
    Gentoo,
    Cachyos,
    Generic,
}

impl ThemeArg {
    fn distro(self) -> Option<Distro> {
        match self {
            ThemeArg::Auto => None,
            ThemeArg::Bedrock => Some(Distro::Bedrock),
            ThemeArg::Gentoo => Some(Distro::Gentoo),
            ThemeArg::Cachyos => Some(Distro::CachyOs),
            ThemeArg::Generic => Some(Distro::Generic),
        }
    }
}

/// A small system information fetch tool
#[derive(Parser, Debug)]
#[command(name = "nordfetch", version, about)]
struct Args {
    /// Banner to draw
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    theme: ThemeArg,

    /// Config file to use instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// PCI ID registry to try before the configured ones
    #[arg(long, value_name = "PATH")]
    pci_ids: Option<PathBuf>,

    /// Show every display adapter
    #[arg(long)]
    all_gpus: bool,

    /// Plain output without escape codes
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref()).unwrap_or_else(|err| {
        warn!(error = %err, "invalid config, using defaults");
        Config::default()
    });
    if args.all_gpus {
        config.display.show_all_gpus = true;
    }

    let mut ctx = ProbeContext::system();
    ctx.registry_paths = config.registry_paths();
    if let Some(path) = args.pci_ids {
        ctx.registry_paths.insert(0, path);
    }

    let info = collect_system_info(&ctx);
    let distro = args
        .theme
        .distro()
        .or(config.display.theme)
        .unwrap_or(info.distro);
    info!(detected = %info.distro, banner = %distro, "collected system info");

    let color = config.display.color && !args.no_color && !no_color_env();
    let art = Art::select(distro, config.ascii_path().as_deref());
    let opts = RenderOptions::from_config(&config);

    let mut out = Output::new(color);
    render(&mut out, &art, &info, &opts);

    if let Err(err) = out.write_to(&mut io::stdout().lock()) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        error!(error = %err, "failed to write output");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "nordfetch",
            "--theme",
            "cachyos",
            "--pci-ids",
            "/tmp/pci.ids",
            "--all-gpus",
            "--no-color",
            "-vv",
        ]);
        assert_eq!(args.theme.distro(), Some(Distro::CachyOs));
        assert_eq!(args.pci_ids, Some(PathBuf::from("/tmp/pci.ids")));
        assert!(args.all_gpus);
        assert!(args.no_color);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_theme_defaults_to_auto() {
        let args = Args::parse_from(["nordfetch"]);
        assert_eq!(args.theme, ThemeArg::Auto);
        assert_eq!(args.theme.distro(), None);
        assert!(Args::try_parse_from(["nordfetch", "--theme", "windows"]).is_err());
    }
}
