use crate::cleanup_items::get_all_cleanup_targets;
use crate::config::CleanConfig;
use crate::platform::PlatformMode;
use clap::Parser;
use std::path::PathBuf;

/// Remove build artifacts and temporary files from a project directory
#[derive(Parser, Debug)]
#[command(name = "clean-build", version, about)]
pub struct Cli {
    /// `--windows` selects del /F /Q; any other value, or none, selects rm -rf
    #[arg(value_name = "PLATFORM", allow_hyphen_values = true)]
    pub platform: Option<String>,

    /// Additional file, directory or glob pattern to remove
    #[arg(short = 't', long = "target", value_name = "PATTERN")]
    pub targets: Vec<String>,

    /// Directory to clean (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Do not run `make clean` even if a Makefile is present
    #[arg(long)]
    pub no_build_clean: bool,

    /// Log the commands instead of running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Debug logging and a summary at the end
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve into a run configuration, falling back to `cwd` for the directory
    pub fn into_config(self, cwd: PathBuf) -> CleanConfig {
        CleanConfig {
            directory: self.directory.unwrap_or(cwd),
            mode: PlatformMode::from_arg(self.platform.as_deref()),
            targets: get_all_cleanup_targets(self.targets),
            build_clean: !self.no_build_clean,
            dry_run: self.dry_run,
            ..CleanConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_defaults_to_posix() {
        let cli = Cli::try_parse_from(["clean-build"]).unwrap();
        let config = cli.into_config(PathBuf::from("/proj"));
        assert_eq!(config.mode, PlatformMode::Posix);
        assert_eq!(config.directory, PathBuf::from("/proj"));
        assert!(config.build_clean);
        assert!(!config.dry_run);
    }

    #[test]
    fn windows_flag_selects_windows() {
        let cli = Cli::try_parse_from(["clean-build", "--windows"]).unwrap();
        assert_eq!(cli.into_config(PathBuf::new()).mode, PlatformMode::Windows);
    }

    #[test]
    fn any_other_platform_value_selects_posix() {
        for args in [
            vec!["clean-build", "--linux"],
            vec!["clean-build", "posix"],
            vec!["clean-build", "--Windows"],
        ] {
            let cli = Cli::try_parse_from(args.clone()).unwrap();
            assert_eq!(cli.into_config(PathBuf::new()).mode, PlatformMode::Posix, "{:?}", args);
        }
    }

    #[test]
    fn platform_value_mixes_with_options() {
        let cli = Cli::try_parse_from(["clean-build", "-n", "--windows", "-t", "bin"]).unwrap();
        let config = cli.into_config(PathBuf::new());
        assert_eq!(config.mode, PlatformMode::Windows);
        assert!(config.dry_run);
        assert_eq!(config.targets.len(), 4);
    }

    #[test]
    fn extra_targets_follow_defaults() {
        let cli = Cli::try_parse_from(["clean-build", "-t", "bin", "--target", "*.pdb"]).unwrap();
        let patterns: Vec<String> = cli
            .into_config(PathBuf::new())
            .targets
            .iter()
            .map(|t| t.pattern().to_string())
            .collect();
        assert_eq!(patterns, ["obj", "*.suo", "*.sdf", "bin", "*.pdb"]);
    }

    #[test]
    fn directory_override_wins() {
        let cli = Cli::try_parse_from(["clean-build", "-C", "/other", "--no-build-clean", "-n"])
            .unwrap();
        let config = cli.into_config(PathBuf::from("/proj"));
        assert_eq!(config.directory, PathBuf::from("/other"));
        assert!(!config.build_clean);
        assert!(config.dry_run);
    }
}
