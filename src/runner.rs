use std::io;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::cli::Cli;
use crate::scaffold::Scaffold;

pub fn run(cli: Cli) -> Result<()> {
    let base = resolve_base_dir(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = Scaffold::audio_ui().build(&base, &mut out)?;
    for created in &report.created {
        debug!(path = created.path(), "created");
    }
    Ok(())
}

fn resolve_base_dir(cli: &Cli) -> Result<Utf8PathBuf> {
    let path = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("determining current directory")?,
    };
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("base directory {} is not valid UTF-8", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn explicit_base_dir_wins() {
        let cli = Cli {
            base_dir: Some(PathBuf::from("site")),
        };
        assert_eq!(resolve_base_dir(&cli).unwrap(), Utf8PathBuf::from("site"));
    }

    #[test]
    fn defaults_to_current_dir() {
        let cli = Cli { base_dir: None };
        let expected = std::env::current_dir().unwrap();
        assert_eq!(resolve_base_dir(&cli).unwrap().as_std_path(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_base_dir_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let cli = Cli {
            base_dir: Some(PathBuf::from(OsString::from_vec(vec![b'a', 0xff]))),
        };
        let err = resolve_base_dir(&cli).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
