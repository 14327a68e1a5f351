pub mod layout;

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::debug;

use crate::util::fs::{ensure_dir, ensure_empty_file};

pub use layout::AUDIO_UI;

const SUMMARY: &str = "Successfully extended project structure.";

/// One directory of the skeleton and the empty files it holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entry {
    /// Path relative to the base directory, `/`-separated.
    pub dir: &'static str,
    pub files: &'static [&'static str],
}

impl Entry {
    pub const fn new(dir: &'static str, files: &'static [&'static str]) -> Self {
        Self { dir, files }
    }
}

/// Something `build` created, named relative to the base directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Created {
    Directory(String),
    File(String),
}

impl Created {
    pub fn path(&self) -> &str {
        match self {
            Created::Directory(path) | Created::File(path) => path.as_str(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub created: Vec<Created>,
}

/// An ordered, immutable directory → files table that can be realized on disk.
#[derive(Clone, Copy, Debug)]
pub struct Scaffold<'a> {
    entries: &'a [Entry],
}

impl Scaffold<'static> {
    pub fn audio_ui() -> Self {
        Self::new(AUDIO_UI)
    }
}

impl<'a> Scaffold<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// Create every missing directory and empty file under `base`, writing one
    /// progress line per creation to `out` and a summary line at the end.
    ///
    /// Nothing that already exists is modified. The first filesystem error
    /// aborts the walk and leaves whatever was created so far in place.
    pub fn build(&self, base: &Utf8Path, out: &mut impl Write) -> Result<BuildReport> {
        let meta = fs::metadata(base).with_context(|| format!("base directory {}", base))?;
        if !meta.is_dir() {
            bail!("base directory {} is not a directory", base);
        }
        debug!(base = %base, entries = self.entries.len(), "building scaffold");

        let mut report = BuildReport::default();
        for entry in self.entries {
            let dir_path = base.join(entry.dir);
            if ensure_dir(dir_path.as_std_path())
                .with_context(|| format!("creating directory {}", dir_path))?
            {
                progress(out, format_args!("Created directory: {}", entry.dir))?;
                report.created.push(Created::Directory(entry.dir.to_owned()));
            } else {
                debug!(path = %dir_path, "directory already present");
            }

            for file in entry.files {
                let file_path = dir_path.join(file);
                if ensure_empty_file(file_path.as_std_path())
                    .with_context(|| format!("creating file {}", file_path))?
                {
                    let rel = format!("{}/{}", entry.dir, file);
                    progress(out, format_args!("Created file: {}", rel))?;
                    report.created.push(Created::File(rel));
                } else {
                    debug!(path = %file_path, "file already present");
                }
            }
        }

        progress(out, format_args!("{}", SUMMARY))?;
        Ok(report)
    }
}

fn progress(out: &mut impl Write, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", line).context("writing progress output")
}
