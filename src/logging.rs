use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use env_logger::{Env, Target, WriteStyle};

/// Where diagnostic records go. The interactive UI owns the terminal, so it
/// logs to a file; one-shot modes can use stderr.
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Install the global logger. Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init(target: LogTarget) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
        }
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
    }
    builder.try_init()?;
    Ok(())
}
