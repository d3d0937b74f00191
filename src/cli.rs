use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const FILES_FLAG: &str = "-f";

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory as an indented tree", long_about = None)]
pub struct Cli {
    /// Root directory to print
    pub path: PathBuf,

    /// Pass -f to include files, annotated with their size. Any other value is ignored
    #[arg(value_name = "-f", allow_hyphen_values = true)]
    pub mode: Option<OsString>,
}

impl Cli {
    pub fn include_files(&self) -> bool {
        self.mode.as_deref() == Some(OsStr::new(FILES_FLAG))
    }
}
