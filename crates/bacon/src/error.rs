/// Errors that end argument processing before any step runs
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no arguments given")]
    NoArguments,

    /// Anything else clap reports, including `--version`
    #[error(transparent)]
    Clap(#[from] clap::Error),
}
