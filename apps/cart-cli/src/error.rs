use cart_csvs::CartError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("{count} validation error(s) in {file}")]
    InvalidCart { file: String, count: usize },
}
