use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The input stream reached its end while a prompt was still waiting for a value.
    #[error("Input closed before a valid answer was given.")]
    InputClosed,

    /// An option prompt was asked to choose from an empty list.
    #[error("Cannot proceed: no options to choose from.")]
    NoOptions,

    #[error("Invalid console configuration: {0}.")]
    InvalidConfig(String),
}

/// Convenience type alias for Results with the crate [`Error`] as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
