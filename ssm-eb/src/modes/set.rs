use std::{
    fmt,
    io::{self, BufRead, Write},
};

use tracing::info;

use crate::{
    domain::{ParameterPath, ParameterSet},
    storage::repository::{ParameterAdminRepository, RepositoryError},
};

#[derive(Debug)]
pub enum SetError {
    Input {
        path: ParameterPath,
        source: io::Error,
    },
    Repository(RepositoryError),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { path, .. } => write!(f, "Failed to read value for `{}`", path),
            Self::Repository(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            Self::Repository(_) => None,
        }
    }
}

impl From<RepositoryError> for SetError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

/// Interactive source of parameter values: writes a prompt to `writer` and
/// reads one line from `reader`.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Only the trailing newline is removed; any other whitespace is part of the value.
    /// Input that ends before a newline is an error, even when some bytes were read.
    pub fn read_value(&mut self, path: &ParameterPath) -> io::Result<String> {
        write!(self.writer, "* Input value for `{}`: ", path)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        match line.strip_suffix('\n') {
            Some(value) => Ok(value.to_string()),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input before a newline",
            )),
        }
    }
}

/// Stores every component parameter, in order. External parameters are never
/// written. A literal `value` from the input file is used as-is, otherwise the
/// value is read from `prompt`. The first failure aborts; parameters stored
/// before it stay stored. Returns the number of parameters stored.
pub async fn store_parameters<A, R, W>(
    repository: &A,
    parameters: &ParameterSet,
    prompt: &mut Prompt<R, W>,
) -> Result<usize, SetError>
where
    A: ParameterAdminRepository + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut stored = 0;

    for spec in parameters.component() {
        let value = match spec.literal_value() {
            Some(value) => {
                info!("Setting value for `{}`", spec.path());
                value.to_string()
            }
            None => prompt
                .read_value(spec.path())
                .map_err(|source| SetError::Input {
                    path: spec.path().clone(),
                    source,
                })?,
        };

        repository
            .store(spec.path(), spec.description(), &value)
            .await?;
        stored += 1;
    }

    Ok(stored)
}
