//! Input source selection.
//!
//! Colors are read from `--file` when given, otherwise from standard input.
//! Standard input is only accepted when it is piped (not a terminal) and has
//! at least one byte to read, so the program never sits waiting on a prompt.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("pipe input is invalid: stdin is a terminal")]
    Terminal,
    #[error("pipe input is invalid: stdin is empty")]
    Empty,
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Open the line source: the file at `path`, or validated standard input.
///
/// Prints a short note naming the chosen source. The returned reader is
/// released when dropped.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, InputError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            println!("Reading from file {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            let stdin = io::stdin();
            let terminal = stdin.is_terminal();
            let reader = validate_pipe(stdin.lock(), terminal)?;
            println!("Reading from stdin");
            Ok(Box::new(reader))
        }
    }
}

/// Reject a terminal or an empty stream. Peeks without consuming.
pub fn validate_pipe<R: BufRead>(mut reader: R, is_terminal: bool) -> Result<R, InputError> {
    if is_terminal {
        return Err(InputError::Terminal);
    }
    if reader.fill_buf()?.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn terminal_is_rejected_before_reading() {
        let err = validate_pipe(Cursor::new(b"fff\n".to_vec()), true).unwrap_err();
        assert!(matches!(err, InputError::Terminal));
    }

    #[test]
    fn empty_pipe_is_rejected() {
        let err = validate_pipe(Cursor::new(Vec::new()), false).unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[test]
    fn validation_does_not_consume_input() {
        let reader = validate_pipe(Cursor::new(b"#fff\nabc\n".to_vec()), false).unwrap();
        let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(lines, ["#fff", "abc"]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let path = std::env::temp_dir().join("hexpaint-input-does-not-exist.txt");
        let err = open_input(Some(path.as_path())).err().unwrap();
        match err {
            InputError::Open { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
