use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

pub fn input_stream(path: &str) -> Result<InputStream, String> {
    let input_path = Path::new(path);
    let result = InputStream {
        path: input_path.to_path_buf(),
    };

    Ok(result)
}

#[derive(Debug, Clone)]
pub struct InputStream {
    path: PathBuf,
}

impl Display for InputStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl InputStream {
    pub fn as_reader(&self) -> Result<InputReader, anyhow::Error> {
        InputReader::from_path(&self.path)
    }
}

#[derive(Debug)]
pub enum InputReader {
    Stdin(io::Stdin),
    File(File),
}

impl InputReader {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let is_stdin = path.to_string_lossy() == "-";

        let val = if is_stdin {
            info!("Input file: <stdin>");
            Self::Stdin(io::stdin())
        } else {
            info!("Input file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Could not open input file {}", path.display()))?;

            Self::File(file)
        };
        Ok(val)
    }

    pub fn length(&self) -> anyhow::Result<Option<u64>> {
        let val = match self {
            InputReader::Stdin(_) => None,
            InputReader::File(file) => Some(file.metadata()?.len()),
        };
        Ok(val)
    }

    #[must_use]
    pub fn into_read(self) -> Box<dyn Read + Send> {
        match self {
            InputReader::Stdin(stdin) => Box::new(stdin),
            InputReader::File(file) => Box::new(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::opts::{input_stream, InputReader};

    #[test]
    fn dash_input_is_stdin() {
        let input = input_stream("-").unwrap();

        assert_eq!(input.to_string(), "-");
        let reader = input.as_reader().unwrap();
        assert!(matches!(reader, InputReader::Stdin(_)));
        assert_eq!(reader.length().unwrap(), None);
    }

    #[test]
    fn missing_file_is_reported() {
        let input = input_stream("/nonexistent/genes.fa").unwrap();
        let error = input.as_reader().unwrap_err();

        assert!(
            error.to_string().contains("/nonexistent/genes.fa"),
            "unexpected error: {}",
            error
        );
    }
}
