use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    sync::mpsc,
};

use threadpool::ThreadPool;

pub use binary_stream::BitString;
pub use cli::CLIParser;
pub use compression::{compress, decode, Compression};
pub use error::Error;
pub use report::Report;

pub mod binary_stream;
mod cli;
pub mod compression;
pub mod error;
pub mod huffman;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    texts: Vec<String>,
    number_of_threads: usize,
    show_codes: bool,
}

/// One independent input, compressed on its own
enum Source {
    File(PathBuf),
    Text(String),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Text(text) => format!("{:?}", text),
        }
    }

    fn process(&self, show_codes: bool) -> Result<Report> {
        match self {
            Self::File(path) => {
                let bytes = read_input_file(path)?;
                self.round_trip(&bytes, show_codes, report::byte_label)
            }
            Self::Text(text) => {
                let characters: Vec<char> = text.chars().collect();
                self.round_trip(&characters, show_codes, report::char_label)
            }
        }
    }

    fn round_trip<S: huffman::Symbol>(
        &self,
        input: &[S],
        show_codes: bool,
        label: impl Fn(&S) -> String,
    ) -> Result<Report> {
        let name = self.name();
        let compression = compress(input)?;
        logger::log_code_table(&name, compression.code_table());
        if compression.decode()? != input {
            return Err(Error::RoundTripMismatch(name));
        }
        Ok(Report::new(name, &compression, show_codes, label))
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    let input_file = open_input_file(file_path)?;
    let mut bytes = Vec::new();
    BufReader::new(input_file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))?;
    Ok(bytes)
}

/// Compress, decode and verify every input of the arguments, one job per
/// input on a thread pool. Reports come back in argument order.
pub fn compress_sources(arguments: &Arguments) -> Result<Vec<Report>> {
    let sources: Vec<Source> = arguments
        .input_files
        .iter()
        .cloned()
        .map(Source::File)
        .chain(arguments.texts.iter().cloned().map(Source::Text))
        .collect();
    let source_count = sources.len();
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for (position, source) in sources.into_iter().enumerate() {
        let sender = sender.clone();
        let show_codes = arguments.show_codes;
        threadpool.execute(move || {
            let result = source.process(show_codes);
            if let Err(error) = &result {
                log::warn!("Compression of {} failed: {}", source.name(), error);
            }
            // the receiver outlives every job
            let _ = sender.send((position, result));
        });
    }
    drop(sender);

    let mut results: Vec<(usize, Result<Report>)> = receiver.iter().collect();
    log::info!("Finished {} of {} inputs", results.len(), source_count);
    results.sort_by_key(|(position, _)| *position);
    results.into_iter().map(|(_, result)| result).collect()
}
