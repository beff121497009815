use crate::args::Config;
use crate::error::{Result, TermFreqError};
use crate::tokenizer::{ChunkReader, Tokenizer};
use std::fs::File;
use std::path::Path;

// The input must be an existing file, and a .txt file unless '-O any-extension' is given
pub fn validate_input_path(config: &Config) -> Result<()> {
    let path = Path::new(&config.input);
    if !path.is_file() {
        return Err(TermFreqError::InvalidInput(format!("{} is not an existing file", config.input)));
    }
    if config.options.any_extension {
        return Ok(());
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(()),
        _ => Err(TermFreqError::InvalidInput(format!("{} is not a .txt file (use -O any-extension to allow it)", config.input))),
    }
}

// Whole file as text, invalid UTF-8 replaced
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| TermFreqError::file(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// Feed the file through the tokenizer in byte chunks, emitting the tokens completed by
// each chunk as one batch, in order
pub fn stream_tokens(path: &Path, tokenizer: &Tokenizer, chunk_size: usize, mut emit: impl FnMut(Vec<String>)) -> Result<()> {
    let file = File::open(path).map_err(|e| TermFreqError::file(path, e))?;
    let mut stream = tokenizer.stream();
    for chunk in ChunkReader::new(file, chunk_size) {
        let chunk = chunk.map_err(|e| TermFreqError::file(path, e))?;
        let mut batch = vec![];
        stream.feed(&chunk, |token| batch.push(token));
        emit(batch);
    }
    let mut batch = vec![];
    stream.finish(|token| batch.push(token));
    emit(batch);
    Ok(())
}
