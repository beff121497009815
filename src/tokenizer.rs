use std::io::{ErrorKind, Read};

pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
// Upper bound on the read buffer, larger requested chunk sizes are clamped to it
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

// Tokenization policy shared by every command: lowercase, split on anything that is not
// alphanumeric (or one of the configured extra characters), drop short tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pub min_length: usize,
    pub extra_chars: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            min_length: DEFAULT_MIN_LENGTH,
            extra_chars: vec![],
        }
    }
}

impl Tokenizer {
    pub fn new(min_length: usize, extra_chars: &str) -> Tokenizer {
        // Extra characters are matched after lowercasing, so store them lowercased too
        let extra_chars = extra_chars.chars().flat_map(char::to_lowercase).collect();
        Tokenizer { min_length, extra_chars }
    }

    fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.extra_chars.contains(&c)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = vec![];
        let mut stream = self.stream();
        stream.feed(text, |token| tokens.push(token));
        stream.finish(|token| tokens.push(token));
        tokens
    }

    pub fn stream(&self) -> StreamTokenizer<'_> {
        StreamTokenizer {
            tokenizer: self,
            pending: String::new(),
        }
    }
}

/// Tokenizer fed one chunk at a time.
///
/// The last token of a chunk is held back until the next chunk shows whether it continues,
/// so a word cut by a chunk boundary comes out whole.
pub struct StreamTokenizer<'a> {
    tokenizer: &'a Tokenizer,
    pending: String,
}

impl StreamTokenizer<'_> {
    pub fn feed(&mut self, chunk: &str, mut emit: impl FnMut(String)) {
        for c in chunk.chars() {
            for c in c.to_lowercase() {
                if self.tokenizer.is_word_char(c) {
                    self.pending.push(c);
                } else {
                    self.flush(&mut emit);
                }
            }
        }
    }

    pub fn finish(mut self, mut emit: impl FnMut(String)) {
        self.flush(&mut emit);
    }

    fn flush(&mut self, emit: &mut impl FnMut(String)) {
        if self.pending.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.pending);
        if token.chars().count() >= self.tokenizer.min_length {
            emit(token);
        }
    }
}

// Reads a file in fixed-size byte chunks and decodes them as UTF-8.
// Invalid sequences become U+FFFD, but a character cut in half by the chunk boundary is
// carried over to the next chunk instead of being replaced.
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    carry: Vec<u8>,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R, chunk_size: usize) -> ChunkReader<R> {
        ChunkReader {
            reader,
            chunk_size: chunk_size.clamp(1, MAX_CHUNK_SIZE),
            carry: vec![],
            done: false,
        }
    }

    fn read_chunk(&mut self) -> std::io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        let mut buffer = std::mem::take(&mut self.carry);
        let start = buffer.len();
        buffer.resize(start + self.chunk_size, 0);
        let read = loop {
            match self.reader.read(&mut buffer[start..]) {
                Ok(read) => break read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        buffer.truncate(start + read);
        if read == 0 {
            self.done = true;
            if buffer.is_empty() {
                return Ok(None);
            }
            // Whatever is still carried at end of input is a truncated character
            return Ok(Some(String::from_utf8_lossy(&buffer).into_owned()));
        }
        let cut = incomplete_tail_start(&buffer);
        self.carry = buffer.split_off(cut);
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_chunk().transpose()
    }
}

// Index where an unfinished UTF-8 sequence starts at the end of the buffer, or the buffer
// length if the buffer ends on a character boundary. Only the last 3 bytes can be part of
// an unfinished 4-byte sequence.
fn incomplete_tail_start(bytes: &[u8]) -> usize {
    let floor = bytes.len().saturating_sub(3);
    for start in (floor..bytes.len()).rev() {
        if bytes[start] & 0b1100_0000 != 0b1000_0000 {
            return match std::str::from_utf8(&bytes[start..]) {
                Err(e) if e.error_len().is_none() => start,
                _ => bytes.len(),
            };
        }
    }
    bytes.len()
}

// Running window of n characters inside a single token
pub fn char_ngrams(token: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return vec![];
    }
    token.chars().collect::<Vec<char>>().windows(n).map(|w| w.iter().collect::<String>()).collect()
}
