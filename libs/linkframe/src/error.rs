use nom::Needed;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input is shorter than the smallest frame the format allows.
    /// Nothing was decoded; retrying with the same bytes will fail the same way.
    #[error("Truncated frame: at least {needed} bytes are required, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// Raised by the advisory `check` functions, never by marshal or unmarshal.
    #[error("Invalid frame: {}", .0)]
    InvalidFrame(String),

    /// The trailing FCS doesn't match the CRC-32 of the preceding bytes.
    /// Only returned when FCS verification was explicitly requested.
    #[error("(FCS) mismatch: computed {expected:08x}, found {actual:08x}")]
    FcsMismatch { expected: u32, actual: u32 },

    #[error("A parsing failure occurred: \n{}\ndata: {:?}", .0, .1)]
    Failure(String, Vec<u8>),

    #[error("There wasn't enough data. {}", .0)]
    Incomplete(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Lets the parsers use `?` on nom results.
    /// nom's error borrows the input slice, so the remaining bytes are copied into an owned error.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::Incomplete(format!("At least {size} bytes are missing"))
                }
                Needed::Unknown => Error::Incomplete(String::new()),
            },
            nom::Err::Failure(error) | nom::Err::Error(error) => Error::Failure(
                format!(
                    "Failed to parse frame: nom::ErrorKind is {:?}",
                    error.code
                ),
                error.input.to_vec(),
            ),
        }
    }
}
