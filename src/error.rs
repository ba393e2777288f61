//! When converting between text and floating-point values goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::result;
use alloc::boxed::Box;
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when parsing or
/// formatting decimal text.
///
/// The numeric kernel (`to_decimal` and `from_decimal`) is total and never
/// produces one of these. Only the validating constructors and the text
/// front-end do.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `charconv::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset at which the error was detected.
    ///
    /// For out-of-range errors this is the number of bytes that formed the
    /// number, which is where parsing would have resumed had the value been
    /// representable. For buffer errors it is the number of bytes needed.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that does not start with a number
    /// - `Category::Data` - digits that cannot form a decimal value
    /// - `Category::Buffer` - an output buffer too small for the result
    /// - `Category::OutOfRange` - a number too large or too small for the
    ///   requested type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidArgument => Category::Syntax,
            ErrorCode::InvalidDigits => Category::Data,
            ErrorCode::ValueTooLarge => Category::Buffer,
            ErrorCode::Overflow | ErrorCode::Underflow => Category::OutOfRange,
        }
    }

    /// Returns true if this error was caused by input that does not start
    /// with a number.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by digits that are not a valid
    /// decimal significand.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by an output buffer that is too
    /// small to hold the formatted value.
    pub fn is_buffer(&self) -> bool {
        self.classify() == Category::Buffer
    }

    /// Returns true if this error was caused by a well-formed number that
    /// does not fit the requested floating-point type.
    ///
    /// The offset still reports how many bytes the number spans, so callers
    /// that want saturating behavior can skip past it.
    pub fn is_out_of_range(&self) -> bool {
        self.classify() == Category::OutOfRange
    }
}

/// Categorizes the cause of a `charconv::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that does not start with a number.
    Syntax,

    /// The error was caused by digit data that was semantically incorrect.
    Data,

    /// The error was caused by an output buffer that is too small.
    Buffer,

    /// The error was caused by a number whose magnitude is outside the range
    /// of the requested floating-point type.
    OutOfRange,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `charconv::Error` into an `io::Error`.
    ///
    /// Syntax, data and range errors are turned into `InvalidData` IO errors.
    /// Buffer errors are turned into `WriteZero` IO errors.
    ///
    /// ```
    /// use std::io;
    ///
    /// let err = charconv::from_chars::<f64>(b"x", charconv::CharsFormat::General).unwrap_err();
    /// let io_err: io::Error = err.into();
    /// assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    /// ```
    fn from(c: Error) -> Self {
        match c.classify() {
            Category::Syntax | Category::Data | Category::OutOfRange => {
                io::Error::new(io::ErrorKind::InvalidData, c)
            }
            Category::Buffer => io::Error::new(io::ErrorKind::WriteZero, c),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// This type describes all possible errors that can occur when parsing or
/// formatting decimal text.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input does not start with a number, `inf` or `nan`.
    InvalidArgument,

    /// A digit sequence is empty or contains a byte other than `'0'..='9'`.
    InvalidDigits,

    /// The output buffer is too small for the formatted value.
    ValueTooLarge,

    /// The number is finite but rounds to infinity.
    Overflow,

    /// The number has nonzero digits but rounds to zero.
    Underflow,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::InvalidArgument => "InvalidArgument",
            ErrorCode::InvalidDigits => "InvalidDigits",
            ErrorCode::ValueTooLarge => "ValueTooLarge",
            ErrorCode::Overflow => "Overflow",
            ErrorCode::Underflow => "Underflow",
        };
        f.write_str(name)
    }
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidArgument => f.write_str("invalid number"),
            ErrorCode::InvalidDigits => f.write_str("invalid decimal digits"),
            ErrorCode::ValueTooLarge => f.write_str("buffer too small"),
            ErrorCode::Overflow => f.write_str("number too large to fit in target type"),
            ErrorCode::Underflow => f.write_str("number too small to fit in target type"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.code, self.offset)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, offset: {})",
            self.err.code.to_string(),
            self.err.offset
        )
    }
}
