//! Contains functionality to read matrix problem and write it back.

mod reader;
pub use self::reader::MatrixProblem;

mod writer;
pub use self::writer::MatrixWriter;
