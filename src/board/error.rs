use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot take a disk from the {peg} peg, it is empty")]
    EmptyStackError { peg: &'static str },
}
