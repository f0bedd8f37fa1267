// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// ResultExt adds the `chain_err` trait method.
use error_chain::*;

error_chain! {

    errors {
        InvalidDimension(axis: &'static str, value: usize) {
            description("maze dimension too small")
            display("maze {} must be at least 3, got {}", axis, value)
        }

        NonNumericDimension(axis: &'static str, text: String) {
            description("maze dimension is not a number")
            display("maze {} is not a number: '{}'", axis, text)
        }

        NoMaze {
            description("no maze has been generated yet")
            display("no maze has been generated yet")
        }

        DisconnectedMaze {
            description("entrance and exit are not connected")
            display("internal error: the maze entrance cannot be reached from the exit")
        }
    }
}
