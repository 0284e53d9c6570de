//! Framed console output for the interactive loop.

use tally_core::Response;

/// Horizontal separator used to frame console output blocks.
const LINE: &str = "____________________________________________________________";

/// Console printer: every block is framed by a separator line above and
/// below, so session output stays visually distinct from typed input.
pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    /// Prints an arbitrary message framed by the separator line.
    pub fn framed(&self, message: &str) {
        println!("{LINE}");
        println!("{message}");
        println!("{LINE}");
    }

    /// Prints a session response, with the standard error framing for
    /// failed commands.
    pub fn respond(&self, response: &Response) {
        if response.is_error() {
            self.framed(&format!(
                "Error: {}\nPlease try again.",
                response.message()
            ));
        } else {
            self.framed(response.message());
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
