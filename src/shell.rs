//! Line-oriented read loop around a [`CommandProcessor`].

use crate::processor::CommandProcessor;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// A line equal to this stops the session.
pub const END_COMMAND: &str = "END";

/// Feeds lines from an input to a processor and writes its output.
pub struct Session<W> {
    processor: CommandProcessor,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(processor: CommandProcessor, output: W) -> Self {
        Self { processor, output }
    }

    pub fn processor(&self) -> &CommandProcessor {
        &self.processor
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes the usage text for the current board.
    pub fn print_banner(&mut self) -> io::Result<()> {
        let board = self.processor.board();
        writeln!(
            self.output,
            "
  1: Place the toy on a {columns} x {rows} grid
     using the following command:

     PLACE X,Y,Direction

     PLACE will put the toy robot on the table in position X,Y and facing NORTH, SOUTH, EAST or WEST.
     PLACE X,Y reuses the direction of the last full PLACE command.

  2: When the toy is placed, use the following commands to move the position of toy.

     REPORT - announce the X,Y and Direction of the robot.
     LEFT   - turn the toy 90 degrees left.
     RIGHT  - turn the toy 90 degrees right.
     MOVE   - move the toy robot one unit forward in the direction it is currently facing.
     {END_COMMAND}    - end the application
",
            columns = board.columns(),
            rows = board.rows(),
        )
    }

    /// Handles a single line. Returns `false` once the line is [`END_COMMAND`].
    ///
    /// Command errors are written to the output and do not end the session.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        if line == END_COMMAND {
            return Ok(false);
        }

        match self.processor.process_line(line) {
            Ok(Some(report)) => writeln!(self.output, "{report}")?,
            Ok(None) => {}
            Err(err) => {
                debug!(line, error = ?err, "command rejected");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(true)
    }

    /// Processes lines until [`END_COMMAND`] or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        info!("session started");
        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }
        self.output.flush()?;
        info!("session finished");
        Ok(())
    }
}
