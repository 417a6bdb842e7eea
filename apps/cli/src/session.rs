//! Interactive quiz session.

use crate::style::Style;
use quiz_core::{compare_answers, QuestionRecord};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Outcome of a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub requested: usize,
    pub answered: usize,
    pub correct: usize,
}

impl Summary {
    /// Every requested question was asked and answered correctly.
    pub fn is_perfect(&self) -> bool {
        self.requested > 0 && self.correct == self.requested
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary: {}/{} correct", self.correct, self.requested)?;
        if self.is_perfect() {
            writeln!(f, "You're a REAL gamer :3")?;
        }
        Ok(())
    }
}

/// Asks questions on `output` and reads answers from `input`, one per line.
pub struct Session<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    /// Ask the records at `order`, in that order.
    ///
    /// `requested` is the number of questions asked for, which can exceed
    /// `order.len()` when there are no records. Stops early when the input is
    /// closed; unasked questions count as wrong.
    pub fn run(
        &mut self,
        records: &[QuestionRecord],
        order: &[usize],
        requested: usize,
    ) -> io::Result<Summary> {
        let mut summary = Summary {
            requested,
            answered: 0,
            correct: 0,
        };

        for &index in order {
            match self.ask(&records[index])? {
                Some(correct) => {
                    summary.answered += 1;
                    if correct {
                        summary.correct += 1;
                    }
                }
                None => {
                    tracing::info!(answered = summary.answered, "input closed, ending session");
                    break;
                }
            }
        }

        Ok(summary)
    }

    /// Ask one question. Returns `None` at end of input.
    pub fn ask(&mut self, record: &QuestionRecord) -> io::Result<Option<bool>> {
        let out = &mut self.output;
        let style = self.style;

        style.bold(out)?;
        writeln!(out, ">> {}", record.key())?;
        write!(out, "<< ")?;
        style.reset(out)?;
        style.inverted(out)?;
        out.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        style.reset(out)?;
        if read == 0 {
            return Ok(None);
        }
        let typed = line.trim_end_matches(&['\n', '\r'][..]);

        let result = compare_answers(typed, record);
        tracing::debug!(key = record.key(), typed, correct = result.is_correct, "answered");

        if style.colors() {
            style.cursor_up(out, 1)?;
            if result.is_correct {
                style.correct(out)?;
            } else {
                style.incorrect(out)?;
            }
            writeln!(out, ">> {}", typed)?;
            if !result.is_correct {
                style.answers(out)?;
                write_answers(out, record)?;
            }
            style.reset_foreground(out)?;
        } else if result.is_correct {
            writeln!(out, "CORRECT")?;
        } else {
            writeln!(out, "INCORRECT")?;
            write_answers(out, record)?;
        }
        out.flush()?;

        Ok(Some(result.is_correct))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn write_answers<W: Write>(out: &mut W, record: &QuestionRecord) -> io::Result<()> {
    write!(out, "[ ")?;
    for answer in record.answers() {
        write!(out, "{} ", answer.trim())?;
    }
    writeln!(out, "]")
}
