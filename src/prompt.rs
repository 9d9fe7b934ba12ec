use crate::error::{Result, WellcheckError};
use crate::questionnaire::OPTIONS;
use crate::session::AssessmentSession;
use crate::types::questionnaire::AnswerValue;
use std::io::{BufRead, Write};
use tracing::debug;

/// Asks every unanswered question in order, re-asking on invalid input.
/// Stops early at end of input, leaving the session incomplete.
pub fn run_questionnaire<R, W>(session: &mut AssessmentSession<'_>, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let questions = session.questions();
    writeln!(
        output,
        "Answer the following questions based on your experiences over the past two weeks."
    )?;

    for (index, question) in questions.iter().enumerate() {
        if session.responses().get(question.id).is_some() {
            continue;
        }

        writeln!(output)?;
        writeln!(output, "{}. {}", index + 1, question.text)?;
        for option in OPTIONS {
            writeln!(output, "  {}) {}", option.value, option.label)?;
        }

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!(question = question.id, "input closed before questionnaire finished");
                return Ok(());
            }

            match line.trim().parse::<AnswerValue>() {
                Ok(value) => {
                    session.answer(question.id, value)?;
                    let progress = session.progress();
                    writeln!(
                        output,
                        "Progress: {} / {} ({:.0}%)",
                        progress.answered,
                        progress.total,
                        progress.percent()
                    )?;
                    break;
                }
                Err(WellcheckError::InvalidAnswer { .. }) => {
                    writeln!(output, "Please enter a number from 0 to 3.")?;
                }
                Err(other) => return Err(other),
            }
        }
    }
    Ok(())
}
