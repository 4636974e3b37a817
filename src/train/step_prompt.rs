use std::io::{BufRead, Write};

use crate::{error::Result, train::iteration_stats::IterationStats};

/// Interactive stepping for `Trainer::train_with`: prints each iteration's
/// error and waits for a line on `reader` before continuing.
///
/// The content of the line is ignored. Once `reader` hits EOF, later
/// iterations still print their error but no longer wait.
pub struct StepPrompt<R, W> {
    reader: R,
    writer: W,
    pausing: bool,
}

impl<R: BufRead, W: Write> StepPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StepPrompt { reader, writer, pausing: true }
    }

    pub fn is_pausing(&self) -> bool {
        self.pausing
    }

    pub fn on_iteration(&mut self, stats: &IterationStats) -> Result<()> {
        writeln!(self.writer, "Iteration {}: error = {}", stats.iteration, stats.error)?;
        if self.pausing {
            writeln!(self.writer, "Press Enter to continue...")?;
            self.writer.flush()?;
            let mut line = String::new();
            self.pausing = self.reader.read_line(&mut line)? > 0;
        }
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stats(iteration: usize, error: f64) -> IterationStats {
        IterationStats { iteration, total_iterations: 3, error }
    }

    #[test]
    fn stops_waiting_after_input_runs_out() {
        let mut prompt = StepPrompt::new(Cursor::new("anything at all\n"), Vec::new());

        prompt.on_iteration(&stats(1, 0.5)).unwrap();
        assert!(prompt.is_pausing());
        prompt.on_iteration(&stats(2, 0.25)).unwrap();
        assert!(!prompt.is_pausing());
        prompt.on_iteration(&stats(3, 0.125)).unwrap();

        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert_eq!(
            out,
            "Iteration 1: error = 0.5\n\
             Press Enter to continue...\n\
             Iteration 2: error = 0.25\n\
             Press Enter to continue...\n\
             Iteration 3: error = 0.125\n"
        );
    }

    #[test]
    fn closed_input_never_blocks() {
        let mut prompt = StepPrompt::new(Cursor::new(""), Vec::new());
        for i in 1..=3 {
            prompt.on_iteration(&stats(i, 1.0)).unwrap();
        }
        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert_eq!(out.matches("Iteration").count(), 3);
        assert_eq!(out.matches("Press Enter").count(), 1);
    }

    #[test]
    fn drives_a_training_run() {
        use crate::{data::seven_segment, network::spec::NetworkSpec, train::{Trainer, TrainConfig}};

        let config = TrainConfig::new(0, vec![1.0]).with_seed(4);
        let mut trainer = Trainer::initialize(&NetworkSpec::default(), seven_segment::digits().unwrap(), config).unwrap();
        let mut prompt = StepPrompt::new(Cursor::new("\n\n"), Vec::new());
        trainer.train_with(4, |s| prompt.on_iteration(s)).unwrap();

        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert_eq!(out.matches("Iteration").count(), 4);
        assert_eq!(out.matches("Press Enter").count(), 3);
    }
}
