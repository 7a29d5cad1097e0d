use colored::Colorize;

use crate::{
    Sample,
    Trainer,
    error::{Error, Result},
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 10;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Epoch,History,TrainLoss,TestLoss,Time\n";


/// Struct `Logger` provides a generic function that
/// logs the history entry, train/test loss value, and running time
/// for each epoch of training.
///
/// # Example
/// ```no_run
/// use linthresh::prelude::*;
/// use linthresh::research::{Logger, zero_one_loss};
///
/// # let (train, test): (Sample, Sample) = unimplemented!();
/// let perceptron = Perceptron::new(0.1, 10, 1).unwrap();
/// let perceptron = Logger::new(perceptron, zero_one_loss, &train, &test)
///     .print_every(1)
///     .run("perceptron.csv")
///     .unwrap();
/// println!("{:?}", perceptron.errors().unwrap());
/// ```
pub struct Logger<'a, T, G> {
    trainer: T,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, T, G> Logger<'a, T, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        trainer: T,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            trainer,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }
}


impl<T, G> Logger<'_, T, G>
    where T: Trainer,
          G: Fn(&Sample, &T) -> Result<f64>,
{
    /// Set the time limit for training as milliseconds.
    /// If the training reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for training as seconds.
    /// If the training reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000_u128);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `10` epochs.
    /// If you don't want to print the log,
    /// set `usize::MAX` or `0`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = if round == 0 { usize::MAX } else { round };
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "EPOCH".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "EPOCH".bold().red(),
            "HISTORY".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let (n_sample, n_feature) = self.train.shape();
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Trainer".bold(),
            self.trainer.name().bold().green(),
        );

        if let Some(info) = self.trainer.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Train shape".bold(),
            format!("{n_sample} x {n_feature}").bold().green(),
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given trainer with logging.
    /// Note that this method is almost the same as `Trainer::fit`.
    /// This method measures running time per epoch and
    /// writes one CSV line per epoch to `filename`.
    /// Returns the trained `T`.
    pub fn run<P: AsRef<Path>>(mut self, filename: P) -> Result<T> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.trainer.preprocess(self.train)?;
        if self.round != usize::MAX { self.print_stats(); }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Training step
        if self.round != usize::MAX { self.print_log_header(); }
        for epoch in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.trainer.epoch(self.train, epoch)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            // Update the cumulative time
            time_acc += time;

            let entry = self.trainer.history()?
                .last()
                .copied()
                .ok_or(Error::NotFitted)?;
            let train = (self.loss_func)(self.train, &self.trainer)?;
            let test = (self.loss_func)(self.test, &self.trainer)?;

            // Write the results to `file`.
            let line = format!("{epoch},{entry},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())?;

            if time_acc > self.time_limit {
                println!(
                    "{} {}\t\t{}\t{}\t{}\t{}\n",
                    "[TLE]".bold().bright_red(),
                    format!("{:>WIDTH$}", epoch).bold().red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", entry).bold().blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                    time_format(time_acc).bold().cyan(),
                );
                break;
            }

            if self.round != usize::MAX && epoch % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", epoch).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", entry).blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }

            if flow.is_break() {
                if self.round != usize::MAX {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{:>WIDTH$}", epoch).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", entry).bold().blue(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }
        }

        Ok(self.trainer)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
