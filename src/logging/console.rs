use colored::Colorize;

use crate::booster::Termination;
use crate::constants::DEFAULT_PRINT_EVERY;
use super::observer::{Event, RoundRecord, TrainingObserver};

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Prints the progress of training to the standard output.
///
/// A row is printed every `print_every` rounds,
/// and once more when training stops.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    print_every: usize,
}


impl Default for ConsoleLogger {
    fn default() -> Self {
        Self { print_every: DEFAULT_PRINT_EVERY, }
    }
}


impl ConsoleLogger {
    /// Construct a new logger that prints every `10` rounds.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the interval to print the current status.
    /// If you only want the summary lines, set `usize::MAX`.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = round.max(1);
        self
    }


    fn print_stats(
        &self,
        booster: &str,
        weak_learner: &str,
        info: &[(String, String)],
    )
    {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            booster.bold().green(),
            "Weak Learner".bold(),
            weak_learner.bold().green(),
        );
        info.iter()
            .for_each(|(key, val)| {
                println!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                );
            });
        println!("{:=^FULL_WIDTH$}\n", "");

        if self.print_every != usize::MAX {
            print_log_header();
        }
    }


    fn print_round(&self, record: &RoundRecord) {
        if (record.round + 1) % self.print_every != 0 { return; }

        println!(
            "{} {}\t{}\t{}\t{}\t{}",
            "[LOG]".bold().magenta(),
            format!("{:>WIDTH$}", record.round).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", record.weighted_error).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$}", record.alpha).purple(),
            format!("{:>WIDTH$.PREC_WIDTH$}", record.training_error).green(),
            time_format(record.elapsed_millis).bold().cyan(),
        );
    }


    fn print_finish(
        &self,
        termination: &Termination,
        round_count: usize,
        training_error: Option<f64>,
        elapsed_millis: u128,
    )
    {
        let tag = match termination {
            Termination::WeakLearnerFailed { .. } => "[WLF]".bold().bright_red(),
            _ => "[FIN]".bold().bright_green(),
        };
        let error = training_error
            .map(|e| format!("{e:>WIDTH$.PREC_WIDTH$}"))
            .unwrap_or_else(|| format!("{:>WIDTH$}", "-"));
        println!(
            "{} {}\t{}\t{}\n      {}\n",
            tag,
            format!("{:>WIDTH$}", round_count).bold().red(),
            error.bold().green(),
            time_format(elapsed_millis).bold().cyan(),
            termination,
        );
    }
}


impl TrainingObserver for ConsoleLogger {
    fn notify(&self, event: &Event) {
        match event {
            Event::Started { booster, weak_learner, info } => {
                self.print_stats(booster, weak_learner, &info[..]);
            },
            Event::Round(record) => {
                self.print_round(record);
            },
            Event::Finished {
                termination, round_count, training_error, elapsed_millis,
            } => {
                self.print_finish(
                    termination, *round_count, *training_error, *elapsed_millis
                );
            },
            Event::Tested { n_sample, error } => {
                println!(
                    "{} {}\t{}",
                    "[TEST]".bold().bright_yellow(),
                    format!("{:>WIDTH$}", n_sample).yellow(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", error).bold().yellow(),
                );
            },
        }
    }
}


fn print_log_header() {
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "".bold().red(),
        "WEAK".bold().blue(),
        "".bold().purple(),
        "TRAIN".bold().green(),
        "ACC.".bold().cyan(),
    );
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
        "ROUND".bold().red(),
        "ERROR".bold().blue(),
        "ALPHA".bold().purple(),
        "ERROR".bold().green(),
        "TIME".bold().cyan(),
    );
}


pub(super) fn time_format(millisec: u128) -> String {
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
