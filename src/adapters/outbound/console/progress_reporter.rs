use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {pos} project(s) analyzed - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Progress goes to stderr so it never mixes with a document written to
/// stdout. A spinner counts analyzed projects; lines printed while it runs
/// are written above it.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner = self.spinner.borrow_mut();
        if let Some(pb) = spinner.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        *spinner = Some(pb.clone());
        pb
    }

    fn print(&self, line: &str) {
        match self.spinner.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", line)),
            _ => eprintln!("{}", line),
        }
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message);
    }

    fn report_progress(&self, analyzed: usize, message: Option<&str>) {
        let pb = self.get_or_create_spinner();
        pb.set_position(analyzed as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        pb.tick();
    }

    fn report_warning(&self, message: &str) {
        self.print(&message.yellow().to_string());
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.green());
    }
}
