/// ProgressReporter port for reporting progress during dependency resolution
///
/// All output goes to the user, never into the generated document.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports how many projects have been analyzed so far
    ///
    /// # Arguments
    /// * `analyzed` - Number of projects analyzed
    /// * `message` - Optional message to include (usually the current project)
    fn report_progress(&self, analyzed: usize, message: Option<&str>);

    /// Reports a non-fatal condition; resolution continues
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
