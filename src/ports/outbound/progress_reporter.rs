/// ProgressReporter port for reporting progress during a report run
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so chart output on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that does not abort the run
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
