use crate::application::read_models::AnalysisReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// This port abstracts the output format (plain text and Graphviz DOT,
/// JSON, etc.) of every report the tool produces.
pub trait ReportFormatter {
    /// Formats an analysis result
    ///
    /// # Arguments
    /// * `model` - The read model holding the report and its metadata
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AnalysisReadModel) -> Result<String>;
}
