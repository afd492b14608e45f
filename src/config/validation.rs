use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Data directory cannot be empty
/// - Similarity threshold must lie in 0.0..=1.0
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    data_dir: &str,
    log_file_path: &Option<String>,
    similarity_threshold: f64,
) -> Result<(), AppError> {
    if data_dir.trim().is_empty() {
        return Err(AppError::config_error("Data directory cannot be empty"));
    }

    if !(0.0..=1.0).contains(&similarity_threshold) {
        return Err(AppError::config_error(format!(
            "Similarity threshold must be between 0.0 and 1.0, got {similarity_threshold}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
