/// Immutable record of one external invocation. A non-zero exit is data the
/// caller interprets, not a fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub program: String,
    /// -1 when the process died to a signal and reported no code.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub succeeded: bool,
}

impl CommandResult {
    pub fn new(program: impl Into<String>, exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            program: program.into(),
            exit_code,
            stdout,
            stderr,
            succeeded: exit_code == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_succeeds() {
        let result = CommandResult::new("true", 0, String::new(), String::new());
        assert!(result.succeeded);
    }

    #[test]
    fn non_zero_exit_is_recorded_not_raised() {
        let result = CommandResult::new("false", 1, String::new(), "boom".to_string());
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "boom");
    }
}
