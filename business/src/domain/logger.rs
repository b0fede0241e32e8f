/// Logging port for the storefront's use cases. The tracing-backed adapter
/// lives in the logger infrastructure member.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
