/// Outcome of [`super::Handler::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Let the next handler run.
    Continue,
    /// End the chain without a reply body.
    Stop,
    /// End the chain; carries the last text sent so `after()` can see it.
    Reply(String),
}
