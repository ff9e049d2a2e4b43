/// What [`Stage::draw`](super::Stage::draw) does when a member fails to draw.
///
/// Paint state is restored either way; the policy only decides whether the
/// rest of the frame is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DrawErrorPolicy {
    /// Log the failure, record it in the frame report and continue with the next member.
    #[default]
    Skip,
    /// Stop the traversal and return the failure.
    Abort,
}

/// Stage configuration.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub on_draw_error: DrawErrorPolicy,
    /// Maximum number of chained follow hops resolved for one position read.
    pub max_follow_depth: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            on_draw_error: DrawErrorPolicy::Skip,
            max_follow_depth: 32,
        }
    }
}
