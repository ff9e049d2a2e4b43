//! Error types shared by the stage, positions and members.

use thiserror::Error;

use crate::scene::MemberId;

/// Boxed error produced by user-supplied render or update code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure while resolving a derived position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// An orbit was read while its target had no position (absent, removed,
    /// or a member without a location).
    ///
    /// `orbiter` is the member owning the orbit. It is `None` only for orbits
    /// read outside the stage.
    #[error("orbit target {target} has no resolvable position{}", orbiter_suffix(.orbiter))]
    MissingTarget { orbiter: Option<MemberId>, target: MemberId },

    /// Following targets went deeper than the configured limit, usually a cycle.
    #[error("position of {target} not resolved within {limit} follow hops")]
    FollowDepthExceeded { target: MemberId, limit: u32 },
}

impl PositionError {
    /// Names `owner` as the orbiter of an unattributed missing-target error.
    ///
    /// The innermost owner wins: errors that already name an orbiter pass
    /// through unchanged while they bubble up a follow chain.
    pub fn attributed_to(self, owner: MemberId) -> Self {
        match self {
            PositionError::MissingTarget { orbiter: None, target } => {
                PositionError::MissingTarget { orbiter: Some(owner), target }
            }
            other => other,
        }
    }
}

fn orbiter_suffix(orbiter: &Option<MemberId>) -> String {
    orbiter.map(|o| format!(" (orbiter {o})")).unwrap_or_default()
}

/// Failure raised by a member's `update` or `draw`.
#[derive(Debug, Error)]
pub enum MemberError {
    #[error(transparent)]
    Position(#[from] PositionError),

    /// Error from member-specific code (custom members, render delegates).
    #[error("{0}")]
    Failed(BoxError),
}

impl MemberError {
    /// Wraps any error or message as [`MemberError::Failed`].
    pub fn failed(err: impl Into<BoxError>) -> Self {
        MemberError::Failed(err.into())
    }

    /// See [`PositionError::attributed_to`]. Other failures pass through.
    pub fn attributed_to(self, owner: MemberId) -> Self {
        match self {
            MemberError::Position(err) => MemberError::Position(err.attributed_to(owner)),
            other => other,
        }
    }
}

/// Failure that aborted a stage traversal.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("drawing member {member} failed")]
    Draw {
        member: MemberId,
        #[source]
        source: MemberError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_target_names_the_target() {
        let err = PositionError::MissingTarget { orbiter: None, target: MemberId::new(3, 1) };
        assert_eq!(err.to_string(), "orbit target #3v1 has no resolvable position");
    }

    #[test]
    fn attribution_names_the_innermost_orbiter() {
        let target = MemberId::new(0, 0);
        let err = PositionError::MissingTarget { orbiter: None, target }
            .attributed_to(MemberId::new(1, 0))
            .attributed_to(MemberId::new(2, 0));
        assert_eq!(
            err,
            PositionError::MissingTarget { orbiter: Some(MemberId::new(1, 0)), target }
        );
        assert_eq!(err.to_string(), "orbit target #0v0 has no resolvable position (orbiter #1v0)");
    }

    #[test]
    fn attribution_leaves_other_errors_alone() {
        let err = PositionError::FollowDepthExceeded { target: MemberId::new(4, 0), limit: 8 };
        assert_eq!(err.clone().attributed_to(MemberId::new(1, 0)), err);
    }

    #[test]
    fn member_error_from_message() {
        let err = MemberError::failed("texture missing");
        assert_eq!(err.to_string(), "texture missing");
    }

    #[test]
    fn stage_error_keeps_source_chain() {
        use std::error::Error as _;

        let err = StageError::Draw {
            member: MemberId::new(0, 0),
            source: PositionError::MissingTarget {
                orbiter: Some(MemberId::new(0, 0)),
                target: MemberId::new(1, 0),
            }
            .into(),
        };
        assert_eq!(err.to_string(), "drawing member #0v0 failed");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("orbit target #1v0 has no resolvable position (orbiter #0v0)"));
    }
}
