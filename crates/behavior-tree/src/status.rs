//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// # Tick Semantics
///
/// Every node reports one of four outcomes per tick:
/// - `Running` asks the caller to tick again later
/// - `Success` and `Failure` are terminal outcomes
/// - `Unknown` signals an anomaly and is never masked by the engine
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    /// An unrecognized or unexpected outcome.
    ///
    /// This is the zero value. Well-formed leaves never produce it; composites
    /// and decorators propagate it unchanged to the root.
    #[default]
    Unknown,

    /// The behavior has not finished and should be ticked again.
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be completed.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`; `Running` and `Unknown` are unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
