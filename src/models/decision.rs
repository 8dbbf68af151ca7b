#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MaxLimitReached,
}

/// Outcome of checking one addition against the day's running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    /// Accepted, and this addition is the one that crossed the warning threshold.
    AcceptedWithWarning,
    Rejected(RejectReason),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Decision::Rejected(_))
    }

    /// Convert enum → audit log operation name
    pub fn to_log_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "add",
            Decision::AcceptedWithWarning => "add_warning",
            Decision::Rejected(_) => "add_rejected",
        }
    }
}
