use std::fmt;

/// Misuse of a [`super::Timer`]. The timer is left untouched when one of these
/// is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerError {
    AlreadyStarted,
    NotStarted,
    AlreadyStopped,
    NotProperlyStarted,
}

impl TimerError {
    pub fn message(&self) -> &'static str {
        match self {
            TimerError::AlreadyStarted => "Timer has already been started.",
            TimerError::NotStarted => "Timer has not been started yet.",
            TimerError::AlreadyStopped => "Timer has already been stopped.",
            TimerError::NotProperlyStarted => "Timer has not been properly started.",
        }
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.message())
    }
}

impl std::error::Error for TimerError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_matches_message() {
        for err in [
            TimerError::AlreadyStarted,
            TimerError::NotStarted,
            TimerError::AlreadyStopped,
            TimerError::NotProperlyStarted,
        ] {
            assert_eq!(err.to_string(), err.message());
        }
    }

    #[test]
    fn survives_conversion_to_anyhow() {
        let err: anyhow::Error = TimerError::NotStarted.into();
        assert_eq!(err.to_string(), "Timer has not been started yet.");
        assert_eq!(
            err.downcast_ref::<TimerError>(),
            Some(&TimerError::NotStarted)
        );
    }
}
