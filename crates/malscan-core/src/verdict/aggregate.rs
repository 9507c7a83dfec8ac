//! Verdict aggregation

use super::Verdict;

/// Reduce many verdicts to one using severity priority.
///
/// Any `error` wins, then `malicious`, then `suspicious`. An empty input
/// is `clean`. The reduction is a maximum, so input order never matters.
pub fn aggregate<I>(verdicts: I) -> Verdict
where
    I: IntoIterator<Item = Verdict>,
{
    verdicts.into_iter().max().unwrap_or(Verdict::Clean)
}
