use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::subject::SubjectSpec;

/// `floor(rate * count)`, raised to one when a positive rate rounds to zero.
pub fn required_pass_count(student_count: usize, target_pass_rate: f64) -> usize {
    let mut required = (target_pass_rate * student_count as f64).floor() as usize;
    if required == 0 && target_pass_rate > 0.0 {
        required = 1;
    }
    required.min(student_count)
}

/// Inclusive bounds for a passing draw on a normalized spec.
///
/// An empty passing range (`pass_score > max_score`) collapses to
/// `[max_score, max_score]`; a pass score below the minimum starts at the
/// minimum.
pub fn passing_range(spec: &SubjectSpec) -> (i64, i64) {
    let lo = spec.pass_score.max(spec.min_score);
    if lo > spec.max_score {
        (spec.max_score, spec.max_score)
    } else {
        (lo, spec.max_score)
    }
}

/// Inclusive bounds for a failing draw on a normalized spec.
///
/// An empty failing range (`pass_score - 1 < min_score`) collapses to
/// `[min_score, min_score]`.
pub fn failing_range(spec: &SubjectSpec) -> (i64, i64) {
    let hi = spec.pass_score.saturating_sub(1);
    if hi < spec.min_score {
        (spec.min_score, spec.min_score)
    } else {
        (spec.min_score, hi.min(spec.max_score))
    }
}

/// One score per student for a single subject.
///
/// The first `required_pass_count` draws are forced passes. Every other slot
/// is a fair coin between a pass and a fail, so the realized pass rate sits
/// above the target on average (`r + (1 - r) / 2`). The result is shuffled so
/// position carries no pass/fail information.
pub fn generate_subject_scores<R: Rng + ?Sized>(
    rng: &mut R,
    student_count: usize,
    spec: &SubjectSpec,
) -> Vec<i64> {
    let spec = spec.normalized();
    let required = required_pass_count(student_count, spec.target_pass_rate);
    let (pass_lo, pass_hi) = passing_range(&spec);
    let (fail_lo, fail_hi) = failing_range(&spec);

    let mut scores = Vec::with_capacity(student_count);
    for _ in 0..required {
        scores.push(rng.random_range(pass_lo..=pass_hi));
    }
    for _ in required..student_count {
        if rng.random_bool(0.5) {
            scores.push(rng.random_range(pass_lo..=pass_hi));
        } else {
            scores.push(rng.random_range(fail_lo..=fail_hi));
        }
    }

    scores.shuffle(rng);
    scores
}

#[cfg(test)]
#[path = "../../tests/src_inline/generate/scores.rs"]
mod tests;
