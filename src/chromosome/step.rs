//! The optimization-step alphabet.
//!
//! One [`Step`] per pass in the registry. Each step has a one-character
//! display code used by the compact chromosome encoding, and a full name
//! used by pass pipelines and reports. The mapping lives entirely in this
//! module; nothing else in the crate special-cases characters.

use rand::Rng;

use crate::error::{Error, Result};

/// One optimization pass in the sequenced pipeline.
///
/// Steps are compared and copied by value. The alphabet is fixed: the search
/// never invents steps outside [`Step::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    AggressiveDce,
    CfgSimplification,
    ConstantFolding,
    CorrelatedValuePropagation,
    DeadCodeElimination,
    DeadStoreElimination,
    EarlyCse,
    FunctionInlining,
    GlobalDce,
    GlobalValueNumbering,
    IndvarSimplification,
    InstructionSimplification,
    JumpThreading,
    LoopDeletion,
    LoopIdiomRecognition,
    LoopInvariantCodeMotion,
    LoopRotation,
    LoopStrengthReduction,
    LoopUnrolling,
    LoopUnswitching,
    LoopVectorisation,
    Mem2Reg,
    MemcpyOptimisation,
    PartialInlining,
    Reassociation,
    SlpVectorisation,
    Sroa,
    StrengthReduction,
    TailCallElimination,
}

impl Step {
    /// Every step in the alphabet, in canonical order.
    pub const ALL: [Step; 29] = [
        Step::AggressiveDce,
        Step::CfgSimplification,
        Step::ConstantFolding,
        Step::CorrelatedValuePropagation,
        Step::DeadCodeElimination,
        Step::DeadStoreElimination,
        Step::EarlyCse,
        Step::FunctionInlining,
        Step::GlobalDce,
        Step::GlobalValueNumbering,
        Step::IndvarSimplification,
        Step::InstructionSimplification,
        Step::JumpThreading,
        Step::LoopDeletion,
        Step::LoopIdiomRecognition,
        Step::LoopInvariantCodeMotion,
        Step::LoopRotation,
        Step::LoopStrengthReduction,
        Step::LoopUnrolling,
        Step::LoopUnswitching,
        Step::LoopVectorisation,
        Step::Mem2Reg,
        Step::MemcpyOptimisation,
        Step::PartialInlining,
        Step::Reassociation,
        Step::SlpVectorisation,
        Step::Sroa,
        Step::StrengthReduction,
        Step::TailCallElimination,
    ];

    /// The one-character display code used by the compact encoding.
    ///
    /// Codes are unique across the alphabet; case is significant.
    pub const fn code(self) -> char {
        match self {
            Step::AggressiveDce => 'a',
            Step::CfgSimplification => 'f',
            Step::ConstantFolding => 'c',
            Step::CorrelatedValuePropagation => 'C',
            Step::DeadCodeElimination => 'd',
            Step::DeadStoreElimination => 'D',
            Step::EarlyCse => 'e',
            Step::FunctionInlining => 'i',
            Step::GlobalDce => 'G',
            Step::GlobalValueNumbering => 'g',
            Step::IndvarSimplification => 'I',
            Step::InstructionSimplification => 's',
            Step::JumpThreading => 'j',
            Step::LoopDeletion => 'n',
            Step::LoopIdiomRecognition => 'O',
            Step::LoopInvariantCodeMotion => 'L',
            Step::LoopRotation => 'l',
            Step::LoopStrengthReduction => 'T',
            Step::LoopUnrolling => 'u',
            Step::LoopUnswitching => 'U',
            Step::LoopVectorisation => 'v',
            Step::Mem2Reg => 'm',
            Step::MemcpyOptimisation => 'M',
            Step::PartialInlining => 'p',
            Step::Reassociation => 'r',
            Step::SlpVectorisation => 'V',
            Step::Sroa => 'S',
            Step::StrengthReduction => 'x',
            Step::TailCallElimination => 't',
        }
    }

    /// The full step name used by pass pipelines.
    pub const fn name(self) -> &'static str {
        match self {
            Step::AggressiveDce => "aggressive-dce",
            Step::CfgSimplification => "cfg-simplification",
            Step::ConstantFolding => "constant-folding",
            Step::CorrelatedValuePropagation => "correlated-value-propagation",
            Step::DeadCodeElimination => "dead-code-elimination",
            Step::DeadStoreElimination => "dead-store-elimination",
            Step::EarlyCse => "early-cse",
            Step::FunctionInlining => "function-inlining",
            Step::GlobalDce => "global-dce",
            Step::GlobalValueNumbering => "global-value-numbering",
            Step::IndvarSimplification => "indvar-simplification",
            Step::InstructionSimplification => "instruction-simplification",
            Step::JumpThreading => "jump-threading",
            Step::LoopDeletion => "loop-deletion",
            Step::LoopIdiomRecognition => "loop-idiom-recognition",
            Step::LoopInvariantCodeMotion => "loop-invariant-code-motion",
            Step::LoopRotation => "loop-rotation",
            Step::LoopStrengthReduction => "loop-strength-reduction",
            Step::LoopUnrolling => "loop-unrolling",
            Step::LoopUnswitching => "loop-unswitching",
            Step::LoopVectorisation => "loop-vectorisation",
            Step::Mem2Reg => "mem2reg",
            Step::MemcpyOptimisation => "memcpy-optimisation",
            Step::PartialInlining => "partial-inlining",
            Step::Reassociation => "reassociation",
            Step::SlpVectorisation => "slp-vectorisation",
            Step::Sroa => "sroa",
            Step::StrengthReduction => "strength-reduction",
            Step::TailCallElimination => "tail-call-elimination",
        }
    }

    /// Decodes a display code back into a step.
    ///
    /// Whitespace is not a code; callers strip it before decoding.
    pub fn from_code(code: char) -> Result<Step> {
        Step::ALL
            .into_iter()
            .find(|step| step.code() == code)
            .ok_or(Error::UnknownStepCode(code))
    }

    /// Looks up a step by its full name.
    pub fn from_name(name: &str) -> Result<Step> {
        Step::ALL
            .into_iter()
            .find(|step| step.name() == name)
            .ok_or_else(|| Error::UnknownStepName(name.to_string()))
    }

    /// Draws a step uniformly from the full alphabet. One logical draw.
    pub fn sample<R: Rng>(rng: &mut R) -> Step {
        Step::ALL[rng.random_range(0..Step::ALL.len())]
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<char> = Step::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes.len(), Step::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Step::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Step::ALL.len());
    }

    #[test]
    fn test_code_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_code(step.code()), Ok(step));
        }
    }

    #[test]
    fn test_name_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_name(step.name()), Ok(step));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Step::from_code('?'), Err(Error::UnknownStepCode('?')));
        assert_eq!(Step::from_code(' '), Err(Error::UnknownStepCode(' ')));
        assert_eq!(Step::from_code('\t'), Err(Error::UnknownStepCode('\t')));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(
            Step::from_name("no-such-pass"),
            Err(Error::UnknownStepName("no-such-pass".to_string()))
        );
    }

    #[test]
    fn test_display_is_the_full_name() {
        assert_eq!(Step::Mem2Reg.to_string(), "mem2reg");
        assert_eq!(
            Step::LoopInvariantCodeMotion.to_string(),
            "loop-invariant-code-motion"
        );
    }

    #[test]
    fn test_sample_covers_the_alphabet() {
        let mut rng = create_rng(42);
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            seen.insert(Step::sample(&mut rng));
        }
        // 10^4 uniform draws over 29 symbols miss one with probability ~1e-152.
        assert_eq!(seen.len(), Step::ALL.len());
    }

    #[test]
    fn test_sample_is_roughly_uniform() {
        let mut rng = create_rng(42);
        let n = 29_000;
        let mut counts = vec![0u32; Step::ALL.len()];
        for _ in 0..n {
            let step = Step::sample(&mut rng);
            let idx = Step::ALL.iter().position(|&s| s == step).unwrap();
            counts[idx] += 1;
        }
        // Each symbol expects ~1000 hits.
        for &c in &counts {
            assert!(c > 700, "expected roughly uniform, got counts: {counts:?}");
        }
    }
}
