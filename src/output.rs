//! Human-readable rendering of analysis results.
//!
//! One block per stage transition plus one cumulative block. Rounding here
//! is display-only; the tensors keep full precision.

use std::fmt::Write;

use crate::stages::{StageAnalysis, Transition};
use crate::tensor::Tensor;


/// Renders a square matrix, one bracketed row per line, `digits` decimal
/// places per entry.
pub fn format_tensor(tensor: &Tensor, digits: usize) -> String {
    let n = tensor.dim();
    // Wide enough for a sign, four integer digits and the decimal point.
    let width = digits + 7;
    let mut text = String::new();
    for i in 0..n {
        text.push('[');
        for j in 0..n {
            let _ = write!(text, " {:>width$.digits$}", tensor.get(i, j));
        }
        text.push_str(" ]\n");
    }
    text
}

fn format_transition(transition: &Transition, header: &str, digits: usize) -> String {
    format!(
        "=== {header} ===\nF =\n{}E =\n{}",
        format_tensor(&transition.f, digits),
        format_tensor(&transition.e, digits),
    )
}

/// Renders the full analysis: every stage transition in order, then the
/// cumulative transition across the whole sequence.
pub fn writeup(analysis: &StageAnalysis, digits: usize) -> String {
    let mut text = String::new();
    for transition in &analysis.transitions {
        let header = format!("{} -> {}", transition.from, transition.to);
        text.push_str(&format_transition(transition, &header, digits));
        text.push('\n');
    }
    let header = format!(
        "cumulative {} -> {}",
        analysis.total.from, analysis.total.to
    );
    text.push_str(&format_transition(&analysis.total, &header, digits));
    text
}
