//! Evaluation helpers for label sequences.

/// Fraction of positions where `y_pred` agrees with `y_true`.
pub fn accuracy<Label>(y_true: &[Label], y_pred: &[Label]) -> f32
where
    Label: Eq,
{
    let n_correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    n_correct as f32 / y_true.len() as f32
}

/// Count each (true label, predicted label) pairing.
///
/// Row `i`, column `j` holds the number of samples whose true label is
/// `label_kinds[i]` and whose prediction is `label_kinds[j]`, so a perfect
/// classifier fills only the diagonal. `label_kinds` must not repeat a
/// label.
pub fn confusion_matrix<Label>(
    y_true: &[Label],
    y_pred: &[Label],
    label_kinds: &[Label],
) -> Vec<Vec<usize>>
where
    Label: Eq,
{
    label_kinds
        .iter()
        .map(|true_label| {
            label_kinds
                .iter()
                .map(|pred_label| {
                    y_true
                        .iter()
                        .zip(y_pred.iter())
                        .filter(|&(t, p)| t == true_label && p == pred_label)
                        .count()
                })
                .collect()
        })
        .collect()
}
