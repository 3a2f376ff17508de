/// Splits `items` into maximal contiguous runs that share a predicate result.
///
/// Each element is compared with the result recorded for the run it would
/// join, so the first element always opens a run and no empty run can be
/// produced. Concatenating the returned runs yields the input unchanged.
///
/// ```text
/// [d, c, c, d, c]  ->  [[d], [c, c], [d], [c]]
/// ```
pub fn group_runs<T, I, F>(items: I, mut predicate: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut runs: Vec<(bool, Vec<T>)> = Vec::new();

    for item in items {
        let key = predicate(&item);
        match runs.last_mut() {
            Some((run_key, run)) if *run_key == key => run.push(item),
            _ => runs.push((key, vec![item])),
        }
    }

    runs.into_iter()
        .map(|(_, run)| run)
        .filter(|run| !run.is_empty())
        .collect()
}
