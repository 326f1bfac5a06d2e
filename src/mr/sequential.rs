use fnv::FnvHashMap;
use log::{debug, trace};

use crate::KeyValue;

/// Runs a map/reduce application over `inputs` on the calling thread.
///
/// Every value emitted for a key reaches `reduce` in emission order, inputs
/// taken in the order given. The result holds one pair per distinct key,
/// sorted by key.
pub fn run<S, M, R>(inputs: &[S], map: M, reduce: R) -> Vec<KeyValue>
where
    S: AsRef<str>,
    M: Fn(&str) -> Vec<KeyValue>,
    R: Fn(&str, &[usize]) -> usize,
{
    let mut groups: FnvHashMap<String, Vec<usize>> = FnvHashMap::default();
    for (id, input) in inputs.iter().enumerate() {
        let intermediate = map(input.as_ref());
        trace!("[Map] Input #{} emitted {} pair(s)", id, intermediate.len());
        for kv in intermediate {
            groups.entry(kv.key).or_default().push(kv.value);
        }
    }

    debug!(
        "[Reduce] Reducing {} distinct key(s) from {} input(s)",
        groups.len(),
        inputs.len()
    );

    let mut output = groups
        .into_iter()
        .map(|(key, values)| {
            let value = reduce(&key, &values);
            KeyValue::new(key, value)
        })
        .collect::<Vec<KeyValue>>();
    output.sort_unstable_by(|a, b| a.key.cmp(&b.key));
    output
}
