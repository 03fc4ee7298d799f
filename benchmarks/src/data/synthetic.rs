use tabular_codec::dataset::{Record, Value};

const OUTLOOKS: [&str; 5] = ["sunny", "overcast", "rainy", "foggy", "snowy"];

/// Deterministic records with `n_categories` distinct station ids, one
/// categorical outlook, two numeric readings and a boolean flag.
pub fn synthetic_records(n: usize, n_categories: usize) -> Vec<Record> {
    let n_categories = n_categories.max(1);
    (0..n)
        .map(|i| {
            [
                ("station", Value::from(format!("station-{}", i % n_categories))),
                ("outlook", Value::from(OUTLOOKS[(i * 7) % OUTLOOKS.len()])),
                ("temp", Value::from(i as f64 * 0.1 + ((i % 13) as f64))),
                ("humidity", Value::from(((i * 31) % 100) as f64)),
                ("windy", Value::from(i % 3 == 0)),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}
