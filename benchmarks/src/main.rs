// Entry point that lists the available benchmarks

fn main() {
    println!("tabular-codec Benchmark Suite");
    println!();
    println!("Usage:");
    println!("  cargo bench --package benchmarks");
    println!("  cargo bench --package benchmarks --bench codec");
    println!();
    println!("Available benchmarks:");
    println!("  - encode: records -> numeric rows, by row count and one-hot width");
    println!("  - decode: numeric rows -> records");
    println!("  - decode_row: single row latency");
    println!("  - encode_csv: datasets/weather.csv repeated to each size");
}
