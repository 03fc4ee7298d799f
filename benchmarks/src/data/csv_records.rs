use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tabular_codec::dataset::{Record, Value};

/// Load CSV rows as records keyed by header name.
///
/// Cell types are inferred per cell: `true`/`false` become booleans, cells
/// that parse as finite numbers become numbers, anything else stays a string.
///
/// # Example
///
/// ```no_run
/// use benchmarks::data::load_records_from_path;
///
/// let records = load_records_from_path("datasets/weather.csv").unwrap();
/// ```
pub fn load_records<R: Read>(reader: R) -> Result<Vec<Record>, csv::Error> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(key, cell)| (key, parse_cell(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// Load a CSV file from disk. See [`load_records`].
pub fn load_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, csv::Error> {
    let file = File::open(path)?;
    load_records(BufReader::new(file))
}

fn parse_cell(cell: &str) -> Value {
    match cell {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => match cell.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::String(cell.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER: &str = "\
outlook,temp,windy,play
sunny,85,false,no
rainy, 70 ,true,yes
overcast,64,true,yes
";

    #[test]
    fn test_load_records_infers_types() {
        let records = load_records(WEATHER.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].keys().collect::<Vec<_>>(),
            vec!["outlook", "temp", "windy", "play"]
        );
        assert_eq!(records[1].get("outlook"), Some(&Value::from("rainy")));
        assert_eq!(records[1].get("temp"), Some(&Value::from(70)));
        assert_eq!(records[2].get("windy"), Some(&Value::from(true)));
    }

    #[test]
    fn test_parse_cell_keeps_non_finite_as_string() {
        assert_eq!(parse_cell("NaN"), Value::from("NaN"));
        assert_eq!(parse_cell("inf"), Value::from("inf"));
        assert_eq!(parse_cell("-1.5"), Value::from(-1.5));
    }

    #[test]
    fn test_bundled_weather_csv_encodes() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/datasets/weather.csv");
        let records = load_records_from_path(path).unwrap();
        assert_eq!(records.len(), 14);

        let options = tabular_codec::EncodeOptions::new()
            .with_data_keys(["outlook", "temperature", "humidity", "windy"])
            .with_label_keys(["play"]);
        let encoded = tabular_codec::RecordCodec::new()
            .encode(&records, &options)
            .unwrap();
        // 3 outlooks + temperature + humidity + windy + 2 play values
        assert_eq!(encoded.n_columns(), 8);
    }

    #[test]
    fn test_load_records_missing_file() {
        assert!(load_records_from_path("does/not/exist.csv").is_err());
    }
}
