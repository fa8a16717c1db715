use anyhow::Context;
use indexmap::IndexMap;
use lazy_static::lazy_static;

use stride::{Cursor, LogLevel, Logger, Source, Step, StrideError};

/// readings above this are rejected by the validation pass
const MAX_READING: i64 = 10;

lazy_static! {
    /// named demo datasets, walked by name from the command line
    ///
    /// registered in insertion order, which the key walk below reproduces
    static ref DATASETS: IndexMap<String, Vec<i64>> = {
        let mut m = IndexMap::new();
        m.insert("spikes".to_string(), vec![2, 7, 40, 3]);
        m.insert("readings".to_string(), vec![1, 2, 3, 4, 5]);
        m
    };
}

/// look up a dataset by name, failing fast if it was never registered
fn dataset(name: &str) -> Result<&'static [i64], StrideError> {
    DATASETS
        .get(name)
        .map(Vec::as_slice)
        .ok_or_else(|| StrideError::UnknownSource(name.to_string()))
}

fn main() -> anyhow::Result<()> {
    let log = Logger::new(true, LogLevel::Info);

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "readings".to_string());
    let readings = dataset(&name).context("failed to resolve dataset")?;

    log.info(format!("walking dataset {name:?}"));
    let mut cursor = readings.cursor();
    while let Step::Yield(value) = cursor.advance() {
        log.info(format!("  produced {value}"));
    }
    log.info("  exhausted");

    log.info("walking registered dataset names");
    let mut names = DATASETS.cursor();
    while let Step::Yield(key) = names.advance() {
        log.info(format!("  key {key:?}"));
    }

    log.info("for_each over the same dataset");
    readings
        .cursor()
        .for_each(|value| log.info(format!("  produced {value}")));

    log.info(format!("validating \"spikes\" against limit {MAX_READING}"));
    let mut pos = 0;
    let outcome = dataset("spikes")?.cursor().try_for_each(|&value| {
        let at = pos;
        pos += 1;
        if value > MAX_READING {
            return Err(StrideError::OutOfRange(at, value));
        }
        log.info(format!("  reading {value} ok"));
        Ok(())
    });
    if let Err(e) = outcome {
        log.warn(format!("validation stopped: {e}"));
    }

    Ok(())
}
