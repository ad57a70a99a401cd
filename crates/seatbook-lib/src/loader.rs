//! Loading flight definitions from a directory of text files.
//!
//! Each file describes one flight:
//!
//! ```text
//! Source: Chennai
//! Destination: Mumbai
//! Business Class Seats: {2, 4, 1, 8}
//! Economy Class Seats: {3, 6, 2, 18}
//! ```
//!
//! Values are read positionally (keys are informational). The flight number
//! is the filename prefix before the first `-`.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flight::{Flight, PricingConfig};
use crate::layout::SeatLayout;

/// Directory name searched in the working directory and the platform data dir.
pub const FLIGHT_DIR_NAME: &str = "flight_details";

/// Environment variable overriding the flight directory.
pub const FLIGHT_DIR_ENV: &str = "SEATBOOK_FLIGHT_DIR";

const FIELDS: [&str; 4] = [
    "source",
    "destination",
    "business seat layout",
    "economy seat layout",
];

/// A file that could not be turned into a flight.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of loading a flight directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub flights: Vec<Flight>,
    pub skipped: Vec<SkippedFile>,
}

/// Resolve the directory holding flight files.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `SEATBOOK_FLIGHT_DIR` environment variable.
/// 3. `./flight_details` when it exists.
/// 4. `flight_details` under the platform data directory.
pub fn resolve_flight_dir(target: Option<&Path>) -> Result<PathBuf> {
    resolve_flight_dir_from(
        target,
        env::var_os(FLIGHT_DIR_ENV),
        PathBuf::from(FLIGHT_DIR_NAME),
    )
}

fn resolve_flight_dir_from(
    target: Option<&Path>,
    env_path: Option<OsString>,
    local: PathBuf,
) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env_path.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(env_path));
    }

    if local.is_dir() {
        return Ok(local);
    }

    let dirs = ProjectDirs::from("com", "seatbook", "seatbook").ok_or(Error::FlightDirNotFound {
        path: local,
    })?;
    Ok(dirs.data_dir().join(FLIGHT_DIR_NAME))
}

/// Derive a flight number from a file name such as `A112-Chennai-Mumbai.txt`.
pub fn flight_number_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let number = match name.split_once('-') {
        Some((prefix, _)) => prefix,
        None => path.file_stem()?.to_str()?,
    };
    let number = number.trim();
    (!number.is_empty()).then(|| number.to_string())
}

/// Parse a flight definition from `reader`.
///
/// Errors carry `path` only for reporting; nothing is read from it.
pub fn parse_flight<R: BufRead>(
    number: &str,
    reader: R,
    pricing: &PricingConfig,
    path: &Path,
) -> Result<Flight> {
    let file_error = |line: Option<usize>, message: String| Error::FlightFile {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut values: Vec<(usize, String)> = Vec::with_capacity(FIELDS.len());
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let value = line
            .split_once(": ")
            .map(|(_, value)| value.trim().to_string())
            .ok_or_else(|| file_error(Some(line_no), "expected 'Key: Value'".to_string()))?;
        values.push((line_no, value));
        if values.len() == FIELDS.len() {
            break;
        }
    }

    if values.len() < FIELDS.len() {
        return Err(file_error(
            None,
            format!("missing {}", FIELDS[values.len()]),
        ));
    }

    let layout = |(line_no, value): &(usize, String)| {
        value
            .parse::<SeatLayout>()
            .map_err(|err| file_error(Some(*line_no), err.to_string()))
    };
    let business = layout(&values[2])?;
    let economy = layout(&values[3])?;

    for (class, seat_layout) in [("business", &business), ("economy", &economy)] {
        if seat_layout.declared_mismatch() {
            warn!(
                flight = number,
                class,
                declared = seat_layout.declared_total,
                generated = seat_layout.capacity(),
                "declared seat total differs from layout"
            );
        }
    }

    Ok(Flight::new(number, values[0].1.clone(), values[1].1.clone())
        .with_layouts(&business, &economy)
        .with_pricing(*pricing))
}

/// Load a single flight file.
pub fn load_flight_file(path: &Path, pricing: &PricingConfig) -> Result<Flight> {
    let number = flight_number_from_path(path).ok_or_else(|| Error::FlightFile {
        path: path.to_path_buf(),
        line: None,
        message: "cannot derive a flight number from the file name".to_string(),
    })?;
    let file = fs::File::open(path)?;
    parse_flight(&number, BufReader::new(file), pricing, path)
}

/// Load every flight file in `dir`, in file-name order.
///
/// Unreadable or malformed files, and files repeating an already loaded
/// flight number, are logged and reported in [`LoadReport::skipped`].
pub fn load_flights_from_dir(dir: &Path, pricing: &PricingConfig) -> Result<LoadReport> {
    if !dir.is_dir() {
        return Err(Error::FlightDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    let mut report = LoadReport::default();
    for path in paths {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if !path.is_file() || hidden {
            debug!("skipping {}", path.display());
            continue;
        }

        match load_flight_file(&path, pricing) {
            Ok(flight) => {
                let duplicate = report
                    .flights
                    .iter()
                    .any(|f| f.number.eq_ignore_ascii_case(&flight.number));
                if duplicate {
                    warn!(flight = %flight.number, "duplicate flight number in {}", path.display());
                    report.skipped.push(SkippedFile {
                        error: Error::FlightFile {
                            path: path.clone(),
                            line: None,
                            message: format!("duplicate flight number {}", flight.number),
                        },
                        path,
                    });
                } else {
                    report.flights.push(flight);
                }
            }
            Err(error) => {
                warn!(error = %error, "skipping flight file {}", path.display());
                report.skipped.push(SkippedFile { path, error });
            }
        }
    }

    info!(
        loaded = report.flights.len(),
        skipped = report.skipped.len(),
        "loaded flights from {}",
        dir.display()
    );
    Ok(report)
}

/// Read a JSON pricing override. Missing fields keep their defaults.
pub fn load_pricing_config(path: &Path) -> Result<PricingConfig> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| Error::PricingConfig {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::CabinClass;
    use std::io::Cursor;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_flight_dir_env<F, R>(value: Option<&str>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = env::var_os(FLIGHT_DIR_ENV);
        match value {
            Some(v) => env::set_var(FLIGHT_DIR_ENV, v),
            None => env::remove_var(FLIGHT_DIR_ENV),
        }

        let result = f();

        match saved {
            Some(v) => env::set_var(FLIGHT_DIR_ENV, v),
            None => env::remove_var(FLIGHT_DIR_ENV),
        }
        result
    }

    fn parse(text: &str) -> Result<Flight> {
        parse_flight(
            "A112",
            Cursor::new(text),
            &PricingConfig::default(),
            Path::new("A112-test.txt"),
        )
    }

    #[test]
    fn parses_route_and_layouts() {
        let flight = parse(
            "Source: Chennai\nDestination: Mumbai\n\
             Business Class Seats: {2, 4, 1, 8}\nEconomy Class Seats: {3, 6, 2, 18}\n",
        )
        .expect("valid flight");
        assert_eq!(flight.number, "A112");
        assert_eq!(flight.source, "Chennai");
        assert_eq!(flight.destination, "Mumbai");
        assert_eq!(flight.seat_count(CabinClass::Business), 8);
        assert_eq!(flight.seat_count(CabinClass::Economy), 18);
    }

    #[test]
    fn skips_blank_lines() {
        let flight = parse("\nSource: A\n\nDestination: B\nB: {1, 2, 1, 2}\nE: {1, 2, 1, 2}")
            .expect("valid flight");
        assert_eq!(flight.destination, "B");
    }

    #[test]
    fn reports_missing_fields() {
        let err = parse("Source: Chennai\nDestination: Mumbai\n").expect_err("incomplete");
        match err {
            Error::FlightFile { line, message, .. } => {
                assert_eq!(line, None);
                assert_eq!(message, "missing business seat layout");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn reports_bad_layout_with_line_number() {
        let err = parse("Source: A\nDestination: B\nBusiness: {1, 2}\nEconomy: {1, 2, 1, 2}\n")
            .expect_err("bad layout");
        assert!(matches!(err, Error::FlightFile { line: Some(3), .. }));
    }

    #[test]
    fn reports_lines_without_separator() {
        let err = parse("Source Chennai\n").expect_err("no separator");
        assert!(matches!(err, Error::FlightFile { line: Some(1), .. }));
    }

    #[test]
    fn flight_number_is_prefix_before_dash() {
        assert_eq!(
            flight_number_from_path(Path::new("dir/A112-Chennai-Mumbai.txt")).as_deref(),
            Some("A112")
        );
        assert_eq!(
            flight_number_from_path(Path::new("Z9.txt")).as_deref(),
            Some("Z9")
        );
        assert_eq!(flight_number_from_path(Path::new("-x.txt")), None);
    }

    #[test]
    fn explicit_dir_beats_environment() {
        with_flight_dir_env(Some("/from/env"), || {
            let resolved = resolve_flight_dir(Some(Path::new("/explicit"))).expect("resolved");
            assert_eq!(resolved, PathBuf::from("/explicit"));
        });
    }

    #[test]
    fn environment_variable_selects_dir() {
        with_flight_dir_env(Some("/from/env"), || {
            let resolved = resolve_flight_dir(None).expect("resolved");
            assert_eq!(resolved, PathBuf::from("/from/env"));
        });
    }

    #[test]
    fn environment_beats_local_dir() {
        let temp = TempDir::new().expect("temp dir");
        let local = temp.path().join(FLIGHT_DIR_NAME);
        fs::create_dir(&local).expect("create local dir");

        let resolved =
            resolve_flight_dir_from(None, Some(OsString::from("/from/env")), local).expect("resolved");
        assert_eq!(resolved, PathBuf::from("/from/env"));
    }

    #[test]
    fn local_dir_used_when_present() {
        let temp = TempDir::new().expect("temp dir");
        let local = temp.path().join(FLIGHT_DIR_NAME);
        fs::create_dir(&local).expect("create local dir");

        let resolved = resolve_flight_dir_from(None, None, local.clone()).expect("resolved");
        assert_eq!(resolved, local);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let temp = TempDir::new().expect("temp dir");
        let local = temp.path().join(FLIGHT_DIR_NAME);
        fs::create_dir(&local).expect("create local dir");

        let resolved =
            resolve_flight_dir_from(None, Some(OsString::new()), local.clone()).expect("resolved");
        assert_eq!(resolved, local);
    }

    #[test]
    fn falls_back_to_platform_data_dir() {
        let temp = TempDir::new().expect("temp dir");
        let local = temp.path().join(FLIGHT_DIR_NAME);

        match resolve_flight_dir_from(None, None, local.clone()) {
            Ok(resolved) => {
                assert_ne!(resolved, local);
                assert!(resolved.is_absolute());
                assert!(resolved.ends_with(FLIGHT_DIR_NAME));
            }
            // No home directory in this environment.
            Err(Error::FlightDirNotFound { path }) => assert_eq!(path, local),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
}
