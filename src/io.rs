//! CSV input and output for city tables, routes and traces.
//!
//! The input format is a header row followed by `name,x,y` records. The
//! header text itself is not checked; columns are read by position.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::hc::TracePoint;
use crate::tsp::{City, Route};

/// Failure to load a city table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid city record: {0}")]
    Csv(#[from] csv::Error),
}

/// Cities with their display names, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityTable {
    pub names: Vec<String>,
    pub cities: Vec<City>,
}

impl CityTable {
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Display name of city `index`, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

/// Reads a city table from CSV.
///
/// # Examples
///
/// ```
/// use u_hillclimb::io::read_cities;
///
/// let data = "name,x,y\nA,0,0\nB,3,4\n";
/// let table = read_cities(data.as_bytes()).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.name(1), Some("B"));
/// ```
pub fn read_cities<R: Read>(reader: R) -> Result<CityTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = CityTable::default();
    for record in csv_reader.deserialize() {
        let (name, x, y): (String, f64, f64) = record?;
        table.names.push(name);
        table.cities.push(City::new(x, y));
    }
    Ok(table)
}

/// Loads a city table from a CSV file.
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<CityTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let table = read_cities(file)?;
    tracing::debug!(path = %path.display(), cities = table.len(), "loaded city table");
    Ok(table)
}

#[derive(Serialize)]
struct RouteRow<'a> {
    position: usize,
    name: &'a str,
    x: f64,
    y: f64,
}

/// Writes `route` as `position,name,x,y` rows in visiting order.
///
/// Cities without a name get an empty name column.
pub fn write_route_csv<W: Write>(
    writer: W,
    table: &CityTable,
    route: &Route,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (position, &index) in route.as_slice().iter().enumerate() {
        let city = table.cities[index];
        csv_writer.serialize(RouteRow {
            position,
            name: table.name(index).unwrap_or(""),
            x: city.x,
            y: city.y,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the convergence trace as `elapsed_secs,cost` rows.
pub fn write_trace_csv<W: Write>(writer: W, trace: &[TracePoint]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in trace {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cities() {
        let data = "nome,x,y\nLisboa, 1.5 ,2\nPorto,-3,4.25\n";
        let table = read_cities(data.as_bytes()).unwrap();

        assert_eq!(table.names, vec!["Lisboa", "Porto"]);
        assert_eq!(
            table.cities,
            vec![City::new(1.5, 2.0), City::new(-3.0, 4.25)]
        );
    }

    #[test]
    fn test_read_header_only() {
        let table = read_cities("name,x,y\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_rejects_bad_number() {
        let data = "name,x,y\nA,zero,0\n";
        let err = read_cities(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_cities("/definitely/not/here/cities.csv").unwrap_err();
        match err {
            LoadError::NotFound { path } => {
                assert!(path.ends_with("cities.csv"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_write_route() {
        let table = CityTable {
            names: vec!["A".into(), "B".into(), "C".into()],
            cities: vec![City::new(0.0, 0.0), City::new(1.0, 0.0), City::new(0.5, 2.0)],
        };
        let route = Route::try_from_order(vec![2, 0, 1]).unwrap();

        let mut out = Vec::new();
        write_route_csv(&mut out, &table, &route).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "position,name,x,y\n0,C,0.5,2.0\n1,A,0.0,0.0\n2,B,1.0,0.0\n");
    }

    #[test]
    fn test_write_trace() {
        let trace = vec![
            TracePoint {
                elapsed_secs: 0.5,
                cost: 12.0,
            },
            TracePoint {
                elapsed_secs: 1.25,
                cost: 10.5,
            },
        ];
        let mut out = Vec::new();
        write_trace_csv(&mut out, &trace).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "elapsed_secs,cost\n0.5,12.0\n1.25,10.5\n");
    }
}
