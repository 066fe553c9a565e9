use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use thiserror::Error;

use crate::engine::assets::plot_dataset::{PlotDataset, PlotPoint};

/// Counts of data rows left out of the dataset, by reason.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowSkipStats {
    /// Rows with fewer than five comma-separated fields.
    pub short_rows: usize,
    /// Rows whose coordinate or cluster fields failed to parse.
    pub bad_numbers: usize,
}

impl RowSkipStats {
    pub fn total(&self) -> usize {
        self.short_rows + self.bad_numbers
    }
}

#[derive(Debug, Error)]
pub enum PlotDataError {
    #[error("failed to read point data `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse headered CSV text into a dataset, keeping at most `limit` rows.
///
/// The first line is always treated as a header and never validated. Each
/// following row needs at least five comma-separated fields: fields 1..=3 are
/// the coordinates, field 4 the cluster id, anything after is ignored.
/// Malformed rows are skipped and counted; they do not count toward `limit`.
pub fn parse_plot_csv(text: &str, limit: usize) -> (PlotDataset, RowSkipStats) {
    let mut points = Vec::new();
    let mut stats = RowSkipStats::default();

    for (row, line) in text.lines().skip(1).enumerate() {
        if points.len() >= limit {
            break;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 5 {
            if !line.trim().is_empty() {
                stats.short_rows += 1;
            }
            continue;
        }

        let x = fields[1].trim().parse::<f32>();
        let y = fields[2].trim().parse::<f32>();
        let z = fields[3].trim().parse::<f32>();
        let cluster = fields[4].trim().parse::<i32>();

        match (x, y, z, cluster) {
            (Ok(x), Ok(y), Ok(z), Ok(cluster)) => {
                points.push(PlotPoint { x, y, z, cluster });
            }
            _ => {
                stats.bad_numbers += 1;
                warn!("Skipping data row {}: unparsable numeric field", row + 1);
            }
        }
    }

    (PlotDataset::from_points(points), stats)
}

/// Read and parse the point data file.
pub fn load_plot_csv(
    path: &str,
    limit: usize,
) -> Result<(PlotDataset, RowSkipStats), PlotDataError> {
    let resolved = resolve_data_path(path);
    let text = fs::read_to_string(&resolved).map_err(|source| PlotDataError::Read {
        path: resolved.clone(),
        source,
    })?;
    Ok(parse_plot_csv(&text, limit))
}

/// Try the path as given first, then relative to this crate's manifest so
/// `cargo run` works from the workspace root as well.
fn resolve_data_path(path: &str) -> PathBuf {
    let direct = PathBuf::from(path);
    if direct.exists() {
        return direct;
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "h1,h2,h3,h4,h5\n_,1.0,2.0,3.0,0\n_,4.0,5.0,6.0,11";

    #[test]
    fn parses_rows_after_header() {
        let (data, stats) = parse_plot_csv(SAMPLE, usize::MAX);
        assert_eq!(stats.total(), 0);
        assert_eq!(
            data.points(),
            &[
                PlotPoint { x: 1.0, y: 2.0, z: 3.0, cluster: 0 },
                PlotPoint { x: 4.0, y: 5.0, z: 6.0, cluster: 11 },
            ]
        );
    }

    #[test]
    fn scaled_scenario_matches_expected_positions() {
        let (data, _) = parse_plot_csv(SAMPLE, usize::MAX);
        assert_eq!(
            data.points()[0].scaled_position(2.0),
            Vec3::new(2.0, 4.0, 6.0)
        );
        assert_eq!(
            data.points()[1].scaled_position(2.0),
            Vec3::new(8.0, 10.0, 12.0)
        );
        assert_eq!(constants::cluster::cluster_hue(data.points()[0].cluster), 0.0);
        assert_eq!(constants::cluster::cluster_hue(data.points()[1].cluster), 0.1);
    }

    #[test]
    fn header_is_skipped_even_when_it_looks_like_data() {
        let text = "0,1.0,2.0,3.0,4\n_,5.0,6.0,7.0,8";
        let (data, _) = parse_plot_csv(text, usize::MAX);
        assert_eq!(data.len(), 1);
        assert_eq!(data.points()[0].cluster, 8);
    }

    #[test]
    fn short_rows_are_skipped_and_counted() {
        let text = "header\n_,1.0,2.0,3.0,0\nonly,three,fields\n_,4.0,5.0,6.0,1";
        let (data, stats) = parse_plot_csv(text, usize::MAX);
        assert_eq!(data.len(), 2);
        assert_eq!(stats.short_rows, 1);
        assert_eq!(stats.bad_numbers, 0);
    }

    #[test]
    fn unparsable_numbers_are_skipped_and_counted() {
        let text = "header\n_,1.0,2.0,3.0,0\n_,oops,2.0,3.0,1\n_,1.0,2.0,3.0,nope";
        let (data, stats) = parse_plot_csv(text, usize::MAX);
        assert_eq!(data.len(), 1);
        assert_eq!(stats.bad_numbers, 2);
    }

    #[test]
    fn limit_caps_valid_rows_in_order() {
        let text = "header\n_,1.0,0,0,0\nbad row\n_,2.0,0,0,0\n_,3.0,0,0,0";
        let (data, stats) = parse_plot_csv(text, 2);
        assert_eq!(data.len(), 2);
        assert_eq!(data.points()[0].x, 1.0);
        assert_eq!(data.points()[1].x, 2.0);
        // The short row does not eat into the limit.
        assert_eq!(stats.short_rows, 1);
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let text = "header\n_,1.0,2.0,3.0,4,extra,more";
        let (data, stats) = parse_plot_csv(text, usize::MAX);
        assert_eq!(data.len(), 1);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn windows_line_endings_parse() {
        let text = "header\r\n_,1.0,2.0,3.0,7\r\n";
        let (data, stats) = parse_plot_csv(text, usize::MAX);
        assert_eq!(data.len(), 1);
        assert_eq!(data.points()[0].cluster, 7);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let (data, stats) = parse_plot_csv("", usize::MAX);
        assert!(data.is_empty());
        assert_eq!(stats.total(), 0);

        let (data, stats) = parse_plot_csv("header only", usize::MAX);
        assert!(data.is_empty());
        assert_eq!(stats.total(), 0);
    }
}
