//! Text persistence of point data.
//!
//! The format is line oriented: one block per point-set entry, a color
//! header followed by one `x, y` line per point, closed by a single
//! `points_end` sentinel after the last block. Colors are written in the
//! [`Rgba`] display form (lowercase hex) or the literal `none` for
//! entries using the default color.
//!
//! Only point data has a defined format. Saving a scene that holds
//! segment or polygon entries is refused up front, and files carrying
//! content after the sentinel are rejected on load; no text format for
//! those kinds exists.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::scene::Scene;

/// Sentinel line closing the point section.
const POINTS_SENTINEL: &str = "points_end";

/// Color header written for entries without an explicit color.
const DEFAULT_COLOR_TOKEN: &str = "none";

pub(crate) fn save_plot(scene: &Scene, path: &Path) -> Result<()> {
    if !scene.segments_layer().is_empty() || !scene.polygons_layer().is_empty() {
        return Err(Error::Unsupported(
            "only point data can be saved as plot text",
        ));
    }

    let mut file = BufWriter::new(File::create(path)?);
    for entry in scene.points_layer().entries() {
        match entry.color {
            Some(color) => writeln!(file, "{color}")?,
            None => writeln!(file, "{DEFAULT_COLOR_TOKEN}")?,
        }
        for p in &entry.shapes {
            writeln!(file, "{}, {}", p.x, p.y)?;
        }
    }
    writeln!(file, "{POINTS_SENTINEL}")?;
    file.flush()?;

    debug!(
        "saved {} point entries to {}",
        scene.points_layer().len(),
        path.display()
    );
    Ok(())
}

pub(crate) fn open_plot(scene: &mut Scene, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;

    scene.clear();

    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;
    loop {
        if i >= lines.len() {
            return Err(Error::PlotFormat {
                line: lines.len(),
                message: format!("missing {POINTS_SENTINEL} sentinel"),
            });
        }

        let header = lines[i].trim();
        i += 1;
        if header == POINTS_SENTINEL {
            break;
        }

        let color = if header == DEFAULT_COLOR_TOKEN {
            None
        } else {
            Some(Rgba::parse(header)?)
        };

        // Coordinate lines are exactly the lines containing a comma; the
        // first line without one is the next header or the sentinel.
        let mut points = Vec::new();
        while i < lines.len() && lines[i].contains(',') {
            points.push(parse_point(i + 1, lines[i])?);
            i += 1;
        }
        scene.add_points(points, color);
    }

    // The sentinel must close the file; anything after it would be the
    // segment section, which has no defined format.
    if lines[i..].iter().any(|line| !line.trim().is_empty()) {
        return Err(Error::Unsupported(
            "plot text holds more than point data; nothing past the point section can be loaded",
        ));
    }

    debug!(
        "loaded {} point entries from {}",
        scene.points_layer().len(),
        path.display()
    );
    Ok(())
}

fn parse_point(line_no: usize, line: &str) -> Result<Point> {
    let mut parts = line.split(',');
    let x = parts.next();
    let y = parts.next();
    let (Some(x), Some(y), None) = (x, y, parts.next()) else {
        return Err(Error::PlotFormat {
            line: line_no,
            message: "expected two comma-separated coordinates".to_string(),
        });
    };

    let parse = |s: &str| -> Result<f32> {
        s.trim().parse().map_err(|_| Error::PlotFormat {
            line: line_no,
            message: format!("not a number: {:?}", s.trim()),
        })
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}
