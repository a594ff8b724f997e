//! Final result presentation and map-link selection.

use crate::console::{ask_yes_no, Console};
use anyhow::Result;
use dataset::Restaurant;

/// At most this many records appear in any listing or preview.
pub const DISPLAY_LIMIT: usize = 50;

/// Opens a map for a coordinate pair. Production implementation launches the
/// system browser; tests record the call.
pub trait MapOpener {
    fn open(&self, latitude: f64, longitude: f64) -> Result<()>;
}

/// Print index-prefixed one-line summaries for up to `DISPLAY_LIMIT` records.
pub fn list_results(console: &mut dyn Console, records: &[Restaurant]) -> Result<()> {
    for (i, r) in records.iter().take(DISPLAY_LIMIT).enumerate() {
        console.write_line(&format!("{i}. {}", r.summary()))?;
    }
    Ok(())
}

fn display_name(r: &Restaurant) -> &str {
    r.name.as_deref().unwrap_or("No Name")
}

/// Try to open a map for one record.
///
/// Records without both coordinates are rejected with a message instead of
/// being forwarded to the opener. Returns whether the map was opened.
fn open_directions(
    console: &mut dyn Console,
    opener: &dyn MapOpener,
    r: &Restaurant,
) -> Result<bool> {
    match r.coordinates() {
        Some((latitude, longitude)) => {
            opener.open(latitude, longitude)?;
            Ok(true)
        }
        None => {
            console.write_line(&format!(
                "No coordinates on file for {}; cannot open directions.",
                display_name(r)
            ))?;
            Ok(false)
        }
    }
}

/// Present the final, non-empty result set and resolve the directions choice.
///
/// One record: a single yes/no for directions. Several: yes/no, then an index
/// into the listing, re-solicited until it parses and is in range. Declining
/// ends the session; so does a single record without coordinates, since
/// asking again could never succeed.
pub fn present(
    console: &mut dyn Console,
    opener: &dyn MapOpener,
    records: &[Restaurant],
) -> Result<()> {
    console.write_line("")?;
    console.write_line("Final Results")?;
    console.write_line("---------------------------")?;
    list_results(console, records)?;
    console.write_line("")?;

    if records.len() == 1 {
        if ask_yes_no(
            console,
            "Would you like to get directions to this restaurant? (yes/no): ",
        )? && open_directions(console, opener, &records[0])?
        {
            return Ok(());
        }
    } else {
        loop {
            if !ask_yes_no(
                console,
                "Would you like to get directions to a restaurant? (yes/no): ",
            )? {
                break;
            }
            let index = loop {
                let raw = console.read_line(
                    "Enter the number of the restaurant you would like to get directions to: ",
                )?;
                match raw.trim().parse::<usize>() {
                    Ok(i) if i < records.len() => break i,
                    _ => console.write_line("Invalid input. Please enter a valid number.")?,
                }
            };
            if open_directions(console, opener, &records[index])? {
                return Ok(());
            }
            // Rejected record: back to the directions question so the
            // operator can pick another index or bow out.
        }
    }

    console.write_line("")?;
    console.write_line("Session Ended")?;
    Ok(())
}
