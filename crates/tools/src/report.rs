//! Sweep result rendering

use anyhow::Result;

use berlab_sim::sweep::BerPoint;

/// Render sweep points as an aligned two-column table.
pub fn to_table(points: &[BerPoint]) -> String {
    let mut out = String::from("  Eb/N0 (dB)          BER\n");
    for p in points {
        out.push_str(&format!("  {:>10.1}  {:>11.3e}\n", p.snr_db, p.ber));
    }
    out
}

/// Render sweep points as CSV with a `snr_db,ber` header.
pub fn to_csv(points: &[BerPoint]) -> String {
    let mut csv = String::from("snr_db,ber\n");
    for p in points {
        csv.push_str(&format!("{:.2},{:.10}\n", p.snr_db, p.ber));
    }
    csv
}

/// Render sweep points as pretty-printed JSON.
pub fn to_json(points: &[BerPoint]) -> Result<String> {
    Ok(serde_json::to_string_pretty(points)?)
}
