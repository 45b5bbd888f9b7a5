//! CSV export of the current waveform
//!
//! Columns are the channels in waveform order; rows are sample indices.
//! All channels are truncated to the shortest channel's length so every
//! row is complete.

use crate::types::Waveform;

/// Serialize a waveform to CSV text.
///
/// Header row of channel names, then one comma-separated row per sample
/// index up to the shortest channel length. An empty waveform yields just
/// an empty header line.
pub fn waveform_to_csv(waveform: &Waveform) -> String {
    let header = waveform.channels().collect::<Vec<_>>().join(",");

    let rows = waveform.shortest_len();
    let mut out = String::with_capacity(header.len() + rows * waveform.len() * 8);
    out.push_str(&header);

    let mut row = Vec::with_capacity(waveform.len());
    for i in 0..rows {
        row.clear();
        for (_, samples) in waveform.iter() {
            row.push(samples[i].to_string());
        }
        out.push('\n');
        out.push_str(&row.join(","));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_shortest_channel() {
        let mut waveform = Waveform::new();
        waveform.insert("A", vec![1.0, 2.0, 3.0]);
        waveform.insert("B", vec![4.0, 5.0]);

        // the third A sample is dropped
        assert_eq!(waveform_to_csv(&waveform), "A,B\n1,4\n2,5");
    }

    #[test]
    fn test_column_order_is_channel_order() {
        let mut waveform = Waveform::new();
        waveform.insert("time", vec![0.0]);
        waveform.insert("amp", vec![7.5]);

        assert_eq!(waveform_to_csv(&waveform), "time,amp\n0,7.5");
    }

    #[test]
    fn test_empty_waveform() {
        assert_eq!(waveform_to_csv(&Waveform::new()), "");
    }

    #[test]
    fn test_single_channel() {
        let mut waveform = Waveform::new();
        waveform.insert("only", vec![1.5, -2.25]);
        assert_eq!(waveform_to_csv(&waveform), "only\n1.5\n-2.25");
    }
}
