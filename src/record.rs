use std::io::{self, Write};
use std::time::Duration;

use crate::graphs::GraphKind;

pub const HEADER: &str = "DataStruct,row,col,runTime";

/// Time taken to generate one maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecord {
    pub data_struct: GraphKind,
    pub row: usize,
    pub col: usize,
    pub run_time: Duration,
}

/// Writes run records as csv, run times in seconds.
pub struct RecordWriter<W: Write> {
    out: W,
    wrote_header: bool,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            wrote_header: false,
            written: 0,
        }
    }

    pub fn write(&mut self, record: &RunRecord) -> io::Result<()> {
        if !self.wrote_header {
            writeln!(self.out, "{}", HEADER)?;
            self.wrote_header = true;
        }

        writeln!(
            self.out,
            "{},{},{},{:.6}",
            record.data_struct,
            record.row,
            record.col,
            record.run_time.as_secs_f64()
        )?;
        self.written += 1;

        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if !self.wrote_header {
            writeln!(self.out, "{}", HEADER)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod test_record {
    use super::*;

    #[test]
    fn writes_header_once() {
        let mut writer = RecordWriter::new(Vec::new());
        writer
            .write(&RunRecord {
                data_struct: GraphKind::EdgeList,
                row: 4,
                col: 12,
                run_time: Duration::from_millis(1500),
            })
            .unwrap();
        writer
            .write(&RunRecord {
                data_struct: GraphKind::IncMat,
                row: 125,
                col: 7,
                run_time: Duration::from_micros(250),
            })
            .unwrap();
        assert_eq!(writer.written(), 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "DataStruct,row,col,runTime\nedge-list,4,12,1.500000\ninc-mat,125,7,0.000250\n"
        );
    }

    #[test]
    fn empty_record_still_has_header() {
        let writer = RecordWriter::new(Vec::new());
        let out = writer.finish().unwrap();
        assert_eq!(out, b"DataStruct,row,col,runTime\n");
    }
}
