use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::render::OutputStream;

/// A buffered HTML file; [`OutputFile::finish`] flushes it.
pub(crate) struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    pub(crate) fn create(path: &Path) -> Result<OutputFile> {
        let file = File::create(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub(crate) fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("wrote `{}`", self.path.display());

        Ok(self.path)
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}
