/*! JSON Lines writer.

Writes one serialized item per line. Non-ASCII characters are written as-is (UTF-8).
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::Error;

use super::WriterTrait;

pub struct JsonLines<T> {
    path: PathBuf,
    handle: BufWriter<File>,
    nb_lines: usize,
    item: PhantomData<T>,
}

impl<T> JsonLines<T> {
    /// Location of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines written so far.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

impl<T: Serialize> WriterTrait for JsonLines<T> {
    type Item = T;

    /// Create (or truncate) the file at `dst`, creating parent directories if needed.
    fn new(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        debug!("creating {:?}", dst);

        Ok(Self {
            path: dst.to_path_buf(),
            handle: BufWriter::new(File::create(dst)?),
            nb_lines: 0,
            item: PhantomData,
        })
    }

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
