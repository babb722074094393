//! Record framing and iteration: the `FileReader` layer (spec §4.1).

use byteorder::{BigEndian, ByteOrder};
use std::io::Read;

use crate::error::{Result, UfError};
use crate::ray::Ray;

/// Reads a padding-agnostic sequence of UF records from any forward-only
/// byte source and decodes each into a [`Ray`].
pub struct FileReader<R: Read> {
    reader: R,
    /// 0, 2, or 4 bytes of padding surrounding every record, uniform for
    /// the whole stream (spec §4.1 "Padding discovery").
    padding: usize,
    lookahead: Option<[u8; 8]>,
}

impl<R: Read> FileReader<R> {
    /// Peek the first 8 bytes and locate the "UF" magic to determine the
    /// stream's padding flavor.
    pub fn new(mut reader: R) -> Result<Self> {
        let mut lookahead = [0u8; 8];
        reader.read_exact(&mut lookahead).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                UfError::InvalidFormat("input shorter than 8 bytes; no \"UF\" magic found".into())
            } else {
                UfError::Io(e)
            }
        })?;

        let padding = [0usize, 2, 4]
            .into_iter()
            .find(|&p| &lookahead[p..p + 2] == b"UF")
            .ok_or_else(|| {
                UfError::InvalidFormat("\"UF\" magic not found within the first 6 bytes".into())
            })?;

        Ok(Self {
            reader,
            padding,
            lookahead: Some(lookahead),
        })
    }

    /// Iterate every record to end-of-input, decoding each into a [`Ray`].
    pub fn read_all_rays(mut self) -> Result<Vec<Ray>> {
        let mut rays = Vec::new();

        while let Some(lookahead) = self.lookahead.take() {
            let record_length =
                BigEndian::read_i16(&lookahead[self.padding + 2..self.padding + 4]);
            if record_length < 1 {
                return Err(UfError::InvalidFormat(format!(
                    "record_length {record_length} is not positive"
                )));
            }
            let record_bytes = record_length as usize * 2;

            let held = &lookahead[self.padding..];
            let mut record = Vec::with_capacity(record_bytes);
            if held.len() > record_bytes {
                record.extend_from_slice(&held[..record_bytes]);
            } else {
                record.extend_from_slice(held);
                let remaining = record_bytes - record.len();
                if remaining > 0 {
                    let mut buf = vec![0u8; remaining];
                    self.reader.read_exact(&mut buf).map_err(|e| {
                        if e.kind() == std::io::ErrorKind::UnexpectedEof {
                            UfError::InvalidFormat("record truncated before its declared length".into())
                        } else {
                            UfError::Io(e)
                        }
                    })?;
                    record.extend_from_slice(&buf);
                }
            }

            rays.push(Ray::decode(&record)?);

            if self.padding > 0 {
                let mut pad = vec![0u8; self.padding];
                self.reader.read_exact(&mut pad).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::UnexpectedEof {
                        UfError::InvalidFormat("record missing its trailing padding".into())
                    } else {
                        UfError::Io(e)
                    }
                })?;
            }

            self.lookahead = self.peek_next()?;
        }

        Ok(rays)
    }

    /// Read up to 8 bytes for the next record's look-ahead. Fewer than 8
    /// bytes available (including zero) means iteration is over.
    fn peek_next(&mut self) -> Result<Option<[u8; 8]>> {
        let mut buf = [0u8; 8];
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == buf.len() {
            Ok(Some(buf))
        } else {
            Ok(None)
        }
    }
}

/// Per-sweep ray index boundaries, computed from a decoded ray list
/// (spec §4.1 "Sweep indexing").
#[derive(Debug, Clone)]
pub struct SweepIndex {
    pub ray_sweep_numbers: Vec<i16>,
    /// Distinct sweep numbers, in order of first occurrence.
    pub sweep_numbers: Vec<i16>,
    pub first_ray_in_sweep: Vec<usize>,
    pub last_ray_in_sweep: Vec<usize>,
}

impl SweepIndex {
    pub fn build(rays: &[Ray]) -> Self {
        let ray_sweep_numbers: Vec<i16> = rays.iter().map(|r| r.mandatory_header.sweep_number).collect();

        let mut sweep_numbers = Vec::new();
        let mut first_ray_in_sweep = Vec::new();
        let mut last_ray_in_sweep = Vec::new();

        for (index, &sweep_number) in ray_sweep_numbers.iter().enumerate() {
            match sweep_numbers.iter().position(|&n| n == sweep_number) {
                Some(pos) => {
                    last_ray_in_sweep[pos] = index;
                }
                None => {
                    sweep_numbers.push(sweep_number);
                    first_ray_in_sweep.push(index);
                    last_ray_in_sweep.push(index);
                }
            }
        }

        Self {
            ray_sweep_numbers,
            sweep_numbers,
            first_ray_in_sweep,
            last_ray_in_sweep,
        }
    }

    pub fn nsweeps(&self) -> usize {
        self.sweep_numbers.len()
    }
}
