//! Framing Module
//!
//! Length-prefixed message framing over any byte stream. Every frame is a
//! 4-byte big-endian payload length followed by the payload, the `{packet, 4}`
//! convention of Erlang ports and sockets.
//!
//! A single read on a stream socket may return part of a frame or several
//! frames at once; [`FramedTransport::read_frame`] hides that and always
//! returns exactly one whole payload.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use crate::error::{FrameError, FramingError, TransportError};
use std::io::{ErrorKind, Read, Write};
use tracing::trace;

/// Default largest accepted payload (64 MiB)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;

/// Length prefix size in bytes
pub const PREFIX_SIZE: usize = 4;

// Initial payload buffer; larger frames grow as bytes actually arrive
const READ_CHUNK: usize = 64 * 1024;

/// Framed reader and writer over a byte stream
///
/// # Examples
///
/// ```rust
/// use adapters_socket::FramedTransport;
/// use std::io::Cursor;
///
/// let mut writer = FramedTransport::new(Cursor::new(Vec::new()));
/// writer.write_frame(b"hello").unwrap();
/// let bytes = writer.into_inner().into_inner();
/// assert_eq!(bytes, vec![0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o']);
///
/// let mut reader = FramedTransport::new(Cursor::new(bytes));
/// assert_eq!(reader.read_frame().unwrap(), b"hello");
/// ```
#[derive(Debug)]
pub struct FramedTransport<S> {
    stream: S,
    max_frame_size: usize,
}

impl<S: Read + Write> FramedTransport<S> {
    /// Wrap a stream with the default maximum frame size
    pub fn new(stream: S) -> Self {
        Self::with_max_frame_size(stream, DEFAULT_MAX_FRAME_SIZE)
    }

    /// Wrap a stream with an explicit maximum frame size
    ///
    /// The limit is clamped to what a 4-byte prefix can express.
    pub fn with_max_frame_size(stream: S, max_frame_size: usize) -> Self {
        let max_frame_size = max_frame_size.min(u32::MAX as usize);
        Self { stream, max_frame_size }
    }

    /// Write one frame
    ///
    /// The prefix and payload go out in a single `write_all`, then the stream
    /// is flushed. An oversized payload is rejected before anything is
    /// written, so the stream stays usable.
    ///
    /// # Arguments
    /// * `payload` - Frame contents
    ///
    /// # Returns
    /// * `Ok(())` - The whole frame was handed to the stream
    /// * `Err(FrameError)` - Payload too large or the stream failed
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        if payload.len() > self.max_frame_size {
            return Err(FramingError::FrameTooLarge {
                length: payload.len(),
                max: self.max_frame_size,
            }
            .into());
        }
        // Fits: max_frame_size is clamped to u32::MAX
        let prefix = (payload.len() as u32).to_be_bytes();
        let mut frame = Vec::with_capacity(PREFIX_SIZE + payload.len());
        frame.extend_from_slice(&prefix);
        frame.extend_from_slice(payload);

        self.stream.write_all(&frame).map_err(TransportError::from)?;
        self.stream.flush().map_err(TransportError::from)?;
        trace!(bytes = payload.len(), "frame written");
        Ok(())
    }

    /// Read one frame
    ///
    /// Blocks until the prefix and the full payload have arrived.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The payload
    /// * `Err(FrameError::Transport(TransportError::Closed))` - Clean end of
    ///   stream before the frame started
    /// * `Err(FrameError::Transport(TransportError::UnexpectedEof { .. }))` -
    ///   The stream ended inside the frame
    /// * `Err(FrameError::Framing(_))` - Declared length above the maximum;
    ///   the payload is not read
    pub fn read_frame(&mut self) -> Result<Vec<u8>, FrameError> {
        let mut prefix = [0u8; PREFIX_SIZE];
        let received = self.read_full(&mut prefix)?;
        if received == 0 {
            return Err(TransportError::Closed.into());
        }
        if received < PREFIX_SIZE {
            return Err(TransportError::UnexpectedEof { expected: PREFIX_SIZE, received }.into());
        }

        let length = u32::from_be_bytes(prefix) as usize;
        if length > self.max_frame_size {
            return Err(FramingError::FrameTooLarge { length, max: self.max_frame_size }.into());
        }

        let mut payload = Vec::with_capacity(length.min(READ_CHUNK));
        (&mut self.stream)
            .take(length as u64)
            .read_to_end(&mut payload)
            .map_err(TransportError::from)?;
        if payload.len() < length {
            let received = payload.len();
            return Err(TransportError::UnexpectedEof { expected: length, received }.into());
        }
        trace!(bytes = length, "frame read");
        Ok(payload)
    }

    /// Fill `buf` unless the stream ends first; returns the bytes read
    fn read_full(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    /// The largest payload this transport reads or writes
    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    /// The underlying stream
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}
